use datatree_test_utils::{TypeDefTest, expect_eq, json_utils::json_keys};
use datatree_typedef::{Config, Def, WidgetRegistry, def::DOC_KEY, infer::generate_type_def};
use serde_json::{Value, json};

fn page() -> TypeDefTest {
    TypeDefTest::new(json!({
        "Text1": {
            "ENTITY_TYPE": "WIDGET",
            "widgetId": "t1",
            "type": "TEXT_WIDGET",
            "text": "Hello",
        },
        "Api1": {
            "ENTITY_TYPE": "ACTION",
            "actionId": "a1",
            "data": [{ "id": 1, "email": "ada@example.com" }],
            "isLoading": false,
        },
        "appsmith": {
            "ENTITY_TYPE": "APPSMITH",
            "store": {},
            "URL": { "host": "localhost" },
            "mode": "EDIT",
        },
        "JSObject1": {
            "ENTITY_TYPE": "JSACTION",
            "actionId": "j1",
            "body": "export default {}",
            "myVar1": [1, 2],
        },
        "Chart1": { "ENTITY_TYPE": "WIDGET", "type": "CHART_WIDGET" },
    }))
    .with_config_tree(json!({
        "JSObject1": {
            "meta": { "myFun1": { "arguments": [] } },
            "variables": ["myVar1"],
        },
    }))
    .with_sample("JSObject1.myFun1", json!("done"))
}

#[datatree_macros::test]
fn top_level_keys_follow_the_data_tree() {
    let def = page().def_json();

    expect_eq!(
        expected = vec![
            "!name",
            "Text1",
            "Text1.isVisible",
            "Text1.text",
            "Api1",
            "Api1.isLoading",
            "Api1.data",
            "Api1.responseMeta",
            "Api1.run",
            "Api1.clear",
            "appsmith",
            "JSObject1",
            "!define",
        ],
        actual = json_keys(&def)
    );
    expect_eq!(expected = json!("DATA_TREE"), actual = def["!name"]);
}

#[datatree_macros::test]
fn entity_info_index() {
    let output = page().create();

    expect_eq!(
        expected = json!({
            "Text1": { "type": "WIDGET", "subType": "TEXT_WIDGET" },
            "Api1": { "type": "ACTION", "subType": "ACTION" },
            "appsmith": { "type": "APPSMITH", "subType": "APPSMITH" },
            "JSObject1": { "type": "JSACTION", "subType": "JSACTION" },
        }),
        actual = serde_json::to_value(&output.entity_info).unwrap()
    );
}

#[datatree_macros::test]
fn action_rows_are_defined_once() {
    let def = page().def_json();

    expect_eq!(
        expected = json!({ "!doc": "The response of the action", "!type": "[def_1]" }),
        actual = def["Api1.data"]
    );
    expect_eq!(
        expected = json!({ "def_1": { "id": "number", "email": "string" } }),
        actual = def["!define"]
    );
}

#[datatree_macros::test]
fn js_object_members() {
    let def = page().def_json();

    expect_eq!(
        expected = json!({
            "myFun1": { "!type": "fn()", "data": "string" },
            "myFun1.data": "string",
            "myVar1": "[number]",
        }),
        actual = def["JSObject1"]
    );
}

#[datatree_macros::test]
fn projection_is_deterministic() {
    let test = page();
    let first = test.create();
    let second = test.create();

    expect_eq!(expected = &first.def, actual = &second.def);
    expect_eq!(expected = &first.entity_info, actual = &second.entity_info);
    expect_eq!(
        expected = serde_json::to_string(&first.def).unwrap(),
        actual = serde_json::to_string(&second.def).unwrap()
    );
}

#[datatree_macros::test]
fn singleton_is_always_named_appsmith() {
    let output = TypeDefTest::new(json!({
        "globals": { "ENTITY_TYPE": "APPSMITH", "user": { "name": "Ada" } },
    }))
    .create();
    let def = serde_json::to_value(&output.def).unwrap();

    assert!(def.get("globals").is_none());
    expect_eq!(expected = json!({ "name": "string" }), actual = def["appsmith"]["user"]);
    expect_eq!(
        expected = json!({ "appsmith": { "type": "APPSMITH", "subType": "APPSMITH" } }),
        actual = serde_json::to_value(&output.entity_info).unwrap()
    );
}

#[datatree_macros::test]
fn no_define_without_extra_defs() {
    let def = TypeDefTest::new(json!({
        "Text1": { "ENTITY_TYPE": "WIDGET", "type": "TEXT_WIDGET" },
    }))
    .def_json();

    assert!(def.get("!define").is_none());
}

#[datatree_macros::test]
fn unregistered_widgets_are_skipped() {
    let output = TypeDefTest::new(json!({
        "Chart1": { "ENTITY_TYPE": "WIDGET", "type": "CHART_WIDGET" },
    }))
    .create();

    expect_eq!(expected = vec!["!name"], actual = output.def.keys().collect::<Vec<_>>());
    assert!(output.entity_info.is_empty());
}

#[datatree_macros::test]
fn generator_receives_instance_config_and_sink() {
    let mut registry = WidgetRegistry::default();
    registry.register_generator("LIST_WIDGET", |widget, extra_defs, entity_config| {
        let mut def = Def::default();
        if let Some(label) = entity_config
            .and_then(|config| config.other.get("label"))
            .and_then(Value::as_str)
        {
            def.insert(DOC_KEY, label);
        }
        def.insert(
            "listData",
            generate_type_def(
                widget.properties().get("listData").unwrap_or(&Value::Null),
                Some(extra_defs),
            ),
        );
        def
    });

    let def = TypeDefTest::new(json!({
        "List1": {
            "ENTITY_TYPE": "WIDGET",
            "type": "LIST_WIDGET",
            "listData": [{ "title": "first" }],
        },
    }))
    .with_config_tree(json!({ "List1": { "label": "A list" } }))
    .with_registry(registry)
    .def_json();

    expect_eq!(
        expected = json!({ "!doc": "A list", "listData": "[def_1]" }),
        actual = def["List1"]
    );
    expect_eq!(expected = json!("[def_1]"), actual = def["List1.listData"]);
    expect_eq!(
        expected = json!({ "def_1": { "title": "string" } }),
        actual = def["!define"]
    );
}

#[datatree_macros::test]
fn configured_names() {
    let def = TypeDefTest::new(json!({
        "Api1": { "ENTITY_TYPE": "ACTION", "data": [{ "id": 1 }] },
    }))
    .with_config(Config {
        def_name: "PAGE_TREE".to_string(),
        extra_def_prefix: "row_".to_string(),
    })
    .def_json();

    expect_eq!(expected = json!("PAGE_TREE"), actual = def["!name"]);
    expect_eq!(expected = json!("[row_1]"), actual = def["Api1.data"]["!type"]);
}

#[datatree_macros::test]
fn malformed_entities_do_not_hide_the_rest() {
    let output = TypeDefTest::new(json!({
        "pageList": [1, 2],
        "Broken1": { "ENTITY_TYPE": "WIDGET" },
        "Text1": { "ENTITY_TYPE": "WIDGET", "type": "TEXT_WIDGET" },
        "title": "Home",
    }))
    .create();
    let def = serde_json::to_value(&output.def).unwrap();

    expect_eq!(
        expected = vec!["!name", "Text1", "Text1.isVisible", "Text1.text"],
        actual = json_keys(&def)
    );
    expect_eq!(
        expected = json!({ "Text1": { "type": "WIDGET", "subType": "TEXT_WIDGET" } }),
        actual = serde_json::to_value(&output.entity_info).unwrap()
    );
}
