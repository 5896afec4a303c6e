use datatree_test_utils::{TypeDefTest, expect_eq, json_utils::json_keys_with_prefix};
use serde_json::json;

#[datatree_macros::test]
fn functions_and_variables() {
    let def = TypeDefTest::new(json!({
        "JSObject1": {
            "ENTITY_TYPE": "JSACTION",
            "body": "export default {}",
            "myVar1": { "count": 1 },
            "myVar2": null,
        },
    }))
    .with_config_tree(json!({
        "JSObject1": {
            "meta": {
                "fetchUsers": {
                    "arguments": [
                        { "name": "page" },
                        { "name": "page" },
                        { "name": "1bad" },
                        { "name": "size" },
                    ],
                    "isAsync": true,
                },
                "noSample": {},
            },
            "variables": ["myVar1", "myVar2", "missingVar"],
        },
    }))
    .with_sample("JSObject1.fetchUsers", json!([{ "id": 1 }]))
    .def_json();

    expect_eq!(
        expected = json!({
            "fetchUsers": { "!type": "fn(page: ?, size: ?)", "data": "[def_1]" },
            "fetchUsers.data": "[def_1]",
            "noSample": { "!type": "fn()", "data": "?" },
            "noSample.data": "?",
            "myVar1": { "count": "number" },
            "myVar2": "?",
            "missingVar": "?",
        }),
        actual = def["JSObject1"]
    );
    expect_eq!(
        expected = json!({ "def_1": { "id": "number" } }),
        actual = def["!define"]
    );
}

#[datatree_macros::test]
fn js_objects_are_not_flattened() {
    let def = TypeDefTest::new(json!({
        "JSObject1": { "ENTITY_TYPE": "JSACTION", "myVar1": { "count": 1 } },
    }))
    .with_config_tree(json!({ "JSObject1": { "variables": ["myVar1"] } }))
    .def_json();

    expect_eq!(
        expected = vec!["JSObject1"],
        actual = json_keys_with_prefix(&def, "JSObject1")
    );
}

#[datatree_macros::test]
fn missing_config_contributes_no_members() {
    let output = TypeDefTest::new(json!({
        "JSObject1": { "ENTITY_TYPE": "JSACTION", "myVar1": 1 },
    }))
    .create();

    expect_eq!(
        expected = json!({}),
        actual = serde_json::to_value(&output.def).unwrap()["JSObject1"]
    );
    expect_eq!(
        expected = json!({ "JSObject1": { "type": "JSACTION", "subType": "JSACTION" } }),
        actual = serde_json::to_value(&output.entity_info).unwrap()
    );
}
