use datatree_test_utils::{TypeDefTest, expect_eq, json_utils::json_keys_with_prefix};
use datatree_typedef::WidgetRegistry;
use rstest::rstest;
use serde_json::{Value, json};

fn nested_widget_def() -> Value {
    let mut registry = WidgetRegistry::default();
    registry.register_static(
        "NESTED_WIDGET",
        serde_json::from_value(json!({
            "!doc": "A widget with nested properties",
            "data": {
                "!type": "?",
                "level2": { "level3": "string" },
            },
            "my-field": { "inner key": "number", "ok": "bool" },
            "plain": "string",
        }))
        .unwrap(),
    );

    TypeDefTest::new(json!({
        "Table1": { "ENTITY_TYPE": "WIDGET", "type": "NESTED_WIDGET" },
    }))
    .with_registry(registry)
    .def_json()
}

#[rstest]
#[case::identifier("Table1.data")]
#[case::bracket("Table1[\"my-field\"]")]
#[case::nested_identifier("Table1.data.level2")]
#[case::bracket_in_bracket("Table1[\"my-field\"][\"inner key\"]")]
#[case::identifier_in_bracket("Table1[\"my-field\"].ok")]
#[case::plain("Table1.plain")]
fn flattened_key_present(#[case] key: &str) {
    let def = nested_widget_def();
    assert!(def.get(key).is_some(), "`{key}` missing");
}

#[rstest]
#[case::no_dot_for_invalid_identifier("Table1.my-field")]
#[case::third_level("Table1.data.level2.level3")]
#[case::reserved("Table1.!doc")]
#[case::nested_reserved("Table1.data.!type")]
fn flattened_key_absent(#[case] key: &str) {
    let def = nested_widget_def();
    assert!(def.get(key).is_none(), "`{key}` should not be flattened");
}

#[datatree_macros::test]
fn flattened_keys_in_order() {
    let def = nested_widget_def();

    expect_eq!(
        expected = vec![
            "Table1",
            "Table1.data",
            "Table1.data.level2",
            "Table1[\"my-field\"]",
            "Table1[\"my-field\"][\"inner key\"]",
            "Table1[\"my-field\"].ok",
            "Table1.plain",
        ],
        actual = json_keys_with_prefix(&def, "Table1")
    );
}

#[datatree_macros::test]
fn flattened_values_are_copies_of_nested_ones() {
    let def = nested_widget_def();

    expect_eq!(expected = def["Table1"]["data"], actual = def["Table1.data"]);
    expect_eq!(
        expected = json!({ "level3": "string" }),
        actual = def["Table1.data.level2"]
    );
    expect_eq!(
        expected = json!("number"),
        actual = def["Table1[\"my-field\"][\"inner key\"]"]
    );
}

#[datatree_macros::test]
fn table_selected_row_columns_are_flattened() {
    let def = TypeDefTest::new(json!({
        "Table1": {
            "ENTITY_TYPE": "WIDGET",
            "type": "TABLE_WIDGET_V2",
            "tableData": [{ "name": "Ada", "first name": "Ada" }],
        },
    }))
    .def_json();

    expect_eq!(expected = json!("string"), actual = def["Table1.selectedRow.name"]);
    expect_eq!(
        expected = json!("string"),
        actual = def["Table1.selectedRow[\"first name\"]"]
    );
    expect_eq!(expected = json!("[def_1]"), actual = def["Table1.tableData"]);
}
