//! Autocomplete definitions of the built-in widget kinds.

use datatree_core::{EntityConfig, entity::WidgetEntity};
use serde_json::Value;

use crate::{
    def::{DOC_KEY, Def, DefValue, ExtraDefs, URL_KEY},
    infer::generate_type_def,
    registry::WidgetRegistry,
};

pub const DROPDOWN_OPTION_DEF: &str = "$__dropdownOption__$";

pub fn register_builtin_widgets(registry: &mut WidgetRegistry) {
    registry
        .register_static(
            "TEXT_WIDGET",
            documented(
                "Show static text",
                "https://docs.appsmith.com/widget-reference/text",
                [("isVisible", "bool"), ("text", "string")],
            ),
        )
        .register_static(
            "BUTTON_WIDGET",
            documented(
                "Buttons are used to capture user intent and trigger actions based on that intent",
                "https://docs.appsmith.com/widget-reference/button",
                [
                    ("isVisible", "bool"),
                    ("text", "string"),
                    ("isDisabled", "bool"),
                    ("recaptchaToken", "string"),
                ],
            ),
        )
        .register_static(
            "INPUT_WIDGET_V2",
            documented(
                "An input text field is used to capture a users textual input such as their names, numbers, emails etc. Inputs are used in forms and can have custom validations.",
                "https://docs.appsmith.com/widget-reference/input",
                [
                    ("text", "string"),
                    ("inputText", "string"),
                    ("isValid", "bool"),
                    ("isVisible", "bool"),
                    ("isDisabled", "bool"),
                    ("isFocused", "bool"),
                    ("isDirty", "bool"),
                ],
            ),
        )
        .register_static(
            "CHECKBOX_WIDGET",
            documented(
                "Checkbox is a simple UI widget you can use when you want users to make a binary choice",
                "https://docs.appsmith.com/widget-reference/checkbox",
                [
                    ("isVisible", "bool"),
                    ("isChecked", "bool"),
                    ("isDisabled", "bool"),
                ],
            ),
        )
        .register_static(
            "IMAGE_WIDGET",
            documented(
                "Image widget is used to display images in your app. Images must be either a URL or a valid base64.",
                "https://docs.appsmith.com/widget-reference/image",
                [("image", "string"), ("isVisible", "bool")],
            ),
        )
        .register_generator("SELECT_WIDGET", select_definitions)
        .register_generator("DROP_DOWN_WIDGET", dropdown_definitions)
        .register_generator("TABLE_WIDGET_V2", table_definitions);
}

fn documented<const N: usize>(doc: &str, url: &str, properties: [(&str, &str); N]) -> Def {
    let mut def = Def::from_iter([(DOC_KEY, doc), (URL_KEY, url)]);
    def.extend(properties);
    def
}

fn dropdown_option(extra_defs: &mut ExtraDefs) -> String {
    extra_defs.insert(
        DROPDOWN_OPTION_DEF,
        Def::from_iter([("label", "string"), ("value", "string")]),
    );
    format!("[{DROPDOWN_OPTION_DEF}]")
}

fn select_definitions(
    _widget: &WidgetEntity,
    extra_defs: &mut ExtraDefs,
    _config: Option<&EntityConfig>,
) -> Def {
    let mut def = documented(
        "Select is used to capture user input/s from a specified list of permitted inputs. A Select can capture a single choice",
        "https://docs.appsmith.com/widget-reference/dropdown",
        [
            ("isVisible", "bool"),
            ("filterText", "string"),
            ("selectedOptionValue", "string"),
            ("selectedOptionLabel", "string"),
            ("isDisabled", "bool"),
            ("isValid", "bool"),
            ("isDirty", "bool"),
        ],
    );
    def.insert("options", dropdown_option(extra_defs));
    def
}

fn dropdown_definitions(
    widget: &WidgetEntity,
    extra_defs: &mut ExtraDefs,
    _config: Option<&EntityConfig>,
) -> Def {
    let mut def = documented(
        "Dropdown is used to capture user input/s from a specified list of permitted inputs. A Dropdown can capture a single choice as well as multiple choices",
        "https://docs.appsmith.com/widget-reference/dropdown",
        [
            ("isVisible", "bool"),
            ("filterText", "string"),
            ("selectedOptionValue", "string"),
            ("selectedOptionLabel", "string"),
            ("selectedOptionValues", "[string]"),
            ("selectedOptionLabels", "[string]"),
            ("selectedIndex", "number"),
            ("selectedIndexArr", "[number]"),
            ("isDisabled", "bool"),
        ],
    );

    // options bound to a query may carry more fields than label/value
    let options = match widget.properties().get("options") {
        Some(options) if options.as_array().is_some_and(|items| !items.is_empty()) => {
            generate_type_def(options, Some(extra_defs))
        }
        _ => DefValue::Type(dropdown_option(extra_defs)),
    };
    def.insert("options", options);
    def
}

fn table_definitions(
    widget: &WidgetEntity,
    extra_defs: &mut ExtraDefs,
    _config: Option<&EntityConfig>,
) -> Def {
    let properties = widget.properties();
    let row = properties
        .get_path("tableData.0")
        .or_else(|| properties.get("selectedRow"))
        .unwrap_or(&Value::Null);

    let row_type = generate_type_def(row, Some(extra_defs));
    let rows_type = match &row_type {
        DefValue::Def(row_def) => format!("[{}]", extra_defs.define(row_def.clone())),
        DefValue::Type(type_name) => format!("[{type_name}]"),
    };

    let mut def = documented(
        "The Table is the hero widget of Appsmith. You can display data from an API in a table, trigger an action when a user selects a row and even work with large paginated data sets",
        "https://docs.appsmith.com/widget-reference/table",
        [],
    );
    def.insert("selectedRow", row_type.clone());
    def.insert("triggeredRow", row_type);
    def.insert("selectedRows", rows_type.clone());
    def.insert("tableData", rows_type.clone());
    def.insert("filteredTableData", rows_type);
    def.extend([
        ("selectedRowIndex", "number"),
        ("selectedRowIndices", "[number]"),
        ("triggeredRowIndex", "number"),
        ("pageNo", "number"),
        ("pageSize", "number"),
        ("isVisible", "bool"),
        ("searchText", "string"),
        ("totalRecordsCount", "number"),
        ("updatedRowIndices", "[number]"),
        ("isAddRowInProgress", "bool"),
        ("nextPageVisited", "bool"),
        ("previousPageVisited", "bool"),
    ]);
    def.insert(
        "sortOrder",
        Def::from_iter([("column", "string"), ("order", "?")]),
    );
    def
}
