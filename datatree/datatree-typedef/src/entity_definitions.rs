//! Type definitions of the built-in entity kinds that are not widgets.

use datatree_core::entity::{ActionEntity, AppsmithEntity, ENTITY_TYPE_KEY};
use serde_json::Value;

use crate::{
    def::{DOC_KEY, Def, DefValue, ExtraDefs, TYPE_KEY, URL_KEY},
    infer::generate_type_def,
    setters::PROMISE_TYPE,
};

pub fn action_def(entity: &ActionEntity, extra_defs: &mut ExtraDefs) -> Def {
    let data_type = generate_type_def(
        entity.0.get("data").unwrap_or(&Value::Null),
        Some(extra_defs),
    );

    let mut data = Def::from_iter([(DOC_KEY, "The response of the action")]);
    match data_type {
        DefValue::Type(type_name) => data.insert(TYPE_KEY, type_name),
        DefValue::Def(data_def) => data.extend(data_def),
    }

    Def::from_iter([
        (
            DOC_KEY,
            DefValue::from(
                "Actions allow you to connect your widgets to your backend data in a secure manner.",
            ),
        ),
        (
            URL_KEY,
            "https://docs.appsmith.com/v/v1.2.1/framework-reference/run".into(),
        ),
        ("isLoading", "bool".into()),
        ("data", data.into()),
        (
            "responseMeta",
            Def::from_iter([
                (DOC_KEY, "The response meta of the action"),
                (TYPE_KEY, "?"),
            ])
            .into(),
        ),
        ("run", format!("fn(params: ?) -> {PROMISE_TYPE}").into()),
        ("clear", format!("fn() -> {PROMISE_TYPE}").into()),
    ])
}

pub fn appsmith_def(entity: &AppsmithEntity, extra_defs: &mut ExtraDefs) -> Def {
    let mut def = Def::from_iter([
        (
            DOC_KEY,
            "A global object that provides access to information and functionalities within an application",
        ),
        (
            URL_KEY,
            "https://docs.appsmith.com/reference/appsmith-framework/context-object",
        ),
    ]);

    for (key, value) in entity.0.iter() {
        if key == ENTITY_TYPE_KEY {
            continue;
        }
        def.insert(key.clone(), generate_type_def(value, Some(extra_defs)));
    }

    def
}
