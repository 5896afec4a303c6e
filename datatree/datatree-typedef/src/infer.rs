use serde_json::Value;

use crate::def::{Def, DefValue, ExtraDefs};

/// Arrays nested deeper than this are typed `[?]`
pub const MAX_ARRAY_DEPTH: usize = 5;

/// Infer a type definition from the shape of a value.
///
/// Arrays are typed by their first element. Array elements of object type are
/// moved into `extra_defs` and referenced by name; without a sink they become `[?]`.
pub fn generate_type_def(value: &Value, extra_defs: Option<&mut ExtraDefs>) -> DefValue {
    generate_type_def_at_depth(value, extra_defs, 0)
}

/// Like [generate_type_def], starting at a given array nesting depth.
/// Only array nesting consumes depth, object nesting does not.
pub fn generate_type_def_at_depth(
    value: &Value,
    mut extra_defs: Option<&mut ExtraDefs>,
    depth: usize,
) -> DefValue {
    match value {
        Value::Array(items) => {
            if depth > MAX_ARRAY_DEPTH {
                return DefValue::unknown_array();
            }

            let element_type = match items.first() {
                Some(first) => {
                    generate_type_def_at_depth(first, extra_defs.as_deref_mut(), depth + 1)
                }
                None => DefValue::unknown(),
            };

            match (element_type, extra_defs) {
                (DefValue::Type(element_type), _) => DefValue::Type(format!("[{element_type}]")),
                (DefValue::Def(element_def), Some(extra_defs)) => {
                    DefValue::Type(format!("[{}]", extra_defs.define(element_def)))
                }
                (DefValue::Def(_), None) => DefValue::unknown_array(),
            }
        }
        Value::Object(object) => {
            let mut def = Def::default();
            for (key, property) in object {
                def.insert(
                    key.clone(),
                    generate_type_def_at_depth(property, extra_defs.as_deref_mut(), depth),
                );
            }
            DefValue::Def(def)
        }
        Value::String(_) => DefValue::from("string"),
        Value::Number(_) => DefValue::from("number"),
        Value::Bool(_) => DefValue::from("bool"),
        Value::Null => DefValue::unknown(),
    }
}
