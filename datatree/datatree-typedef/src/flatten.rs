use lazy_regex::regex_is_match;

use crate::def::{Def, DefValue, is_reserved_key};

pub fn is_valid_variable_name(name: &str) -> bool {
    regex_is_match!(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$", name)
}

/// The expression a user types to access `key` on `parent`.
pub fn completion_path(parent: &str, key: &str) -> String {
    if is_valid_variable_name(key) {
        format!("{parent}.{key}")
    } else {
        format!("{parent}[\"{key}\"]")
    }
}

/// Promote the properties of `def[entity_name]` to top level keys of `def`.
///
/// Direct properties and their own properties are promoted, deeper levels are not.
/// Does nothing when the entity is absent or has a plain type.
pub fn flatten_def(def: &mut Def, entity_name: &str) {
    let Some(DefValue::Def(entity_def)) = def.get(entity_name) else {
        return;
    };

    let mut flattened = vec![];

    for (key, value) in entity_def.iter() {
        if is_reserved_key(key) {
            continue;
        }

        let parent_completion = completion_path(entity_name, key);
        flattened.push((parent_completion.clone(), value.clone()));

        let DefValue::Def(child_def) = value else {
            continue;
        };

        for (sub_key, sub_value) in child_def.iter() {
            if is_reserved_key(sub_key) {
                continue;
            }
            flattened.push((completion_path(&parent_completion, sub_key), sub_value.clone()));
        }
    }

    def.extend(flattened);
}
