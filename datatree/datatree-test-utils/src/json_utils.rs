use serde_json::Value;

/// Top level keys of a JSON object, in order
pub fn json_keys(value: &Value) -> Vec<&str> {
    let Value::Object(object) = value else {
        panic!("Not an object");
    };
    object.keys().map(String::as_str).collect()
}

/// Top level keys of a JSON object starting with `prefix`, in order
pub fn json_keys_with_prefix<'v>(value: &'v Value, prefix: &str) -> Vec<&'v str> {
    json_keys(value)
        .into_iter()
        .filter(|key| key.starts_with(prefix))
        .collect()
}
