use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Value of the `!name` key of the produced definition
    pub def_name: String,
    /// Prefix of generated auxiliary definition names
    pub extra_def_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            def_name: "DATA_TREE".to_string(),
            extra_def_prefix: "def_".to_string(),
        }
    }
}
