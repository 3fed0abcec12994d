use pandoc_bridge_exec::{PandocConfig, DEFAULT_INPUT_FORMAT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// How the pandoc executable is located and run
    #[serde(default)]
    pub pandoc: PandocConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Reader format used when `--from` is not given
    #[serde(default = "default_input_format")]
    pub input_format: String,
}

fn default_input_format() -> String {
    DEFAULT_INPUT_FORMAT.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            input_format: default_input_format(),
        }
    }
}
