use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("Logging prefix must not be blank".to_string());
        }
        Ok(())
    }
}
