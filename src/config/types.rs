// Configuration type definitions

use serde::Deserialize;

/// `[client]` section: how to launch the database client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    /// Passed to the client before the target database
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_program() -> String {
    "mysql".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            program: default_program(),
            host: None,
            user: None,
            extra_args: Vec::new(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
}
