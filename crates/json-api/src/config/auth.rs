//! Auth Config

use clap::Args;

/// API token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Bearer tokens allowed to create, update, and delete products
    #[arg(
        long,
        env = "API_TOKENS",
        value_delimiter = ',',
        hide_env_values = true
    )]
    pub api_tokens: Vec<String>,
}
