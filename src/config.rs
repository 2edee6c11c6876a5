use anyhow::Context as _;

/// Credentials for the account being cleaned. Read from the environment
/// once at startup and passed by parameter from there on.
#[derive(Debug, Clone)]
pub struct Config {
    pub account_id: String,
    pub api_token: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_token = std::env::var("CLOUDFLARE_API_TOKEN")
            .with_context(|| "CLOUDFLARE_API_TOKEN must be set")?;
        let account_id = std::env::var("CLOUDFLARE_ACCOUNT_ID")
            .with_context(|| "CLOUDFLARE_ACCOUNT_ID must be set")?;

        Ok(Self {
            account_id,
            api_token,
        })
    }
}
