use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "petrodash", version, about = "Oil well dashboard for the terminal")]
pub struct CliArgs {
    /// Print a wells report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the API key sent as X-API-Key
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Maximum number of wells to load
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Number of companies listed in the headless report
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("API_URL", url);
        }
        if let Some(key) = &self.api_key {
            std::env::set_var("API_KEY", key);
        }
        if let Some(limit) = self.limit {
            std::env::set_var("MAX_POZOS", limit.to_string());
        }
    }
}
