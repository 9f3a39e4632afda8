use clap::Parser;

/// Storefront demo server
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "STOREFRONT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "STOREFRONT_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, env = "STOREFRONT_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Reads `.env` if present, then parses arguments with env fallbacks.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `EnvFilter` directive
    pub fn log_directive(&self) -> String {
        format!("storefront={0},tower_http={0}", self.log_level)
    }
}
