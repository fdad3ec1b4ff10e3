use clap::{Args, Parser};

pub const DEFAULT_BASE_URL: &str = "https://www.amazon.de/gp/product/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "scrapmazon", about = "JSON API for Amazon Prime Video movie pages")]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "SCRAPMAZON_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SCRAPMAZON_PORT", default_value_t = 8080)]
    pub port: u16,

    #[command(flatten)]
    pub fetcher: FetcherConfig,
}

/// How product pages are requested.
#[derive(Args, Debug, Clone)]
pub struct FetcherConfig {
    /// Product page URL prefix, the amazon_id is appended as is
    #[arg(long, env = "SCRAPMAZON_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "SCRAPMAZON_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Upstream request timeout (default: wait forever)
    #[arg(long, env = "SCRAPMAZON_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[arg(long, env = "SCRAPMAZON_MAX_REDIRECTS", default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}
