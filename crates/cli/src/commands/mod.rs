pub mod args;
pub mod chart;
pub mod configure;
pub mod horoscope;
pub mod lookup;
pub mod numerology;

use anyhow::{Context, Result};
use starmap_client::StarMapClient;
use starmap_core::{ApiResponse, ChartDefaults};

/// Client and chart defaults built from the user config
pub struct Session {
    pub client: StarMapClient,
    pub defaults: ChartDefaults,
}

impl Session {
    pub fn load() -> Result<Self> {
        let config = configure::load_config()?;
        let api_key =
            configure::resolve_api_key(std::env::var(configure::API_KEY_ENV).ok(), &config)
                .with_context(|| {
                    format!(
                        "No API key configured. Run 'starmap configure' or set {}",
                        configure::API_KEY_ENV
                    )
                })?;

        let client = StarMapClient::new(api_key).with_base_url(config.base_url());
        tracing::debug!(base_url = client.base_url(), "client ready");

        Ok(Self {
            client,
            defaults: config.defaults,
        })
    }
}

/// Print a JSON endpoint's result, fallback included, as pretty JSON
pub fn print_response(response: ApiResponse) -> Result<()> {
    if let ApiResponse::Unparsed { status_code, .. } = &response {
        eprintln!("⚠ Response was not JSON (HTTP {})", status_code);
    }
    let text = serde_json::to_string_pretty(&response.into_value())
        .context("Failed to format response")?;
    println!("{}", text);
    Ok(())
}
