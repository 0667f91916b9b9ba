//! Browser transport for the records client, plus startup config loading.

use common::api::{ApiReply, ApiRequest, Method, RecordsClient, Transport};
use common::config::{ClientConfig, CONFIG_PATH, DEFAULT_API_BASE_URL};
use common::error::ApiError;
use gloo_net::http::Request;

/// Sends requests with `fetch` against the configured API base.
#[derive(Clone, PartialEq)]
pub struct GlooTransport {
    config: ClientConfig,
}

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, ApiError> {
        let url = self.config.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let response = match request.body {
            Some(body) => builder.json(&body).map_err(network)?.send().await,
            None => builder.send().await,
        }
        .map_err(network)?;

        let status = response.status();
        let body = response.text().await.map_err(network)?;
        Ok(ApiReply::new(status, body))
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

pub type Client = RecordsClient<GlooTransport>;

pub fn client(config: &ClientConfig) -> Client {
    RecordsClient::new(GlooTransport {
        config: config.clone(),
    })
}

/// Config baked in at build time, used when the host does not serve one.
pub fn fallback_config() -> ClientConfig {
    ClientConfig::new(option_env!("CLINIC_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Reads `/config.json` from the host that served the bundle.
pub async fn load_config() -> ClientConfig {
    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            log::info!("no client config served ({}), using build default", response.status());
            return fallback_config();
        }
        Err(err) => {
            log::warn!("loading client config failed: {}", err);
            return fallback_config();
        }
    };

    match response.json::<ClientConfig>().await {
        Ok(config) => ClientConfig::new(config.api_base_url),
        Err(err) => {
            log::warn!("client config is malformed: {}", err);
            fallback_config()
        }
    }
}
