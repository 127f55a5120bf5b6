use crate::constants::network as network_constants;
use crate::errors::ClientError;
use crate::logger::Logger;
use crate::request::StormpathRequest;
use reqwest::redirect::Policy;
use std::time::Duration;
use url::Url;

#[derive(Clone)]
pub struct Client {
    base_url: String,
    logger: Logger,
    following: reqwest::Client,
    direct: reqwest::Client,
    timeout_ms: u64,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url)?;
        let following = build_http_client(None)?;
        let direct = build_http_client(Some(Policy::none()))?;
        Ok(Self {
            base_url,
            logger: Logger::new("stormpath").child("client"),
            following,
            direct,
            timeout_ms: network_constants::TIMEOUT_REQUEST_MS,
        })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var("STORMPATH_BASE_URL").map_err(|_| {
            ClientError::invalid_request("STORMPATH_BASE_URL is not set")
                .with_hint("Set STORMPATH_BASE_URL, e.g. \"https://api.stormpath.com/v1\".")
        })?;
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_timeout_ms(&mut self, timeout_ms: u64) {
        self.timeout_ms = timeout_ms;
    }

    // Resolves a resource path against the base URL; absolute URLs pass
    // through untouched.
    pub fn absolute_url(&self, path: &str) -> String {
        if Url::parse(path).is_ok() {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn execute(
        &self,
        request: &StormpathRequest,
    ) -> Result<reqwest::Response, ClientError> {
        let url = self.absolute_url(&request.url);
        let http_request = request.to_http_request_at(&url)?;
        self.logger.debug(
            "execute",
            Some(&serde_json::json!({
                "method": request.method.as_str(),
                "url": http_request.url().as_str(),
            })),
        );
        let client = if request.follow_redirects {
            &self.following
        } else {
            &self.direct
        };
        let response = tokio::time::timeout(
            Duration::from_millis(self.timeout_ms),
            client.execute(http_request),
        )
        .await
        .map_err(|_| ClientError::timeout("Request timed out"))?
        .map_err(map_transport_error)?;
        Ok(response)
    }
}

fn build_http_client(redirect: Option<Policy>) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder().user_agent(network_constants::USER_AGENT);
    if let Some(policy) = redirect {
        builder = builder.redirect(policy);
    }
    builder
        .build()
        .map_err(|err| ClientError::internal(format!("HTTP client build failed: {}", err)))
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ClientError::invalid_request("base URL is required")
            .with_hint("Expected a URL like \"https://api.stormpath.com/v1\"."));
    }
    let mut url = Url::parse(raw).map_err(|_| {
        ClientError::invalid_request("Invalid base URL")
            .with_details(serde_json::json!({ "base_url": raw }))
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ClientError::invalid_request(
            "Only http/https URLs are supported",
        ));
    }
    url.set_fragment(None);
    url.set_query(None);
    let normalized = format!("{}{}", url.origin().ascii_serialization(), url.path());
    Ok(normalized.trim_end_matches('/').to_string())
}

fn map_transport_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::timeout(format!("Request timed out: {}", err))
    } else if err.is_connect() || err.is_request() {
        ClientError::retryable(format!("Request failed: {}", err))
    } else {
        ClientError::internal(format!("Request failed: {}", err))
    }
}
