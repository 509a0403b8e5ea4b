//! Transport layer between `SlackWebApi` and Slack's HTTP endpoints

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use super::endpoint::Endpoint;
use super::parameters::Parameters;
use crate::core::config::ApiConfig;
use crate::errors::SlackError;

/// Decoded JSON object returned by a Web API method.
pub type Response = Map<String, Value>;

/// Performs Web API calls on behalf of `SlackWebApi`.
///
/// Implementations own transport concerns (HTTP, JSON decoding, retries) and
/// return the decoded body of a successful call.
#[async_trait]
pub trait NetworkInterface: Send + Sync {
    async fn request(
        &self,
        endpoint: Endpoint,
        token: &str,
        parameters: Parameters,
    ) -> Result<Response, SlackError>;

    async fn upload_request(
        &self,
        token: &str,
        data: Vec<u8>,
        parameters: Parameters,
    ) -> Result<Response, SlackError>;
}

/// Slack error codes that mean "slow down" when returned with HTTP 200.
const RATE_LIMITED_CODES: [&str; 2] = ["ratelimited", "rate_limited"];

/// `NetworkInterface` backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpNetworkInterface {
    http: Client,
    base_url: Url,
    max_retries: u32,
}

impl HttpNetworkInterface {
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: &ApiConfig) -> Result<Self, SlackError> {
        // Url::join drops the last path segment unless the base ends in '/'.
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SlackError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            max_retries: config.max_retries,
        })
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, SlackError> {
        Ok(self.base_url.join(endpoint.as_str())?)
    }

    /// Send a request built by `build`, retrying while Slack rate limits us.
    async fn send_with_rate_limit<F>(
        &self,
        endpoint: Endpoint,
        build: F,
    ) -> Result<Response, SlackError>
    where
        F: Fn() -> Result<reqwest::RequestBuilder, SlackError> + Send + Sync,
    {
        let mut attempts = 0u32;

        loop {
            match self.send_once(endpoint, build()?).await {
                Err(SlackError::RateLimited(retry_after)) if attempts < self.max_retries => {
                    attempts += 1;
                    warn!(
                        "Slack rate limited {}, waiting {:?} before retry (attempt {}/{})",
                        endpoint, retry_after, attempts, self.max_retries
                    );
                    tokio::time::sleep(retry_after).await;
                }
                other => return other,
            }
        }
    }

    async fn send_once(
        &self,
        endpoint: Endpoint,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, SlackError> {
        let resp = request.send().await?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SlackError::RateLimited(Self::parse_retry_after(&resp)));
        }

        if !resp.status().is_success() {
            return Err(SlackError::HttpError(format!(
                "{} HTTP {}",
                endpoint,
                resp.status()
            )));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| SlackError::ParseError(format!("{endpoint} JSON parse error: {e}")))?;

        check_ok(endpoint, body)
    }

    /// Parse the `Retry-After` header from an HTTP 429 response.
    ///
    /// Falls back to a default of 1 second if the header is missing or invalid.
    fn parse_retry_after(resp: &reqwest::Response) -> Duration {
        resp.headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map_or(Duration::from_secs(1), Duration::from_secs)
    }
}

#[async_trait]
impl NetworkInterface for HttpNetworkInterface {
    async fn request(
        &self,
        endpoint: Endpoint,
        token: &str,
        parameters: Parameters,
    ) -> Result<Response, SlackError> {
        let url = self.endpoint_url(endpoint)?;
        let fields = form_fields(&parameters);
        debug!("Slack POST {} ({} fields)", url, fields.len());

        self.send_with_rate_limit(endpoint, || {
            Ok(self
                .http
                .post(url.clone())
                .bearer_auth(token)
                .form(&fields))
        })
        .await
    }

    async fn upload_request(
        &self,
        token: &str,
        data: Vec<u8>,
        parameters: Parameters,
    ) -> Result<Response, SlackError> {
        let endpoint = Endpoint::FilesUpload;
        let url = self.endpoint_url(endpoint)?;
        let filename = parameters
            .get("filename")
            .and_then(Value::as_str)
            .unwrap_or("upload")
            .to_string();
        let mime = mime_guess::from_path(&filename).first_or_octet_stream();
        let fields = form_fields(&parameters);
        debug!("Slack upload {} ({} bytes, {})", filename, data.len(), mime);

        self.send_with_rate_limit(endpoint, || {
            let file_part = Part::bytes(data.clone())
                .file_name(filename.clone())
                .mime_str(mime.essence_str())?;
            let form = fields
                .iter()
                .fold(Form::new(), |form, (key, value)| {
                    form.text(key.clone(), value.clone())
                })
                .part("file", file_part);

            Ok(self.http.post(url.clone()).bearer_auth(token).multipart(form))
        })
        .await
    }
}

/// Turn a decoded body into a `Response`, mapping `"ok": false` to an error.
///
/// # Errors
///
/// `ParseError` if the body is not an object, `RateLimited` for Slack's
/// rate limit codes, `ApiError` carrying the Slack error code otherwise.
pub fn check_ok(endpoint: Endpoint, body: Value) -> Result<Response, SlackError> {
    let Value::Object(response) = body else {
        return Err(SlackError::ParseError(format!(
            "{endpoint} returned a non-object body"
        )));
    };

    if response.get("ok").and_then(Value::as_bool).unwrap_or(false) {
        if let Some(warning) = response.get("warning").and_then(Value::as_str) {
            debug!("{} succeeded with warning: {}", endpoint, warning);
        }
        return Ok(response);
    }

    let code = response
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("unknown");

    if RATE_LIMITED_CODES.contains(&code) {
        return Err(SlackError::RateLimited(Duration::from_secs(1)));
    }

    Err(SlackError::ApiError(code.to_string()))
}

/// Render parameters as form fields: strings verbatim, everything else as its
/// JSON text (`true`, `100`, ...).
#[must_use]
pub fn form_fields(parameters: &Parameters) -> Vec<(String, String)> {
    parameters
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_fields_render_scalars() {
        let mut params = Parameters::new();
        params.insert("channel".into(), json!("C123"));
        params.insert("inclusive".into(), json!(false));
        params.insert("count".into(), json!(100));
        params.insert("skip".into(), Value::Null);

        let mut fields = form_fields(&params);
        fields.sort();

        assert_eq!(
            fields,
            vec![
                ("channel".to_string(), "C123".to_string()),
                ("count".to_string(), "100".to_string()),
                ("inclusive".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_fields_render_structured_values_as_json() {
        let mut params = Parameters::new();
        params.insert("blocks".into(), json!([{"type": "divider"}]));

        let fields = form_fields(&params);
        assert_eq!(fields[0].1, r#"[{"type":"divider"}]"#);
    }

    #[test]
    fn test_check_ok_passes_body_through() {
        let body = json!({"ok": true, "ts": "1.000001"});
        let response = check_ok(Endpoint::ChatPostMessage, body).unwrap();
        assert_eq!(response["ts"], "1.000001");
    }

    #[test]
    fn test_check_ok_maps_error_code() {
        let err = check_ok(
            Endpoint::ChannelsInfo,
            json!({"ok": false, "error": "channel_not_found"}),
        )
        .unwrap_err();
        assert_eq!(err.api_error_code(), Some("channel_not_found"));

        let err = check_ok(Endpoint::ChannelsInfo, json!({"ok": false})).unwrap_err();
        assert_eq!(err.api_error_code(), Some("unknown"));
    }

    #[test]
    fn test_check_ok_detects_rate_limit_codes() {
        for code in RATE_LIMITED_CODES {
            let err = check_ok(Endpoint::UsersList, json!({"ok": false, "error": code})).unwrap_err();
            assert!(matches!(err, SlackError::RateLimited(d) if d == Duration::from_secs(1)));
        }
    }

    #[test]
    fn test_check_ok_rejects_non_objects() {
        let err = check_ok(Endpoint::AuthTest, json!([1, 2])).unwrap_err();
        assert!(matches!(err, SlackError::ParseError(_)));
    }

    #[test]
    fn test_base_url_without_trailing_slash_keeps_path() {
        let config = ApiConfig::new("xoxb-test").with_base_url("https://example.com/api");
        let network = HttpNetworkInterface::new(&config).unwrap();

        let url = network.endpoint_url(Endpoint::ChatPostMessage).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/chat.postMessage");
    }
}
