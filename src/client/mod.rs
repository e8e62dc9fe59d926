//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiKey, BulkSms, DeliveryReport, ValidationError};

const DEFAULT_ENDPOINT: &str = "https://www.fast2sms.com/dev/bulkV2";

const CONTENT_TYPE_JSON: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url);
            for (name, value) in &headers {
                request = request.header(name.as_str(), value.as_str());
            }
            let response = request.body(body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Fast2SmsClient`].
///
/// A non-2xx HTTP status is deliberately *not* an error: the provider
/// rejecting a send is a completed exchange, reported through
/// [`DeliveryReport`]. Errors cover only the cases where no report exists.
pub enum Fast2SmsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body could not be parsed as JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[source] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`Fast2SmsClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct Fast2SmsClientBuilder {
    api_key: ApiKey,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl Fast2SmsClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the `bulkV2` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Without this, the client waits as long as the transport does.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`Fast2SmsClient`].
    pub fn build(self) -> Result<Fast2SmsClient, Fast2SmsError> {
        let endpoint = url::Url::parse(&self.endpoint).map_err(Fast2SmsError::InvalidEndpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| Fast2SmsError::Transport(Box::new(err)))?;

        Ok(Fast2SmsClient {
            api_key: self.api_key,
            endpoint: endpoint.as_str().to_owned(),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Fast2SMS client.
///
/// This type orchestrates request validation, JSON encoding, header
/// construction, and response decoding. By default it posts to
/// `https://www.fast2sms.com/dev/bulkV2`.
pub struct Fast2SmsClient {
    api_key: ApiKey,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for Fast2SmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fast2SmsClient")
            .field("api_key", &self.api_key)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Fast2SmsClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`Fast2SmsClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> Fast2SmsClientBuilder {
        Fast2SmsClientBuilder::new(api_key)
    }

    /// Send an SMS request through Fast2SMS, performing exactly one POST.
    ///
    /// Every request carries `authorization: <api key>` and
    /// `Content-Type: application/json`.
    ///
    /// Errors:
    /// - [`Fast2SmsError::Transport`] when the HTTP exchange itself fails,
    /// - [`Fast2SmsError::Parse`] when the response body is not valid JSON.
    ///
    /// A completed exchange with a JSON body is `Ok` regardless of the HTTP
    /// status code; inspect [`DeliveryReport::http_status`] and
    /// [`DeliveryReport::ack`] for the provider's verdict.
    pub async fn send_bulk_sms(&self, request: BulkSms) -> Result<DeliveryReport, Fast2SmsError> {
        let body = crate::transport::encode_bulk_sms_json(&request)
            .map_err(|err| Fast2SmsError::Parse(Box::new(err)))?;

        let headers = vec![
            (ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()),
            ("Content-Type".to_owned(), CONTENT_TYPE_JSON.to_owned()),
        ];

        let response = self
            .http
            .post_json(&self.endpoint, headers, body)
            .await
            .map_err(Fast2SmsError::Transport)?;

        let report = crate::transport::decode_send_response(response.status, &response.body)
            .map_err(|err| Fast2SmsError::Parse(Box::new(err)))?;

        Ok(report)
    }
}
