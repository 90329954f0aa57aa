// File: src/client/core.rs
use crate::client::middleware::{DefaultHeadersLayer, DefaultHeadersService};
use crate::config::Config;
use crate::error::FetchError;
use crate::feed::SyllabusSource;
use crate::model::{SyllabusRecord, parse_payload};

use http::{Method, Request, StatusCode, Uri};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;
use tower::{ServiceBuilder, ServiceExt};

type HttpsClient = Client<
    hyper_rustls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>,
    String,
>;

/// Flattens an error and its sources into one line, so TLS and DNS causes
/// survive into the user-facing message.
fn describe(err: &dyn StdError) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

fn build_tls_config() -> rustls::ClientConfig {
    let tls_config_builder = rustls::ClientConfig::builder();

    #[cfg(not(target_os = "android"))]
    {
        let mut root_store = rustls::RootCertStore::empty();
        let result = rustls_native_certs::load_native_certs();
        root_store.add_parsable_certificates(result.certs);
        if root_store.is_empty() {
            // Plain-http endpoints still work; https will fail per request.
            log::warn!("No valid system certificates found.");
        }
        tls_config_builder
            .with_root_certificates(root_store)
            .with_no_client_auth()
    }

    #[cfg(target_os = "android")]
    {
        let mut root_store = rustls::RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        tls_config_builder
            .with_root_certificates(root_store)
            .with_no_client_auth()
    }
}

/// HTTP client for the syllabus endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct SyllabusClient {
    http: DefaultHeadersService<HttpsClient>,
    endpoint: Uri,
    timeout: Option<Duration>,
}

impl fmt::Debug for SyllabusClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyllabusClient")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SyllabusClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let endpoint: Uri = config
            .api_url
            .parse()
            .map_err(|e: http::uri::InvalidUri| {
                FetchError::InvalidUrl(format!("{}: {}", config.api_url, e))
            })?;

        let https_connector = HttpsConnectorBuilder::new()
            .with_tls_config(build_tls_config())
            .https_or_http()
            .enable_http1()
            .build();

        let http_client: HttpsClient = Client::builder(TokioExecutor::new()).build(https_connector);
        let http = ServiceBuilder::new()
            .layer(DefaultHeadersLayer::new(&config.user_agent))
            .service(http_client);

        Ok(Self {
            http,
            endpoint,
            timeout: config.request_timeout_secs.map(Duration::from_secs),
        })
    }

    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    /// Issues the GET, validates the envelope and returns the records
    /// sorted newest first.
    pub async fn fetch(&self) -> Result<Vec<SyllabusRecord>, FetchError> {
        log::debug!("Fetching syllabus from {}", self.endpoint);

        let (status, body) = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.exchange())
                .await
                .map_err(|_| FetchError::Timeout(limit.as_secs()))??,
            None => self.exchange().await?,
        };

        log::debug!("Response status code: {}", status);
        if status != StatusCode::OK {
            return Err(FetchError::ServerUnreachable {
                status: status.as_u16(),
            });
        }

        let records = parse_payload(&body)?;
        log::debug!("Syllabus fetch success: {} record(s)", records.len());
        Ok(records)
    }

    async fn exchange(&self) -> Result<(StatusCode, Vec<u8>), FetchError> {
        let req = Request::builder()
            .method(Method::GET)
            .uri(self.endpoint.clone())
            .body(String::new())
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let response = self
            .http
            .clone()
            .oneshot(req)
            .await
            .map_err(|e| FetchError::Transport(describe(&e)))?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| FetchError::Transport(describe(&e)))?
            .to_bytes()
            .to_vec();
        Ok((status, body))
    }
}

impl SyllabusSource for SyllabusClient {
    async fn fetch_syllabus(&self) -> Result<Vec<SyllabusRecord>, FetchError> {
        self.fetch().await
    }
}
