use std::thread;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::auth::{self, SignOptions};
use crate::client::BceClientConfig;
use crate::http::error::{BceErrorBody, BceHttpError};

const SDK_USER_AGENT: &str = concat!("bce-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Upper bound on a single back-off sleep, whatever the attempt count says.
const MAX_RETRY_SLEEP_SECS: u64 = 30;

trait ResponseExt {
    fn map_to_bce_err(self) -> Result<reqwest::blocking::Response, BceHttpError>;
}

impl ResponseExt for reqwest::blocking::Response {
    fn map_to_bce_err(self) -> Result<reqwest::blocking::Response, BceHttpError> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }

        let request_id = self
            .headers()
            .get("x-bce-request-id")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let text = self.text().unwrap_or_default();
        let mut body: BceErrorBody = serde_json::from_str(&text).unwrap_or_else(|_| BceErrorBody {
            message: text,
            ..BceErrorBody::default()
        });
        if body.request_id.is_empty() {
            body.request_id = request_id;
        }

        Err(match status {
            StatusCode::NOT_FOUND => BceHttpError::NotFound(body),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BceHttpError::AccessDenied(body),
            _ => BceHttpError::ServiceError { status, body },
        })
    }
}

/// A signed blocking client bound to one BCE service endpoint.
///
/// Every request carries `x-bce-date` and an `Authorization` header computed
/// by the v1 signer over the method, path, query and default header set.
/// Transport failures and 5xx replies are retried with exponential back-off;
/// other failures are parsed into the BCE error envelope.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: reqwest::blocking::Client,
    base_url: Url,
    host: String,
    config: BceClientConfig,
}

impl HttpClient {
    /// Create a client for `service`, resolving its endpoint from the config.
    pub fn new(config: BceClientConfig, service: &str) -> Result<Self, BceHttpError> {
        let endpoint = config.endpoint_for(service);
        let base_url = Url::parse(&endpoint)
            .map_err(|e| BceHttpError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        let host = match (base_url.host_str(), base_url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err(BceHttpError::InvalidEndpoint(endpoint)),
        };

        Ok(Self {
            http_client: reqwest::blocking::Client::new(),
            base_url,
            host,
            config,
        })
    }

    pub fn get_json<R>(&self, path: &str, query: Vec<(String, String)>) -> Result<R, BceHttpError>
    where
        R: DeserializeOwned,
    {
        let response = self.send(Method::GET, path, query, None)?;
        parse_json(response)
    }

    pub fn post_json<T, R>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<T>,
    ) -> Result<R, BceHttpError>
    where
        T: serde::Serialize,
        R: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, query, encode_body(body)?)?;
        parse_json(response)
    }

    pub fn put_json<T, R>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<T>,
    ) -> Result<R, BceHttpError>
    where
        T: serde::Serialize,
        R: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, query, encode_body(body)?)?;
        parse_json(response)
    }

    pub fn post<T>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<T>,
    ) -> Result<(), BceHttpError>
    where
        T: serde::Serialize,
    {
        self.send(Method::POST, path, query, encode_body(body)?)
            .map(|_| ())
    }

    pub fn put<T>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<T>,
    ) -> Result<(), BceHttpError>
    where
        T: serde::Serialize,
    {
        self.send(Method::PUT, path, query, encode_body(body)?)
            .map(|_| ())
    }

    pub fn delete<T>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<T>,
    ) -> Result<(), BceHttpError>
    where
        T: serde::Serialize,
    {
        self.send(Method::DELETE, path, query, encode_body(body)?)
            .map(|_| ())
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::blocking::Response, BceHttpError> {
        let mut attempt: u8 = 0;
        loop {
            match self.send_once(method.clone(), path, &query, body.as_deref()) {
                Err(err) if err.is_retryable() && attempt < self.config.num_retries => {
                    let sleep = self
                        .config
                        .retry_interval
                        .saturating_mul(1 << attempt.min(5))
                        .min(MAX_RETRY_SLEEP_SECS);
                    log::warn!(
                        "{} {} failed ({}), retrying in {}s ({}/{})",
                        method,
                        path,
                        err,
                        sleep,
                        attempt + 1,
                        self.config.num_retries
                    );
                    thread::sleep(Duration::from_secs(sleep));
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    fn send_once(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&[u8]>,
    ) -> Result<reqwest::blocking::Response, BceHttpError> {
        let timestamp = Utc::now();
        let date = auth::canonical_time(timestamp);

        // Headers participating in the signature. The transport sends the
        // exact same values, so the server-side canonicalization agrees.
        let mut headers: Vec<(String, String)> = vec![
            ("host".to_string(), self.host.clone()),
            ("x-bce-date".to_string(), date.clone()),
        ];
        if let Some(body) = body {
            headers.push(("content-type".to_string(), "application/json".to_string()));
            headers.push(("content-length".to_string(), body.len().to_string()));
        }

        let options = SignOptions {
            timestamp: Some(timestamp),
            expiration_in_seconds: self.config.expiration_in_seconds,
            headers_to_sign: None,
        };
        let authorization = auth::sign(
            &self.config.credentials,
            method.as_str(),
            path,
            &headers,
            query,
            &options,
        );

        let url = self.request_url(path, query);
        log::debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, url)
            .header(USER_AGENT, SDK_USER_AGENT)
            .header("x-bce-date", &date)
            .header(AUTHORIZATION, &authorization);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }

        request.send()?.map_to_bce_err()
    }

    /// Join the path and query onto the service endpoint. Empty-valued
    /// parameters keep their `=`, matching the canonical query the signer saw.
    fn request_url(&self, path: &str, query: &[(String, String)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        url
    }
}

fn encode_body<T: serde::Serialize>(body: Option<T>) -> Result<Option<Vec<u8>>, BceHttpError> {
    match body {
        Some(body) => Ok(Some(serde_json::to_vec(&body)?)),
        None => Ok(None),
    }
}

fn parse_json<R: DeserializeOwned>(
    response: reqwest::blocking::Response,
) -> Result<R, BceHttpError> {
    let text = response.text()?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::BceCredentials;

    fn make_client(endpoint: &str) -> HttpClient {
        let config = BceClientConfig::builder(BceCredentials::new("ak", "sk"))
            .with_endpoint(endpoint)
            .build();
        HttpClient::new(config, "aihc").unwrap()
    }

    #[test]
    fn host_includes_non_default_port() {
        let client = make_client("http://10.0.0.2:8680");
        assert_eq!(client.host, "10.0.0.2:8680");

        let client = make_client("https://aihc.bj.baidubce.com");
        assert_eq!(client.host, "aihc.bj.baidubce.com");
    }

    #[test]
    fn rejects_endpoint_without_host() {
        let config = BceClientConfig::builder(BceCredentials::new("ak", "sk"))
            .with_endpoint("not a url")
            .build();
        assert!(matches!(
            HttpClient::new(config, "aihc"),
            Err(BceHttpError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn request_url_keeps_empty_valued_flags() {
        let client = make_client("https://csn.bj.baidubce.com");
        let url = client.request_url(
            "/v1/csn/csn-123",
            &[
                ("attach".to_string(), String::new()),
                ("clientToken".to_string(), "t-1".to_string()),
            ],
        );
        assert_eq!(
            url.as_str(),
            "https://csn.bj.baidubce.com/v1/csn/csn-123?attach=&clientToken=t-1"
        );
    }

    #[test]
    fn body_encoding_is_json() {
        let body = encode_body(Some(serde_json::json!({"name": "dev"})))
            .unwrap()
            .unwrap();
        assert_eq!(body, br#"{"name":"dev"}"#);
        assert!(encode_body(None::<serde_json::Value>).unwrap().is_none());
    }
}
