//! Platform-abstracted HTTP GET with Send-safe futures.
//!
//! On wasm, `reqwest::Response` holds JS values and is not `Send`. The request is
//! therefore run on the JS thread with `wasm_bindgen_futures::spawn_local` and its result
//! travels back through a `flume` channel, so the future handed to
//! [`roster_states::spawn_task`] stays `Send` on every target.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// A response reduced to Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Lowercased header names.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header lookup, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request dropped before completion")]
    Dropped,
}

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self.url, self.headers).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
            wasm_bindgen_futures::spawn_local(async move {
                let result = execute(self.url, self.headers).await;
                let _ = tx.send_async(result).await;
            });
            rx.recv_async().await.map_err(|_| HttpError::Dropped)?
        }
    }
}

async fn execute(url: String, headers: HashMap<String, String>) -> HttpResult<Response> {
    let client = reqwest::Client::new();
    let mut request = client.get(&url);
    for (name, value) in &headers {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|err| HttpError::Transport(err.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_lowercase(), value.to_owned()))
        })
        .collect();

    let body = response
        .bytes()
        .await
        .map_err(|err| HttpError::Transport(err.to_string()))?
        .to_vec();

    Ok(Response {
        status,
        headers,
        body,
    })
}

/// Entry point for outbound requests.
///
/// ```ignore
/// let response = Client::get("https://jsonplaceholder.typicode.com/users")
///     .header("accept", "application/json")
///     .send()
///     .await?;
/// ```
pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            headers: HashMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_response_is_success() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(404, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let mut response = response(200, b"");
        response
            .headers
            .insert("content-type".to_owned(), "application/json".to_owned());

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_response_json() {
        #[derive(Debug, serde::Deserialize, PartialEq, Eq)]
        struct Payload {
            message: String,
        }

        let data: Payload = response(200, br#"{"message": "hello"}"#)
            .json()
            .expect("valid json");
        assert_eq!(
            data,
            Payload {
                message: "hello".to_owned()
            }
        );
        assert!(response(200, b"not json").json::<Payload>().is_err());
    }

    #[test]
    fn test_request_builder_headers() {
        let builder = Client::get("https://example.com/users").header("Accept", "application/json");

        assert_eq!(builder.url(), "https://example.com/users");
        assert_eq!(
            builder.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }
}
