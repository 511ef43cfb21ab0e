// ============================================================================
// HTTP TRANSPORT - One request in, one response out
// ============================================================================
// Single attempt, no retry, no timeout override. Anything that reached the
// server is a response (whatever the status); only failures to get an answer
// are errors here.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use crate::errors::RequestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError>;
}

/// Browser `fetch` through gloo-net
#[derive(Clone, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name, value));

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| RequestError::Serialization(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        read_response(&request.url, status, response.text().await)
    }
}

/// A response whose body could not be read counts as a failed exchange
fn read_response(url: &str, status: u16, body: Result<String, gloo_net::Error>) -> Result<HttpResponse, RequestError> {
    match body {
        Ok(body) => Ok(HttpResponse { status, body }),
        Err(e) => {
            log::error!("❌ [HTTP] {} -> HTTP {}, body unreadable: {}", url, status, e);
            Err(RequestError::Network(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_body_keeps_status() {
        let response = read_response("http://api.test/patients", 201, Ok("{}".to_string())).unwrap();
        assert_eq!(response, HttpResponse { status: 201, body: "{}".to_string() });
        assert!(response.ok());
    }

    #[test]
    fn unreadable_body_is_a_network_error() {
        let body = Err(gloo_net::Error::GlooError("stream aborted".to_string()));
        let err = read_response("http://api.test/patients", 200, body).unwrap_err();
        assert!(matches!(err, RequestError::Network(message) if message.contains("stream aborted")));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = HttpRequest {
            method: Method::Get,
            url: "http://api.test/patients".to_string(),
            headers: vec![("Authorization".to_string(), "Bearer t".to_string())],
            body: None,
        };
        assert_eq!(request.header("authorization"), Some("Bearer t"));
        assert_eq!(request.header("accept"), None);
    }
}
