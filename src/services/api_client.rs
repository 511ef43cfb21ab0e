// ============================================================================
// API CLIENT - HTTP only (no business logic)
// ============================================================================
// One configured client for every screen: base URL, JSON in and out, and
// the bearer token read from the session store at call time.
// ============================================================================

use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::errors::RequestError;
use crate::services::http::{HttpRequest, HttpTransport, Method};
use crate::state::session_state::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Rc<dyn HttpTransport>, session: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request(Method::Get, path, None, true).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, RequestError> {
        let body = encode(body)?;
        self.request(Method::Post, path, Some(body), true).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, RequestError> {
        let body = encode(body)?;
        self.request(Method::Patch, path, Some(body), true).await
    }

    /// DELETE; an empty body parses as `null`
    pub async fn delete(&self, path: &str) -> Result<serde_json::Value, RequestError> {
        self.request(Method::Delete, path, None, true).await
    }

    /// POST without the bearer header (login)
    pub async fn post_public<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, RequestError> {
        let body = encode(body)?;
        self.request(Method::Post, path, Some(body), false).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        authenticated: bool,
    ) -> Result<T, RequestError> {
        let url = self.url(path);
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if authenticated {
            if let Some(token) = self.session.token() {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
        }

        log::debug!("🌐 [API] {} {}", method.as_str(), url);

        let response = self
            .transport
            .send(HttpRequest { method, url: url.clone(), headers, body })
            .await
            .map_err(|e| {
                log::error!("❌ [API] {} {} failed: {}", method.as_str(), url, e);
                e
            })?;

        if !response.ok() {
            log::error!("❌ [API] {} {} -> HTTP {}: {}", method.as_str(), url, response.status, response.body);
            return Err(RequestError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let text = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
        serde_json::from_str::<T>(text).map_err(|e| {
            log::error!("❌ [API] {} {} -> unexpected body: {}", method.as_str(), url, e);
            RequestError::Parse(e.to_string())
        })
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, RequestError> {
    serde_json::to_string(body).map_err(|e| RequestError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::client_with;

    #[test]
    fn joins_base_url_and_paths() {
        let (client, _server, _session) = client_with(None);
        assert_eq!(client.url("/patients"), "http://api.test/patients");
        assert_eq!(client.url("examinations/e1"), "http://api.test/examinations/e1");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn attaches_bearer_token_read_at_call_time() {
        let (client, server, session) = client_with(None);
        server.respond(Method::Get, "/patients", 200, "[]");

        let _: serde_json::Value = client.get("/patients").await.unwrap();
        assert_eq!(server.last_request().unwrap().header("Authorization"), None);

        session.login("tok-9");
        let _: serde_json::Value = client.get("/patients").await.unwrap();
        assert_eq!(
            server.last_request().unwrap().header("Authorization"),
            Some("Bearer tok-9")
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn public_post_never_sends_the_token() {
        let (client, server, _session) = client_with(Some("tok"));
        server.respond(Method::Post, "/doctors/login", 200, r#"{"token":"new"}"#);

        let _: serde_json::Value = client
            .post_public("/doctors/login", &serde_json::json!({"username": "u", "password": "p"}))
            .await
            .unwrap();
        let request = server.last_request().unwrap();
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn non_2xx_becomes_status_error_with_body() {
        let (client, server, _session) = client_with(Some("tok"));
        server.respond(Method::Get, "/patients/x", 404, "Patient not found");

        let err = client.get::<serde_json::Value>("/patients/x").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some("Patient not found"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn network_failure_propagates() {
        let (client, server, _session) = client_with(Some("tok"));
        server.fail_network(Method::Get, "/patients");

        let err = client.get::<serde_json::Value>("/patients").await.unwrap_err();
        assert!(matches!(err, RequestError::Network(_)));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn empty_delete_body_is_null() {
        let (client, server, _session) = client_with(Some("tok"));
        server.respond(Method::Delete, "/patients/p1", 204, "");

        let value = client.delete("/patients/p1").await.unwrap();
        assert!(value.is_null());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unexpected_shape_is_a_parse_error() {
        let (client, server, _session) = client_with(Some("tok"));
        server.respond(Method::Get, "/patients", 200, r#"{"oops":true}"#);

        let err = client.get::<Vec<crate::models::Patient>>("/patients").await.unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }
}
