// In-memory transport for unit tests: per-route handlers + request log

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use async_trait::async_trait;
use crate::errors::RequestError;
use crate::services::api_client::ApiClient;
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::state::session_state::SessionStore;
use crate::utils::storage::MemoryTokenStore;

pub const TEST_BASE_URL: &str = "http://api.test";

type Handler = Rc<dyn Fn(&HttpRequest) -> Result<HttpResponse, RequestError>>;

#[derive(Clone, Default)]
pub struct FakeServer {
    handlers: Rc<RefCell<HashMap<(Method, String), Handler>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle<F>(&self, method: Method, path: &str, handler: F)
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, RequestError> + 'static,
    {
        self.handlers
            .borrow_mut()
            .insert((method, path.to_string()), Rc::new(handler));
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        let body = body.to_string();
        self.handle(method, path, move |_| Ok(HttpResponse { status, body: body.clone() }));
    }

    pub fn fail_network(&self, method: Method, path: &str) {
        self.handle(method, path, |_| Err(RequestError::Network("connection refused".to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        let url = format!("{}{}", TEST_BASE_URL, path);
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeServer {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        self.requests.borrow_mut().push(request.clone());
        let path = request.url.trim_start_matches(TEST_BASE_URL).to_string();
        let handler = self.handlers.borrow().get(&(request.method, path)).cloned();
        match handler {
            Some(handler) => handler(&request),
            None => Ok(HttpResponse { status: 404, body: "no route".to_string() }),
        }
    }
}

/// Client wired to a fresh fake server and an in-memory session
pub fn client_with(token: Option<&str>) -> (ApiClient, FakeServer, SessionStore) {
    let store = match token {
        Some(t) => MemoryTokenStore::with_token(t),
        None => MemoryTokenStore::new(),
    };
    let session = SessionStore::new(Rc::new(store));
    let server = FakeServer::new();
    let client = ApiClient::new(TEST_BASE_URL, Rc::new(server.clone()), session.clone());
    (client, server, session)
}

pub fn json(status: u16, value: serde_json::Value) -> Result<HttpResponse, RequestError> {
    Ok(HttpResponse { status, body: value.to_string() })
}
