use crate::errors::RequestError;
use crate::models::{LoginRequest, LoginResponse};
use crate::services::api_client::ApiClient;

/// Exchange doctor credentials for a bearer token
pub async fn perform_login(api: &ApiClient, username: &str, password: &str) -> Result<String, RequestError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    log::info!("🔐 [AUTH] Logging in as {}", username);

    let response: LoginResponse = api.post_public("/doctors/login", &request).await?;
    let token = response.token().trim().to_string();
    if token.is_empty() {
        return Err(RequestError::Parse("login response carried an empty token".to_string()));
    }
    Ok(token)
}
