use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body returned by `POST /doctors/login`.
///
/// Normally `{ "token": "...", ... }`; older deployments answer with the
/// bare token as a JSON string.
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(untagged)]
pub enum LoginResponse {
    WithToken {
        token: String,
        #[serde(flatten)]
        extra: serde_json::Map<String, serde_json::Value>,
    },
    Bare(String),
}

impl LoginResponse {
    pub fn token(&self) -> &str {
        match self {
            LoginResponse::WithToken { token, .. } => token,
            LoginResponse::Bare(token) => token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_from_object_body() {
        let body = r#"{"token":"abc.def","doctor":{"username":"dr"}}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.token(), "abc.def");
    }

    #[test]
    fn token_from_bare_string_body() {
        let response: LoginResponse = serde_json::from_str(r#""raw-token""#).unwrap();
        assert_eq!(response.token(), "raw-token");
    }

    #[test]
    fn object_without_token_is_rejected() {
        let result = serde_json::from_str::<LoginResponse>(r#"{"message":"ok"}"#);
        assert!(result.is_err());
    }
}
