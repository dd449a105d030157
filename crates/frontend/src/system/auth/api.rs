use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest};

use crate::shared::api_utils::{extract_message, post_public, read_text, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    let response = post_public("/api/auth/login", &request).await?;
    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Creates an account; returns the server's confirmation text, if any.
pub async fn register(request: &RegisterRequest) -> Result<String, ApiError> {
    let response = post_public("/api/auth/register", request).await?;
    let body = read_text(response).await?;
    Ok(extract_message(&body))
}

/// Text shown on the login form for a failed attempt.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized | ApiError::Forbidden => "Invalid email or password".to_string(),
        ApiError::Http { status: 400, message } if message.is_empty() => {
            "Invalid email or password".to_string()
        }
        other => other.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_message() {
        assert_eq!(login_error_message(&ApiError::Unauthorized), "Invalid email or password");
        assert_eq!(
            login_error_message(&ApiError::Http { status: 400, message: String::new() }),
            "Invalid email or password"
        );
        assert_eq!(
            login_error_message(&ApiError::Http { status: 423, message: "Account locked".into() }),
            "Account locked"
        );
        assert_eq!(
            login_error_message(&ApiError::Network("refused".into())),
            "Network error. Please check your connection."
        );
    }
}
