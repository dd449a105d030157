use contracts::domain::a001_user::User;

use crate::shared::api_utils::{get_json, send_empty, ApiError, Verb};

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    get_json("/api/users/list").await
}

/// `PUT /api/users/{id}/ban` or `/unban`.
pub async fn set_banned(user_id: i64, banned: bool) -> Result<(), ApiError> {
    let action = if banned { "ban" } else { "unban" };
    send_empty(Verb::Put, &format!("/api/users/{}/{}", user_id, action)).await?;
    Ok(())
}

/// Message for a failed ban/unban. The backend refuses to ban the caller.
pub fn ban_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { status: 400, message }
            if message.to_lowercase().contains("cannot ban your own account") =>
        {
            "You cannot ban your own account.".to_string()
        }
        other => other.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ban_error_message() {
        let own = ApiError::Http {
            status: 400,
            message: "Admin cannot ban your own account".into(),
        };
        assert_eq!(ban_error_message(&own), "You cannot ban your own account.");

        let other = ApiError::Http { status: 404, message: "User not found".into() };
        assert_eq!(ban_error_message(&other), "User not found");
    }
}
