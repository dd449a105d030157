use crate::system::auth::{Role, RoleRef};
use serde::{Deserialize, Serialize};

/// Row of `GET /api/users/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: RoleRef,
    #[serde(default)]
    pub active: bool,
}

impl User {
    pub fn role_kind(&self) -> Role {
        Role::from_ref(&self.role)
    }

    /// Upper-cased role name, the value the role filter compares against.
    pub fn role_key(&self) -> String {
        self.role.role_name.trim().to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserStatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl UserStatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatusFilter::All => "All",
            UserStatusFilter::Active => "Active",
            UserStatusFilter::Inactive => "Inactive",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Active" => UserStatusFilter::Active,
            "Inactive" => UserStatusFilter::Inactive,
            _ => UserStatusFilter::All,
        }
    }

    pub fn accepts(&self, active: bool) -> bool {
        match self {
            UserStatusFilter::All => true,
            UserStatusFilter::Active => active,
            UserStatusFilter::Inactive => !active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter() {
        assert!(UserStatusFilter::All.accepts(false));
        assert!(UserStatusFilter::Active.accepts(true));
        assert!(!UserStatusFilter::Active.accepts(false));
        assert!(UserStatusFilter::Inactive.accepts(false));
        assert_eq!(UserStatusFilter::from_str("bogus"), UserStatusFilter::All);
    }

    #[test]
    fn test_user_without_active_flag() {
        let json = r#"{"id":1,"email":"a@b.c","name":"A","role":{"id":1,"roleName":"admin"}}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.active);
        assert_eq!(user.role_key(), "ADMIN");
    }
}
