use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    pub id: i64,
    #[serde(default)]
    pub role_name: String,
}

/// Body of a successful `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: RoleRef,
    pub access_token: String,
}

impl LoginResponse {
    /// Splits the response into the bearer token and the profile kept in storage.
    pub fn into_session(self) -> (String, UserInfo) {
        let user = UserInfo {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
        };
        (self.access_token, user)
    }
}

/// Profile of the signed-in user, persisted next to the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: RoleRef,
}

impl UserInfo {
    pub fn role(&self) -> Role {
        Role::from_ref(&self.role)
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Accountant,
    SalesRep,
    Customer,
}

impl Role {
    /// Resolves by role name first; numeric ids 1..3 are the legacy encoding.
    pub fn from_ref(role: &RoleRef) -> Self {
        match role.role_name.trim().to_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            "ACCOUNTANT" => Role::Accountant,
            "SALES" | "SALES_REP" | "SALESREP" => Role::SalesRep,
            "USER" | "CUSTOMER" => Role::Customer,
            _ => Self::from_id(role.id),
        }
    }

    pub fn from_id(id: i64) -> Self {
        match id {
            1 => Role::Admin,
            2 => Role::Accountant,
            3 => Role::SalesRep,
            _ => Role::Customer,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Accountant => "Accountant",
            Role::SalesRep => "Sales",
            Role::Customer => "Customer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: i64, name: &str) -> RoleRef {
        RoleRef {
            id,
            role_name: name.to_string(),
        }
    }

    #[test]
    fn test_role_prefers_name() {
        assert_eq!(Role::from_ref(&role(7, "admin")), Role::Admin);
        assert_eq!(Role::from_ref(&role(1, "USER")), Role::Customer);
    }

    #[test]
    fn test_role_falls_back_to_id() {
        assert_eq!(Role::from_ref(&role(2, "")), Role::Accountant);
        assert_eq!(Role::from_ref(&role(3, "unknown")), Role::SalesRep);
        assert_eq!(Role::from_ref(&role(42, "")), Role::Customer);
    }

    #[test]
    fn test_login_response_parsing() {
        let json = r#"{
            "id": 5,
            "email": "a@b.vn",
            "name": "Lan",
            "role": {"id": 1, "roleName": "ADMIN"},
            "accessToken": "tok"
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        let (token, user) = resp.into_session();
        assert_eq!(token, "tok");
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(user.display_name(), "Lan");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: 1,
            email: "x@y.z".into(),
            name: "  ".into(),
            role: role(4, "USER"),
        };
        assert_eq!(user.display_name(), "x@y.z");
    }
}
