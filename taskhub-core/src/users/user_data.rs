use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{ToResponse, ToSchema};
use uuid::Uuid;

/// A registered account. The password hash never leaves this layer;
/// responses use [`UserProfile`].
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: &str, email: &str, password_hash: &str, roles: Vec<String>) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            roles,
            created_at: Utc::now(),
        }
    }
}

/// Public view of a user, served by the profile endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema, ToResponse)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            username: user.username,
            email: user.email,
            roles: user.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_carries_no_password_hash() {
        let user = User::new(
            "johndoe",
            "johndoe@example.com",
            "$2b$12$hash",
            vec!["User".to_string()],
        );
        let profile = UserProfile::from(user.clone());

        assert_eq!(profile.id, user.id);
        assert_eq!(profile.username, "johndoe");
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
    }
}
