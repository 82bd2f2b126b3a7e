use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated subject of a request.
///
/// Constructed once per request by the token verifier from a validated
/// credential and attached to the request extensions; dropped at the end of
/// the request. The role list is never empty — the verifier rejects
/// credentials that carry no roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub roles: Vec<String>,
}

impl Identity {
    pub fn new(user_id: Uuid, roles: Vec<String>) -> Self {
        Identity { user_id, roles }
    }

    /// First-listed role. Only meaningful to the deprecated single-role
    /// access check.
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_role_is_first_listed() {
        let identity = Identity::new(
            Uuid::new_v4(),
            vec!["User".to_string(), "Manager".to_string()],
        );
        assert_eq!(identity.primary_role(), Some("User"));
        assert!(identity.has_role("Manager"));
        assert!(!identity.has_role("Admin"));
    }
}
