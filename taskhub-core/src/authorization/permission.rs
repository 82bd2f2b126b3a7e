use serde::{Deserialize, Serialize};

/// Available permissions/actions for authorization
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    CreateTask,
    ReadTask,
    UpdateTask,
    DeleteTask,
    /// Permission to assign a task to another user
    AssignTask,
    /// Admin-level permission over user accounts
    ManageUsers,
}

impl Permission {
    /// Get all available permissions in display order
    pub fn all() -> Vec<Permission> {
        vec![
            Permission::CreateTask,
            Permission::ReadTask,
            Permission::UpdateTask,
            Permission::DeleteTask,
            Permission::AssignTask,
            Permission::ManageUsers,
        ]
    }

    /// Convert to string for configuration and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::CreateTask => "create_task",
            Permission::ReadTask => "read_task",
            Permission::UpdateTask => "update_task",
            Permission::DeleteTask => "delete_task",
            Permission::AssignTask => "assign_task",
            Permission::ManageUsers => "manage_users",
        }
    }

    /// Parse from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Permission> {
        match s.to_lowercase().as_str() {
            "create_task" => Some(Permission::CreateTask),
            "read_task" => Some(Permission::ReadTask),
            "update_task" => Some(Permission::UpdateTask),
            "delete_task" => Some(Permission::DeleteTask),
            "assign_task" => Some(Permission::AssignTask),
            "manage_users" => Some(Permission::ManageUsers),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for permission in Permission::all() {
            assert_eq!(Permission::from_str(permission.as_str()), Some(permission));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_action() {
        assert_eq!(Permission::from_str("drop_table"), None);
    }
}
