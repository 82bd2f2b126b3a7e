use std::collections::{HashMap, HashSet};

use maplit::hashmap;
use serde::Deserialize;

use crate::authorization::{role, Permission, RoleTable};

/// Role table configuration: role name to the list of granted permissions.
///
/// Deserialized from the `roles` section of the configuration; the default
/// enumeration ships Admin, Manager and User.
#[derive(Debug, Deserialize, Clone)]
pub struct RolesSettings {
    #[serde(flatten)]
    pub definitions: HashMap<String, Vec<Permission>>,
}

impl Default for RolesSettings {
    fn default() -> Self {
        RolesSettings {
            definitions: hashmap! {
                role::ADMIN.to_string() => vec![
                    Permission::CreateTask,
                    Permission::ReadTask,
                    Permission::UpdateTask,
                    Permission::DeleteTask,
                    Permission::ManageUsers,
                ],
                role::MANAGER.to_string() => vec![
                    Permission::CreateTask,
                    Permission::ReadTask,
                    Permission::UpdateTask,
                    Permission::AssignTask,
                ],
                role::USER.to_string() => vec![
                    Permission::ReadTask,
                    Permission::UpdateTask,
                ],
            },
        }
    }
}

impl RolesSettings {
    /// Build the immutable role table used for the lifetime of the process.
    pub fn build_role_table(&self) -> RoleTable {
        RoleTable::new(
            self.definitions
                .iter()
                .map(|(name, permissions)| {
                    (
                        name.clone(),
                        permissions.iter().copied().collect::<HashSet<_>>(),
                    )
                })
                .collect(),
        )
    }
}
