use std::collections::{HashMap, HashSet};

use maplit::hashmap;

use super::permission::Permission;
use super::role;

/// Static mapping from role name to the set of permissions that role grants.
///
/// Built once at process start from configuration and never mutated
/// afterwards. Changing roles requires redeploying configuration.
#[derive(Debug, Clone)]
pub struct RoleTable {
    roles: HashMap<String, HashSet<Permission>>,
}

impl RoleTable {
    pub fn new(roles: HashMap<String, HashSet<Permission>>) -> Self {
        RoleTable { roles }
    }

    /// The built-in role enumeration used when no role configuration is
    /// provided.
    pub fn builtin() -> Self {
        let roles = hashmap! {
            role::ADMIN.to_string() => HashSet::from([
                Permission::CreateTask,
                Permission::ReadTask,
                Permission::UpdateTask,
                Permission::DeleteTask,
                Permission::ManageUsers,
            ]),
            role::MANAGER.to_string() => HashSet::from([
                Permission::CreateTask,
                Permission::ReadTask,
                Permission::UpdateTask,
                Permission::AssignTask,
            ]),
            role::USER.to_string() => HashSet::from([
                Permission::ReadTask,
                Permission::UpdateTask,
            ]),
        };
        RoleTable { roles }
    }

    /// Permission set granted by `role`.
    ///
    /// Returns the empty set, not an error, for an unrecognized role.
    pub fn permissions_for(&self, role: &str) -> HashSet<Permission> {
        self.roles.get(role).cloned().unwrap_or_default()
    }

    pub fn contains_role(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Whether `role` grants `permission`. False for unrecognized roles.
    pub fn role_grants(&self, role: &str, permission: Permission) -> bool {
        self.roles
            .get(role)
            .map(|permissions| permissions.contains(&permission))
            .unwrap_or(false)
    }

    pub fn role_names(&self) -> Vec<String> {
        self.roles.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_matches_configured_sets() {
        let table = RoleTable::builtin();

        assert_eq!(
            table.permissions_for(role::ADMIN),
            HashSet::from([
                Permission::CreateTask,
                Permission::ReadTask,
                Permission::UpdateTask,
                Permission::DeleteTask,
                Permission::ManageUsers,
            ])
        );
        assert_eq!(
            table.permissions_for(role::MANAGER),
            HashSet::from([
                Permission::CreateTask,
                Permission::ReadTask,
                Permission::UpdateTask,
                Permission::AssignTask,
            ])
        );
        assert_eq!(
            table.permissions_for(role::USER),
            HashSet::from([Permission::ReadTask, Permission::UpdateTask])
        );
    }

    #[test]
    fn test_unrecognized_role_yields_empty_set() {
        let table = RoleTable::builtin();
        assert!(table.permissions_for("Auditor").is_empty());
        assert!(!table.role_grants("Auditor", Permission::ReadTask));
    }

    #[test]
    fn test_role_grants() {
        let table = RoleTable::builtin();
        assert!(table.role_grants(role::ADMIN, Permission::DeleteTask));
        assert!(table.role_grants(role::MANAGER, Permission::AssignTask));
        assert!(!table.role_grants(role::USER, Permission::DeleteTask));
    }
}
