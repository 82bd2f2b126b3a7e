use anyhow::Result;
use tracing::info;

use taskhub_core::authorization::{Identity, Permission, RoleRequirement, RoleTable};
use taskhub_core::settings::roles::RolesSettings;

/// Role-table backed authorization service.
///
/// Holds the role table for the lifetime of the process. The table is
/// never mutated after construction, so the service is shared by reference
/// across request workers without locking.
#[derive(Debug)]
pub struct AuthorizationService {
    role_table: RoleTable,
}

impl AuthorizationService {
    pub fn new(settings: &RolesSettings) -> Self {
        let role_table = settings.build_role_table();
        info!(
            "Authorization service initialized with {} roles",
            role_table.len()
        );
        AuthorizationService { role_table }
    }

    pub fn role_table(&self) -> &RoleTable {
        &self.role_table
    }

    /// Startup-time validation: every role an endpoint requirement names
    /// must exist in the role table.
    pub fn validate_requirements(&self, requirements: &[RoleRequirement]) -> Result<()> {
        for requirement in requirements {
            for role in requirement.roles() {
                if !self.role_table.contains_role(role) {
                    anyhow::bail!(
                        "endpoint requirement {} references unknown role '{}'",
                        requirement,
                        role
                    );
                }
            }
        }
        Ok(())
    }

    /// Request-time validation of client-supplied role names.
    ///
    /// Returns the first unknown role name, for a 400 response naming it.
    pub fn validate_assignable_roles(&self, roles: &[String]) -> Result<(), String> {
        match roles.iter().find(|role| !self.role_table.contains_role(role)) {
            Some(unknown) => Err(unknown.clone()),
            None => Ok(()),
        }
    }

    /// Permission-table check: does any of the identity's roles grant the
    /// action?
    ///
    /// Unrecognized roles grant nothing, so an identity whose roles all
    /// fell out of the table is denied everything.
    pub fn check_permission(&self, identity: &Identity, action: Permission) -> bool {
        let result = identity
            .roles
            .iter()
            .any(|role| self.role_table.role_grants(role, action));

        if result {
            info!(
                "Permission granted: user {} can {}",
                identity.user_id,
                action.as_str()
            );
        } else {
            info!(
                "Permission denied: user {} cannot {}",
                identity.user_id,
                action.as_str()
            );
        }

        result
    }
}
