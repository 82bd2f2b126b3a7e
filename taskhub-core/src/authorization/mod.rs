//! Role-based access control primitives.
//!
//! The role table maps role names to permission sets and is immutable after
//! startup. The access decision is a pure function of the authenticated
//! identity and the role requirement a route declares.

pub mod decision;
pub mod identity;
pub mod permission;
pub mod role_table;

pub use decision::{authorize, AccessDecision, DenyReason, RoleRequirement};
pub use identity::Identity;
pub use permission::Permission;
pub use role_table::RoleTable;

/// Role names used by the built-in role table.
pub mod role {
    pub const ADMIN: &str = "Admin";
    pub const MANAGER: &str = "Manager";
    pub const USER: &str = "User";
}
