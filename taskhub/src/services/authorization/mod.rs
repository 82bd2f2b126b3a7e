//! Authorization service for taskhub
//!
//! Wraps the immutable role table built at startup and answers the
//! pipeline's access checks: role requirements on routes, permission
//! lookups, and validation of configured and client-supplied role names.

pub mod service;


pub use service::AuthorizationService;
