//! External login providers (closed set) and their descriptors.
//!
//! `kind` exposes [`ExternalProvider`], the fixed provider enumeration with its configuration
//! key paths and canonical scheme names. `descriptor` holds the per-provider registration data
//! (endpoints, default scopes, callback path, extras) consumed by the registrar.

pub mod descriptor;
pub mod kind;

pub use descriptor::*;
pub use kind::*;
