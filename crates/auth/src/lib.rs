//! `partsroom-auth`: capability gate for the presentation layer.
//!
//! Answers "may this actor see the edit/delete control?" from an explicit
//! actor snapshot. The gate is **advisory**: it decides which controls are
//! shown, nothing more. The backend that executes a mutation remains the
//! authoritative enforcement point and must not rely on this crate.
//!
//! This crate is intentionally decoupled from HTTP, sessions and storage.

pub mod actor;
pub mod capabilities;
pub mod gate;
pub mod permissions;
pub mod roles;

pub use actor::Actor;
pub use capabilities::CapabilitySet;
pub use gate::{
    AuthzError, ControlVisibility, GateDecision, GrantSource, can, can_all, can_any, check,
    explain, is_admin, is_buyer, is_signed_in,
};
pub use permissions::Permission;
pub use roles::Role;
