//! Capability gate.
//!
//! - No IO
//! - No panics
//! - No caching: every query re-reads the actor snapshot it is given, so a
//!   role change is reflected on the next render.
//!
//! The answers decide which controls the presentation layer exposes. They do
//! not authorize the mutation itself; that is the backend's job.

use serde::Serialize;
use thiserror::Error;

use crate::{Actor, Permission, Role};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(Permission),
}

/// Whether the actor holds the administrator role.
pub fn is_admin(actor: &Actor) -> bool {
    actor.role == Some(Role::Admin)
}

/// Purchasing staff or administrators.
pub fn is_buyer(actor: &Actor) -> bool {
    matches!(actor.role, Some(Role::Buyer | Role::Admin))
}

/// Any actor carrying a role counts as signed in.
pub fn is_signed_in(actor: &Actor) -> bool {
    actor.role.is_some()
}

/// Whether `actor` may use controls guarded by `permission`.
///
/// Administrators short-circuit the membership check.
pub fn can(actor: &Actor, permission: Permission) -> bool {
    is_admin(actor) || actor.capabilities.contains(permission)
}

/// True iff every listed permission is held (vacuously true for none).
pub fn can_all(actor: &Actor, permissions: impl IntoIterator<Item = Permission>) -> bool {
    permissions.into_iter().all(|p| can(actor, p))
}

/// True iff at least one listed permission is held (false for none).
pub fn can_any(actor: &Actor, permissions: impl IntoIterator<Item = Permission>) -> bool {
    permissions.into_iter().any(|p| can(actor, p))
}

/// [`can`] as a `Result`, for callers that propagate with `?`.
pub fn check(actor: &Actor, permission: Permission) -> Result<(), AuthzError> {
    if can(actor, permission) {
        Ok(())
    } else {
        tracing::debug!(
            actor_id = %actor.id,
            permission = permission.as_str(),
            "capability check denied"
        );
        Err(AuthzError::Forbidden(permission))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decision explanation
// ─────────────────────────────────────────────────────────────────────────────

/// What granted a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantSource {
    Administrator,
    Capability,
}

/// Explanation of a single gate decision, for debugging and audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateDecision {
    pub permission: Permission,
    pub granted: bool,
    pub source: Option<GrantSource>,
    pub role: Option<Role>,
    pub reason: String,
    pub suggestions: Vec<String>,
}

/// Explain why [`can`] answers the way it does for `actor` and `permission`.
pub fn explain(actor: &Actor, permission: Permission) -> GateDecision {
    let name = permission.as_str();

    if is_admin(actor) {
        return GateDecision {
            permission,
            granted: true,
            source: Some(GrantSource::Administrator),
            role: actor.role,
            reason: format!("administrator role implicitly grants '{name}'"),
            suggestions: Vec::new(),
        };
    }

    if actor.capabilities.contains(permission) {
        return GateDecision {
            permission,
            granted: true,
            source: Some(GrantSource::Capability),
            role: actor.role,
            reason: format!("capability set contains '{name}'"),
            suggestions: Vec::new(),
        };
    }

    let held: Vec<&str> = actor.capabilities.iter().map(|p| p.as_str()).collect();
    let mut suggestions = vec![format!("grant '{name}' to the user's group")];
    if !is_signed_in(actor) {
        suggestions.insert(0, "sign in first".to_string());
    }

    GateDecision {
        permission,
        granted: false,
        source: None,
        role: actor.role,
        reason: format!("missing '{name}'; held: {held:?}"),
        suggestions,
    }
}

/// Which mutation controls a manufacturer card should render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ControlVisibility {
    pub can_edit: bool,
    pub can_delete: bool,
}

impl ControlVisibility {
    pub fn for_actor(actor: &Actor) -> Self {
        Self {
            can_edit: can(actor, Permission::FabricantUpdate),
            can_delete: can(actor, Permission::FabricantDelete),
        }
    }
}
