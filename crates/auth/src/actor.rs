use serde::de::IntoDeserializer;
use serde::de::value::StrDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use partsroom_core::ActorId;

use crate::{CapabilitySet, Permission, Role};

/// Snapshot of the current user, passed explicitly to every gate query.
///
/// `role` is `None` for an anonymous visitor; a missing, null or blank role
/// reads as `None`. The gate never looks at `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: Option<Role>,
    #[serde(default, rename = "permissions")]
    pub capabilities: CapabilitySet,
}

impl Actor {
    pub fn new(id: ActorId, role: Role, capabilities: CapabilitySet) -> Self {
        Self {
            id,
            role: Some(role),
            capabilities,
        }
    }

    /// An actor with no role and no capabilities.
    pub fn anonymous() -> Self {
        Self {
            id: ActorId::new(),
            role: None,
            capabilities: CapabilitySet::new(),
        }
    }

    /// Convenience for a user with the given explicit permissions.
    pub fn with_permissions(role: Role, permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::new(ActorId::new(), role, permissions.into_iter().collect())
    }
}

fn deserialize_role<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Role>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => {
            let name: StrDeserializer<'_, D::Error> = name.into_deserializer();
            Role::deserialize(name).map(Some)
        }
    }
}
