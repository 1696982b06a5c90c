use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Permission;

/// Permissions explicitly granted to an actor.
///
/// On the wire this is the group permission map, `{"fabricant_update": true,
/// ...}`. Only `true` entries are granted; names outside [`Permission`] are
/// dropped when the map is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Permission>);

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a `name -> granted` map.
    pub fn from_flags<I, K>(flags: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut granted = BTreeSet::new();
        for (name, enabled) in flags {
            let name = name.as_ref();
            match name.parse::<Permission>() {
                Ok(permission) if enabled => {
                    granted.insert(permission);
                }
                Ok(_) => {}
                Err(_) => {
                    tracing::debug!(permission = name, "ignoring unknown permission flag");
                }
            }
        }
        Self(granted)
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn grant(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    pub fn revoke(&mut self, permission: Permission) -> bool {
        self.0.remove(&permission)
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Permission> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|p| (p.as_str(), true)))
    }
}

impl<'de> Deserialize<'de> for CapabilitySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flags = BTreeMap::<String, bool>::deserialize(deserializer)?;
        Ok(Self::from_flags(flags))
    }
}
