use serde::{Deserialize, Serialize};

/// Role assigned to a signed-in user.
///
/// `Admin` is the administrator capability: it implicitly grants every
/// permission. Role strings that are not known deserialize as `Unrecognized`
/// and grant nothing beyond the explicit capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    /// Purchasing staff.
    #[serde(alias = "acheteur")]
    Buyer,
    User,
    #[serde(other)]
    Unrecognized,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Buyer => "buyer",
            Role::User => "user",
            Role::Unrecognized => "unrecognized",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_buyer_name() {
        let role: Role = serde_json::from_str("\"acheteur\"").unwrap();
        assert_eq!(role, Role::Buyer);
    }

    #[test]
    fn unknown_role_is_unrecognized() {
        let role: Role = serde_json::from_str("\"superviseur\"").unwrap();
        assert_eq!(role, Role::Unrecognized);
    }
}
