use core::str::FromStr;

use serde::{Deserialize, Serialize};

use partsroom_core::DomainError;

/// Permission identifier.
///
/// Closed set of the rights a user group can be granted. Wire names are the
/// snake_case strings stored in group permission maps (e.g. `"fabricant_update"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    FabricantView,
    FabricantCreate,
    FabricantUpdate,
    FabricantDelete,
    InventaireView,
    CommandesView,
    FournisseurView,
    SoumissionsView,
    ReceptionsView,
    HistoriqueView,
    GroupesView,
    DepartementsView,
    CanDeleteAny,
    CanApproveOrders,
}

impl Permission {
    pub const ALL: [Permission; 14] = [
        Permission::FabricantView,
        Permission::FabricantCreate,
        Permission::FabricantUpdate,
        Permission::FabricantDelete,
        Permission::InventaireView,
        Permission::CommandesView,
        Permission::FournisseurView,
        Permission::SoumissionsView,
        Permission::ReceptionsView,
        Permission::HistoriqueView,
        Permission::GroupesView,
        Permission::DepartementsView,
        Permission::CanDeleteAny,
        Permission::CanApproveOrders,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::FabricantView => "fabricant_view",
            Permission::FabricantCreate => "fabricant_create",
            Permission::FabricantUpdate => "fabricant_update",
            Permission::FabricantDelete => "fabricant_delete",
            Permission::InventaireView => "inventaire_view",
            Permission::CommandesView => "commandes_view",
            Permission::FournisseurView => "fournisseur_view",
            Permission::SoumissionsView => "soumissions_view",
            Permission::ReceptionsView => "receptions_view",
            Permission::HistoriqueView => "historique_view",
            Permission::GroupesView => "groupes_view",
            Permission::DepartementsView => "departements_view",
            Permission::CanDeleteAny => "can_delete_any",
            Permission::CanApproveOrders => "can_approve_orders",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::invalid_value("permission", s))
    }
}
