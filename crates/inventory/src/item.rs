use core::str::FromStr;

use serde::{Deserialize, Serialize};

use partsroom_core::{DomainError, DomainResult, ItemId, Money};

use crate::filter::FilterCode;

/// Part category.
///
/// `Unrecognized` absorbs any value a collaborator sends that is not a known
/// category; such items never match a specific category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[serde(alias = "mecanique")]
    Mechanical,
    #[serde(alias = "electrique")]
    Electrical,
    #[serde(alias = "hydraulique")]
    Hydraulic,
    #[serde(alias = "pneumatique")]
    Pneumatic,
    #[serde(alias = "electronique")]
    Electronic,
    #[serde(alias = "consommable")]
    Consumable,
    #[serde(alias = "autre")]
    Other,
    #[serde(other)]
    Unrecognized,
}

impl Category {
    /// Every recognized category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Mechanical,
        Category::Electrical,
        Category::Hydraulic,
        Category::Pneumatic,
        Category::Electronic,
        Category::Consumable,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mechanical => "mechanical",
            Category::Electrical => "electrical",
            Category::Hydraulic => "hydraulic",
            Category::Pneumatic => "pneumatic",
            Category::Electronic => "electronic",
            Category::Consumable => "consumable",
            Category::Other => "other",
            Category::Unrecognized => "unrecognized",
        }
    }
}

impl FilterCode for Category {
    const KIND: &'static str = "category";

    fn code(&self) -> &'static str {
        self.as_str()
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "mechanical" | "mecanique" => Some(Category::Mechanical),
            "electrical" | "electrique" => Some(Category::Electrical),
            "hydraulic" | "hydraulique" => Some(Category::Hydraulic),
            "pneumatic" | "pneumatique" => Some(Category::Pneumatic),
            "electronic" | "electronique" => Some(Category::Electronic),
            "consumable" | "consommable" => Some(Category::Consumable),
            "other" | "autre" => Some(Category::Other),
            _ => None,
        }
    }

    fn is_recognized(&self) -> bool {
        !matches!(self, Category::Unrecognized)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| DomainError::invalid_value(Self::KIND, s))
    }
}

/// Catalogue lifecycle of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[serde(alias = "actif")]
    Active,
    Obsolete,
    #[serde(alias = "discontinue")]
    Discontinued,
    #[serde(other)]
    Unrecognized,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::Active,
        StockStatus::Obsolete,
        StockStatus::Discontinued,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Active => "active",
            StockStatus::Obsolete => "obsolete",
            StockStatus::Discontinued => "discontinued",
            StockStatus::Unrecognized => "unrecognized",
        }
    }
}

impl FilterCode for StockStatus {
    const KIND: &'static str = "status";

    fn code(&self) -> &'static str {
        self.as_str()
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" | "actif" => Some(StockStatus::Active),
            "obsolete" => Some(StockStatus::Obsolete),
            "discontinued" | "discontinue" => Some(StockStatus::Discontinued),
            _ => None,
        }
    }

    fn is_recognized(&self) -> bool {
        !matches!(self, StockStatus::Unrecognized)
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| DomainError::invalid_value(Self::KIND, s))
    }
}

/// Three-level stock badge, relative to the reorder threshold (minimum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Strictly below the minimum.
    #[serde(alias = "critique")]
    Critical,
    /// Exactly at the minimum.
    #[serde(alias = "faible")]
    Low,
    Ok,
}

impl StockLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockLevel::Critical => "critical",
            StockLevel::Low => "low",
            StockLevel::Ok => "ok",
        }
    }
}

impl core::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default target stock level for a part with no explicit maximum.
pub const DEFAULT_MAX_QUANTITY: u64 = 100;

/// Read-only snapshot of one stocked part.
///
/// Quantities are unsigned, so the non-negativity invariants hold by
/// construction. Instances are validated on the way in (see
/// [`InventoryItemBuilder::build`] and the `ItemRecord` conversion used by
/// serde).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord", into = "ItemRecord")]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    category: Category,
    status: StockStatus,
    quantity_on_hand: u64,
    reorder_threshold: u64,
    unit_value: Money,
    needs_reorder: bool,
    quantity_on_order: u64,
    max_quantity: u64,
}

impl InventoryItem {
    pub fn builder(name: impl Into<String>) -> InventoryItemBuilder {
        InventoryItemBuilder::new(name)
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn status(&self) -> StockStatus {
        self.status
    }

    pub fn quantity_on_hand(&self) -> u64 {
        self.quantity_on_hand
    }

    pub fn reorder_threshold(&self) -> u64 {
        self.reorder_threshold
    }

    pub fn unit_value(&self) -> Money {
        self.unit_value
    }

    /// Flag set by the collaborator when the part belongs on a purchase list.
    pub fn needs_reorder(&self) -> bool {
        self.needs_reorder
    }

    pub fn quantity_on_order(&self) -> u64 {
        self.quantity_on_order
    }

    pub fn max_quantity(&self) -> u64 {
        self.max_quantity
    }

    /// Low stock: on-hand quantity at or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity_on_hand <= self.reorder_threshold
    }

    pub fn stock_level(&self) -> StockLevel {
        match self.quantity_on_hand.cmp(&self.reorder_threshold) {
            core::cmp::Ordering::Less => StockLevel::Critical,
            core::cmp::Ordering::Equal => StockLevel::Low,
            core::cmp::Ordering::Greater => StockLevel::Ok,
        }
    }

    /// `quantity_on_hand * unit_value`.
    pub fn stock_value(&self) -> Money {
        self.unit_value.times(self.quantity_on_hand)
    }
}

/// Builder for [`InventoryItem`].
#[derive(Debug, Clone)]
pub struct InventoryItemBuilder {
    item: InventoryItem,
}

impl InventoryItemBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            item: InventoryItem {
                id: ItemId::new(),
                name: name.into(),
                category: Category::Other,
                status: StockStatus::Active,
                quantity_on_hand: 0,
                reorder_threshold: 0,
                unit_value: Money::ZERO,
                needs_reorder: false,
                quantity_on_order: 0,
                max_quantity: DEFAULT_MAX_QUANTITY,
            },
        }
    }

    pub fn id(mut self, id: ItemId) -> Self {
        self.item.id = id;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.item.category = category;
        self
    }

    pub fn status(mut self, status: StockStatus) -> Self {
        self.item.status = status;
        self
    }

    pub fn quantity_on_hand(mut self, quantity: u64) -> Self {
        self.item.quantity_on_hand = quantity;
        self
    }

    pub fn reorder_threshold(mut self, threshold: u64) -> Self {
        self.item.reorder_threshold = threshold;
        self
    }

    pub fn unit_value(mut self, value: Money) -> Self {
        self.item.unit_value = value;
        self
    }

    pub fn needs_reorder(mut self, flag: bool) -> Self {
        self.item.needs_reorder = flag;
        self
    }

    pub fn quantity_on_order(mut self, quantity: u64) -> Self {
        self.item.quantity_on_order = quantity;
        self
    }

    pub fn max_quantity(mut self, quantity: u64) -> Self {
        self.item.max_quantity = quantity;
        self
    }

    pub fn build(self) -> DomainResult<InventoryItem> {
        let mut item = self.item;
        let trimmed = item.name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if trimmed.len() != item.name.len() {
            item.name = trimmed.to_string();
        }
        Ok(item)
    }
}

/// Wire shape of an item as supplied by the CRUD collaborator.
///
/// Missing optional fields fall back to the same defaults as the builder.
/// Converting into [`InventoryItem`] runs the builder's validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub status: StockStatus,
    pub quantity_on_hand: u64,
    pub reorder_threshold: u64,
    pub unit_value: Money,
    #[serde(default)]
    pub needs_reorder: bool,
    #[serde(default)]
    pub quantity_on_order: u64,
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u64,
}

fn default_max_quantity() -> u64 {
    DEFAULT_MAX_QUANTITY
}

impl TryFrom<ItemRecord> for InventoryItem {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        InventoryItem::builder(record.name)
            .id(record.id)
            .category(record.category)
            .status(record.status)
            .quantity_on_hand(record.quantity_on_hand)
            .reorder_threshold(record.reorder_threshold)
            .unit_value(record.unit_value)
            .needs_reorder(record.needs_reorder)
            .quantity_on_order(record.quantity_on_order)
            .max_quantity(record.max_quantity)
            .build()
    }
}

impl From<InventoryItem> for ItemRecord {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            status: item.status,
            quantity_on_hand: item.quantity_on_hand,
            reorder_threshold: item.reorder_threshold,
            unit_value: item.unit_value,
            needs_reorder: item.needs_reorder,
            quantity_on_order: item.quantity_on_order,
            max_quantity: item.max_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_blank_name() {
        let err = InventoryItem::builder("   ").build().unwrap_err();
        assert_eq!(err, DomainError::validation("name cannot be empty"));
    }

    #[test]
    fn builder_trims_name_and_applies_defaults() {
        let item = InventoryItem::builder("  Roulement 6204 ").build().unwrap();
        assert_eq!(item.name(), "Roulement 6204");
        assert_eq!(item.category(), Category::Other);
        assert_eq!(item.status(), StockStatus::Active);
        assert_eq!(item.max_quantity(), DEFAULT_MAX_QUANTITY);
        assert!(!item.needs_reorder());
    }

    #[test]
    fn low_stock_includes_the_threshold_itself() {
        let at = InventoryItem::builder("a")
            .quantity_on_hand(10)
            .reorder_threshold(10)
            .build()
            .unwrap();
        let above = InventoryItem::builder("b")
            .quantity_on_hand(11)
            .reorder_threshold(10)
            .build()
            .unwrap();
        assert!(at.is_low_stock());
        assert!(!above.is_low_stock());
    }

    #[test]
    fn stock_level_boundaries() {
        let level = |qty, minimum| {
            InventoryItem::builder("filtre")
                .quantity_on_hand(qty)
                .reorder_threshold(minimum)
                .build()
                .unwrap()
                .stock_level()
        };
        assert_eq!(level(4, 5), StockLevel::Critical);
        assert_eq!(level(5, 5), StockLevel::Low);
        assert_eq!(level(6, 5), StockLevel::Ok);
        assert_eq!(level(0, 0), StockLevel::Low);
    }

    #[test]
    fn stock_level_accepts_legacy_badge_names() {
        let parsed: Vec<StockLevel> =
            serde_json::from_str(r#"["critique", "faible", "ok", "critical"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![StockLevel::Critical, StockLevel::Low, StockLevel::Ok, StockLevel::Critical]
        );
        assert_eq!(serde_json::to_string(&StockLevel::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn category_parses_english_and_legacy_codes() {
        assert_eq!("hydraulic".parse::<Category>().unwrap(), Category::Hydraulic);
        assert_eq!("consommable".parse::<Category>().unwrap(), Category::Consumable);
        assert_eq!(
            "plumbing".parse::<Category>().unwrap_err(),
            DomainError::invalid_value("category", "plumbing")
        );
        assert!("unrecognized".parse::<Category>().is_err());
    }

    #[test]
    fn status_parses_legacy_codes() {
        assert_eq!("actif".parse::<StockStatus>().unwrap(), StockStatus::Active);
        assert_eq!("discontinue".parse::<StockStatus>().unwrap(), StockStatus::Discontinued);
    }

    #[test]
    fn deserializes_collaborator_record_with_defaults() {
        let id = ItemId::new();
        let json = format!(
            r#"{{
                "id": "{id}",
                "name": "Vérin pneumatique",
                "category": "pneumatique",
                "status": "actif",
                "quantity_on_hand": 3,
                "reorder_threshold": 4,
                "unit_value": 12950
            }}"#
        );
        let item: InventoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item.id(), id);
        assert_eq!(item.category(), Category::Pneumatic);
        assert_eq!(item.status(), StockStatus::Active);
        assert_eq!(item.unit_value(), Money::from_minor(12950));
        assert_eq!(item.max_quantity(), DEFAULT_MAX_QUANTITY);
        assert_eq!(item.quantity_on_order(), 0);
    }

    #[test]
    fn unknown_enum_values_deserialize_as_unrecognized() {
        let json = format!(
            r#"{{"id":"{}","name":"x","category":"plumbing","status":"retired",
                "quantity_on_hand":0,"reorder_threshold":0,"unit_value":0}}"#,
            ItemId::new()
        );
        let item: InventoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item.category(), Category::Unrecognized);
        assert_eq!(item.status(), StockStatus::Unrecognized);
    }

    #[test]
    fn deserialization_runs_validation() {
        let json = format!(
            r#"{{"id":"{}","name":"","category":"other","status":"active",
                "quantity_on_hand":0,"reorder_threshold":0,"unit_value":0}}"#,
            ItemId::new()
        );
        let err = serde_json::from_str::<InventoryItem>(&json).unwrap_err();
        assert!(err.to_string().contains("name cannot be empty"));
    }

    #[test]
    fn negative_quantities_are_rejected_by_the_wire_format() {
        let json = format!(
            r#"{{"id":"{}","name":"x","category":"other","status":"active",
                "quantity_on_hand":-1,"reorder_threshold":0,"unit_value":0}}"#,
            ItemId::new()
        );
        assert!(serde_json::from_str::<InventoryItem>(&json).is_err());
    }
}
