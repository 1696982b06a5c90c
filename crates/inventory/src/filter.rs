//! Filter predicate for inventory list views.
//!
//! A [`FilterState`] holds one selection per axis (category, status, stock
//! alert). An item is visible iff it satisfies every axis. Evaluation is pure
//! and total: unrecognized item values simply never match a specific
//! selection.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use partsroom_core::{DomainError, DomainResult, ValueObject};

use crate::item::{Category, InventoryItem, StockStatus};

/// Sentinel meaning "do not filter on this axis".
pub const ALL_CODE: &str = "all";
const LEGACY_ALL_CODE: &str = "tous";

/// Closed set of values that a filter control can select.
pub trait FilterCode: Copy + Eq + Sized {
    /// Name of the axis, used in error messages.
    const KIND: &'static str;

    fn code(&self) -> &'static str;

    /// Strict lookup; `None` for anything that is not a recognized member.
    fn from_code(code: &str) -> Option<Self>;

    fn is_recognized(&self) -> bool;
}

/// Selection on one enumerated axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: FilterCode> Selection<T> {
    /// Whether an item carrying `value` passes this selection.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => value.is_recognized() && selected == value,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Selection::All => ALL_CODE,
            Selection::Only(value) => value.code(),
        }
    }

    /// Parse a control value: `all` (or `tous`) or a recognized member code.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw == ALL_CODE || raw == LEGACY_ALL_CODE {
            return Ok(Selection::All);
        }
        T::from_code(raw)
            .map(Selection::Only)
            .ok_or_else(|| DomainError::invalid_value(T::KIND, raw))
    }
}

impl<T: FilterCode> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de, T: FilterCode> Deserialize<'de> for Selection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Selection::parse(&raw).map_err(D::Error::custom)
    }
}

/// Stock-level axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockAlert {
    #[default]
    #[serde(alias = "tous")]
    All,
    /// Only items at or below their reorder threshold.
    #[serde(alias = "faible")]
    Low,
}

impl StockAlert {
    pub fn admits(&self, item: &InventoryItem) -> bool {
        match self {
            StockAlert::All => true,
            StockAlert::Low => item.is_low_stock(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StockAlert::All => ALL_CODE,
            StockAlert::Low => "low",
        }
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw.trim() {
            "all" | "tous" => Ok(StockAlert::All),
            "low" | "faible" => Ok(StockAlert::Low),
            other => Err(DomainError::invalid_value("stock_alert", other)),
        }
    }
}

/// One of the three filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterAxis {
    Category,
    Status,
    StockAlert,
}

impl FilterAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterAxis::Category => "category",
            FilterAxis::Status => "status",
            FilterAxis::StockAlert => "stock_alert",
        }
    }
}

/// A value for one axis, as produced by a filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterValue {
    Category(Selection<Category>),
    Status(Selection<StockStatus>),
    StockAlert(StockAlert),
}

impl FilterValue {
    pub fn axis(&self) -> FilterAxis {
        match self {
            FilterValue::Category(_) => FilterAxis::Category,
            FilterValue::Status(_) => FilterAxis::Status,
            FilterValue::StockAlert(_) => FilterAxis::StockAlert,
        }
    }

    /// Parse the string value of the control for `axis`.
    pub fn parse(axis: FilterAxis, raw: &str) -> DomainResult<Self> {
        Ok(match axis {
            FilterAxis::Category => FilterValue::Category(Selection::parse(raw)?),
            FilterAxis::Status => FilterValue::Status(Selection::parse(raw)?),
            FilterAxis::StockAlert => FilterValue::StockAlert(StockAlert::parse(raw)?),
        })
    }
}

/// User-selected filter criteria. Every axis always holds a valid value.
///
/// `Default` is the identity filter (every axis `all`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub category: Selection<Category>,
    #[serde(default)]
    pub status: Selection<StockStatus>,
    #[serde(default)]
    pub stock_alert: StockAlert,
}

impl ValueObject for FilterState {}

impl FilterState {
    pub fn new(
        category: Selection<Category>,
        status: Selection<StockStatus>,
        stock_alert: StockAlert,
    ) -> Self {
        Self {
            category,
            status,
            stock_alert,
        }
    }

    /// True when no axis restricts anything.
    pub fn is_identity(&self) -> bool {
        *self == FilterState::default()
    }

    /// Copy of `self` with one axis replaced.
    ///
    /// Fails if `value` belongs to a different axis than `axis`.
    pub fn with_field(&self, axis: FilterAxis, value: FilterValue) -> DomainResult<Self> {
        if value.axis() != axis {
            return Err(DomainError::validation(format!(
                "value for '{}' cannot be assigned to '{}'",
                value.axis().as_str(),
                axis.as_str()
            )));
        }
        let mut next = *self;
        match value {
            FilterValue::Category(selection) => next.category = selection,
            FilterValue::Status(selection) => next.status = selection,
            FilterValue::StockAlert(alert) => next.stock_alert = alert,
        }
        Ok(next)
    }

    /// Copy of `self` with `axis` set from the control's raw string value.
    pub fn with_raw(&self, axis: FilterAxis, raw: &str) -> DomainResult<Self> {
        self.with_field(axis, FilterValue::parse(axis, raw)?)
    }

    pub fn with_category(&self, category: Selection<Category>) -> Self {
        Self { category, ..*self }
    }

    pub fn with_status(&self, status: Selection<StockStatus>) -> Self {
        Self { status, ..*self }
    }

    pub fn with_stock_alert(&self, stock_alert: StockAlert) -> Self {
        Self {
            stock_alert,
            ..*self
        }
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.category.admits(&item.category())
            && self.status.admits(&item.status())
            && self.stock_alert.admits(item)
    }

    /// Lazily yield the items that pass, in source order.
    pub fn apply<'a, I>(&self, items: I) -> impl Iterator<Item = &'a InventoryItem>
    where
        I: IntoIterator<Item = &'a InventoryItem>,
    {
        items.into_iter().filter(move |item| self.matches(item))
    }
}

/// Whether `item` satisfies every active axis of `filters`.
pub fn matches(item: &InventoryItem, filters: &FilterState) -> bool {
    filters.matches(item)
}

/// Visible subset of `items`, preserving their relative order.
pub fn filter_items<'a>(items: &'a [InventoryItem], filters: &FilterState) -> Vec<&'a InventoryItem> {
    let visible: Vec<&InventoryItem> = items.iter().filter(|item| filters.matches(item)).collect();
    tracing::trace!(
        total = items.len(),
        visible = visible.len(),
        category = filters.category.code(),
        status = filters.status.code(),
        stock_alert = filters.stock_alert.code(),
        "inventory filter applied"
    );
    visible
}
