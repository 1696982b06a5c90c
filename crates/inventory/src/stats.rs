//! Summary statistics over an inventory collection.

use core::borrow::Borrow;

use serde::{Deserialize, Serialize};

use partsroom_core::{Money, ValueObject};

use crate::item::InventoryItem;

/// Summary metrics for one collection, recomputed on every call.
///
/// Tracks:
/// - `total_items`: number of items evaluated
/// - `critical_stock_count`: items at or below their reorder threshold
/// - `stock_value`: sum of `quantity_on_hand * unit_value` (minor units)
/// - `reorder_count`: items flagged `needs_reorder`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_items: u64,
    pub critical_stock_count: u64,
    pub stock_value: Money,
    pub reorder_count: u64,
}

impl ValueObject for StatsSnapshot {}

impl StatsSnapshot {
    /// Combine the snapshots of two disjoint collections.
    pub fn merge(self, other: StatsSnapshot) -> StatsSnapshot {
        StatsSnapshot {
            total_items: self.total_items.saturating_add(other.total_items),
            critical_stock_count: self
                .critical_stock_count
                .saturating_add(other.critical_stock_count),
            stock_value: self.stock_value + other.stock_value,
            reorder_count: self.reorder_count.saturating_add(other.reorder_count),
        }
    }

    fn record(&mut self, item: &InventoryItem) {
        self.total_items = self.total_items.saturating_add(1);
        if item.is_low_stock() {
            self.critical_stock_count = self.critical_stock_count.saturating_add(1);
        }
        self.stock_value = self.stock_value + item.stock_value();
        if item.needs_reorder() {
            self.reorder_count = self.reorder_count.saturating_add(1);
        }
    }
}

/// Reduce `items` to a [`StatsSnapshot`] in a single pass.
///
/// Accepts the full inventory (`&[InventoryItem]`) or a filtered subset
/// (`Vec<&InventoryItem>` from [`crate::filter_items`]). An empty collection
/// yields the all-zero snapshot.
pub fn aggregate<I>(items: I) -> StatsSnapshot
where
    I: IntoIterator,
    I::Item: Borrow<InventoryItem>,
{
    let mut snapshot = StatsSnapshot::default();
    for item in items {
        snapshot.record(item.borrow());
    }

    tracing::debug!(
        total_items = snapshot.total_items,
        critical_stock_count = snapshot.critical_stock_count,
        stock_value = snapshot.stock_value.minor_units(),
        reorder_count = snapshot.reorder_count,
        "inventory stats aggregated"
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterState, StockAlert, filter_items};
    use proptest::prelude::*;

    fn item(qty: u64, threshold: u64, unit_value: &str, needs_reorder: bool) -> InventoryItem {
        InventoryItem::builder("part")
            .quantity_on_hand(qty)
            .reorder_threshold(threshold)
            .unit_value(unit_value.parse().unwrap())
            .needs_reorder(needs_reorder)
            .build()
            .unwrap()
    }

    #[test]
    fn empty_collection_is_all_zero() {
        let items: Vec<InventoryItem> = Vec::new();
        assert_eq!(aggregate(&items), StatsSnapshot::default());
        assert_eq!(aggregate(&items).stock_value, Money::ZERO);
    }

    #[test]
    fn computes_the_four_metrics() {
        let items = vec![item(5, 10, "2.00", true), item(20, 5, "3.50", false)];
        let stats = aggregate(&items);
        assert_eq!(
            stats,
            StatsSnapshot {
                total_items: 2,
                critical_stock_count: 1,
                stock_value: Money::from_minor(8000),
                reorder_count: 1,
            }
        );
        assert_eq!(stats.stock_value.to_string(), "80.00");
    }

    #[test]
    fn critical_count_includes_threshold_boundary() {
        let items = vec![item(3, 3, "1.00", false), item(0, 0, "1.00", false)];
        assert_eq!(aggregate(&items).critical_stock_count, 2);
    }

    #[test]
    fn reorder_flag_is_counted_independently_of_stock() {
        // Plenty of stock, flagged anyway.
        let items = vec![item(90, 5, "1.00", true)];
        let stats = aggregate(&items);
        assert_eq!(stats.reorder_count, 1);
        assert_eq!(stats.critical_stock_count, 0);
    }

    #[test]
    fn aggregates_a_filtered_subset() {
        let items = vec![
            item(1, 5, "10.00", true),
            item(50, 5, "1.00", false),
            item(2, 5, "0.25", false),
        ];
        let filters = FilterState::default().with_stock_alert(StockAlert::Low);
        let stats = aggregate(filter_items(&items, &filters));
        assert_eq!(stats.total_items, 2);
        assert_eq!(stats.critical_stock_count, 2);
        assert_eq!(stats.stock_value, Money::from_minor(1050));
    }

    #[test]
    fn no_float_drift_over_many_items() {
        let items: Vec<InventoryItem> = (0..10_000).map(|_| item(3, 0, "0.10", false)).collect();
        assert_eq!(aggregate(&items).stock_value, Money::from_minor(300_000));
    }

    #[test]
    fn serializes_with_minor_unit_value() {
        let stats = aggregate(&[item(2, 0, "1.25", false)]);
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total_items": 1,
                "critical_stock_count": 0,
                "stock_value": 250,
                "reorder_count": 0
            })
        );
    }

    fn arb_item() -> impl Strategy<Value = InventoryItem> {
        (0u64..1_000, 0u64..1_000, 0u64..1_000_000, any::<bool>()).prop_map(
            |(qty, threshold, cents, needs_reorder)| {
                InventoryItem::builder("part")
                    .quantity_on_hand(qty)
                    .reorder_threshold(threshold)
                    .unit_value(Money::from_minor(cents))
                    .needs_reorder(needs_reorder)
                    .build()
                    .unwrap()
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: permuting the input does not change the snapshot.
        #[test]
        fn aggregate_is_order_independent(
            (items, shuffled) in prop::collection::vec(arb_item(), 0..30)
                .prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
        ) {
            prop_assert_eq!(aggregate(&items), aggregate(&shuffled));
        }

        /// Property: aggregating twice yields the same snapshot.
        #[test]
        fn aggregate_is_idempotent(items in prop::collection::vec(arb_item(), 0..30)) {
            prop_assert_eq!(aggregate(&items), aggregate(&items));
        }

        /// Property: merging snapshots of a split equals aggregating the whole.
        #[test]
        fn merge_matches_concatenation(
            items in prop::collection::vec(arb_item(), 0..30),
            split in 0usize..30
        ) {
            let split = split.min(items.len());
            let (left, right) = items.split_at(split);
            prop_assert_eq!(aggregate(left).merge(aggregate(right)), aggregate(&items));
        }

        /// Property: each metric matches its independent definition.
        #[test]
        fn metrics_match_definitions(items in prop::collection::vec(arb_item(), 0..30)) {
            let stats = aggregate(&items);
            prop_assert_eq!(stats.total_items, items.len() as u64);
            prop_assert_eq!(
                stats.critical_stock_count,
                items.iter().filter(|i| i.quantity_on_hand() <= i.reorder_threshold()).count() as u64
            );
            prop_assert_eq!(
                stats.stock_value.minor_units(),
                items.iter().map(|i| i.quantity_on_hand() * i.unit_value().minor_units()).sum::<u64>()
            );
            prop_assert_eq!(
                stats.reorder_count,
                items.iter().filter(|i| i.needs_reorder()).count() as u64
            );
        }
    }
}
