//! Reorder suggestion policy.
//!
//! Collaborators that maintain the `needs_reorder` flag can use this policy to
//! derive it from stock levels. The aggregator never consults it: the flag on
//! the item is taken as supplied.

use crate::item::InventoryItem;

/// Stock-level rule for suggesting a purchase.
///
/// The suggested quantity brings a part back up to its minimum (reorder
/// threshold); the maximum level plays no part. A part should be reordered
/// when nothing is already on order and that quantity is positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderPolicy;

impl ReorderPolicy {
    /// Shortfall below the minimum; zero when the part is at or above it.
    pub fn suggested_quantity(&self, item: &InventoryItem) -> u64 {
        let minimum = item.reorder_threshold();
        if minimum > 0 && item.quantity_on_hand() < minimum {
            minimum - item.quantity_on_hand()
        } else {
            0
        }
    }

    pub fn should_reorder(&self, item: &InventoryItem) -> bool {
        item.quantity_on_order() == 0 && self.suggested_quantity(item) > 0
    }

    /// Items the policy would put on a purchase list, in source order.
    pub fn candidates<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        items.iter().filter(|item| self.should_reorder(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(on_hand: u64, minimum: u64, maximum: u64, on_order: u64) -> InventoryItem {
        InventoryItem::builder("courroie")
            .quantity_on_hand(on_hand)
            .reorder_threshold(minimum)
            .max_quantity(maximum)
            .quantity_on_order(on_order)
            .build()
            .unwrap()
    }

    #[test]
    fn suggests_the_shortfall_below_minimum() {
        assert_eq!(ReorderPolicy.suggested_quantity(&part(3, 5, 20, 0)), 2);
        assert_eq!(ReorderPolicy.suggested_quantity(&part(5, 5, 20, 0)), 0);
        assert_eq!(ReorderPolicy.suggested_quantity(&part(30, 5, 20, 0)), 0);
    }

    #[test]
    fn reorders_only_strictly_below_minimum() {
        assert!(ReorderPolicy.should_reorder(&part(4, 5, 20, 0)));
        assert!(!ReorderPolicy.should_reorder(&part(5, 5, 20, 0)));
    }

    #[test]
    fn pending_orders_suppress_reorder() {
        assert!(!ReorderPolicy.should_reorder(&part(0, 5, 20, 10)));
    }

    #[test]
    fn zero_minimum_never_reorders() {
        assert!(!ReorderPolicy.should_reorder(&part(0, 0, 20, 0)));
    }

    #[test]
    fn maximum_level_is_ignored() {
        assert!(ReorderPolicy.should_reorder(&part(2, 5, 2, 0)));
        assert_eq!(ReorderPolicy.suggested_quantity(&part(2, 5, 2, 0)), 3);
        assert_eq!(ReorderPolicy.suggested_quantity(&part(0, 5, 0, 0)), 5);
    }

    #[test]
    fn candidates_keep_source_order() {
        let items = vec![part(1, 5, 20, 0), part(9, 5, 20, 0), part(0, 2, 10, 0)];
        let picked = ReorderPolicy.candidates(&items);
        assert_eq!(picked, vec![&items[0], &items[2]]);
    }
}
