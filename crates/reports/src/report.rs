use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::Money;
use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
use stockroom_products::Product;

/// One computed snapshot of the inventory — not a live view. Mutations made
/// after generation are not reflected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub generated_at: DateTime<Utc>,
    pub total_products: usize,
    pub total_stock_items: i64,
    pub total_value: Money,
    pub most_expensive: Option<Product>,
    pub cheapest: Option<Product>,
    /// Products at or below [`DEFAULT_LOW_STOCK_THRESHOLD`], sorted by id.
    pub low_stock: Vec<Product>,
}

/// Generates summary statistics over an inventory's current state.
///
/// Borrows the inventory for reads only; nothing is cached between calls.
pub struct ReportGenerator<'a> {
    inventory: &'a Inventory,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }

    /// Sum of `price * quantity` over every product; zero when empty.
    pub fn total_inventory_value(&self) -> Money {
        self.inventory
            .list_all()
            .iter()
            .map(Product::total_value)
            .sum()
    }

    /// Number of distinct products.
    pub fn total_product_count(&self) -> usize {
        self.inventory.list_all().len()
    }

    /// Sum of all quantities on hand.
    pub fn total_stock_items(&self) -> i64 {
        self.inventory.list_all().iter().map(Product::quantity).sum()
    }

    /// Product with the maximum price; under equal prices the lowest id wins,
    /// so the result is deterministic despite unordered repository iteration.
    pub fn most_expensive(&self) -> Option<Product> {
        Self::pick(self.inventory.list_all(), |candidate, best| {
            candidate.price() > best.price()
        })
    }

    /// Product with the minimum price; ties resolve to the lowest id.
    pub fn cheapest(&self) -> Option<Product> {
        Self::pick(self.inventory.list_all(), |candidate, best| {
            candidate.price() < best.price()
        })
    }

    fn pick(products: Vec<Product>, beats: impl Fn(&Product, &Product) -> bool) -> Option<Product> {
        products.into_iter().reduce(|best, candidate| {
            if beats(&candidate, &best)
                || (candidate.price() == best.price() && candidate.id() < best.id())
            {
                candidate
            } else {
                best
            }
        })
    }

    /// Bundle every aggregate plus the low-stock list into one snapshot.
    pub fn full_report(&self) -> InventoryReport {
        let mut low_stock = self.inventory.low_stock(DEFAULT_LOW_STOCK_THRESHOLD);
        low_stock.sort_by_key(Product::id);

        InventoryReport {
            generated_at: Utc::now(),
            total_products: self.total_product_count(),
            total_stock_items: self.total_stock_items(),
            total_value: self.total_inventory_value(),
            most_expensive: self.most_expensive(),
            cheapest: self.cheapest(),
            low_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_products::Category;

    fn sample_inventory() -> Inventory {
        let inventory = Inventory::in_memory();
        // (name, cents, quantity)
        for (name, cents, quantity, category) in [
            ("Pen", 150, 100, Category::Writing),
            ("Mouse", 2550, 50, Category::Technology),
            ("Rattle", 2000, 5, Category::Toys),
            ("Bible", 8999, 18, Category::Books),
        ] {
            inventory
                .add_product(name, "", Money::from_cents(cents), quantity, category)
                .unwrap();
        }
        inventory
    }

    #[test]
    fn totals_over_an_empty_inventory_are_zero() {
        let inventory = Inventory::in_memory();
        let reports = ReportGenerator::new(&inventory);

        assert_eq!(reports.total_inventory_value(), Money::ZERO);
        assert_eq!(reports.total_product_count(), 0);
        assert_eq!(reports.total_stock_items(), 0);
        assert!(reports.most_expensive().is_none());
        assert!(reports.cheapest().is_none());
        assert!(reports.full_report().low_stock.is_empty());
    }

    #[test]
    fn total_value_sums_positions() {
        let inventory = sample_inventory();
        let reports = ReportGenerator::new(&inventory);

        // 150*100 + 2550*50 + 2000*5 + 8999*18
        let expected = Money::from_cents(15_000 + 127_500 + 10_000 + 161_982);
        assert_eq!(reports.total_inventory_value(), expected);
    }

    #[test]
    fn counts_distinguish_products_from_stock_items() {
        let inventory = sample_inventory();
        let reports = ReportGenerator::new(&inventory);

        assert_eq!(reports.total_product_count(), 4);
        assert_eq!(reports.total_stock_items(), 173);
    }

    #[test]
    fn extremes_pick_max_and_min_price() {
        let inventory = sample_inventory();
        let reports = ReportGenerator::new(&inventory);

        assert_eq!(reports.most_expensive().unwrap().name(), "Bible");
        assert_eq!(reports.cheapest().unwrap().name(), "Pen");
    }

    #[test]
    fn price_ties_resolve_to_the_lowest_id() {
        let inventory = Inventory::in_memory();
        let first = inventory
            .add_product("Alpha", "", Money::from_cents(500), 1, Category::Toys)
            .unwrap();
        inventory
            .add_product("Beta", "", Money::from_cents(500), 1, Category::Toys)
            .unwrap();

        let reports = ReportGenerator::new(&inventory);
        assert_eq!(reports.most_expensive().unwrap().id(), first.id());
        assert_eq!(reports.cheapest().unwrap().id(), first.id());
    }

    #[test]
    fn full_report_is_a_snapshot_not_a_live_view() {
        let inventory = sample_inventory();
        let report = ReportGenerator::new(&inventory).full_report();

        let rattle = report.low_stock[0].id();
        inventory.increase_stock(rattle, 500).unwrap();

        // The captured snapshot still shows the pre-mutation state.
        assert_eq!(report.low_stock.len(), 1);
        assert_eq!(report.low_stock[0].quantity(), 5);
        assert_eq!(report.total_stock_items, 173);
    }

    #[test]
    fn full_report_low_stock_is_sorted_by_id() {
        let inventory = Inventory::in_memory();
        for (name, quantity) in [("A", 3), ("B", 7), ("C", 1)] {
            inventory
                .add_product(name, "", Money::from_cents(100), quantity, Category::Crafts)
                .unwrap();
        }

        let report = ReportGenerator::new(&inventory).full_report();
        let ids: Vec<_> = report.low_stock.iter().map(|p| p.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(report.low_stock.len(), 3);
    }

    #[test]
    fn report_serializes_to_json() {
        let inventory = sample_inventory();
        let report = ReportGenerator::new(&inventory).full_report();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_products"], 4);
        assert_eq!(json["total_value"], 314_482);
        assert!(json["generated_at"].is_string());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the reported total always equals the sum of the
            /// individual position values.
            #[test]
            fn total_value_matches_manual_sum(
                positions in proptest::collection::vec((0i64..10_000, 0i64..1_000), 0..20)
            ) {
                let inventory = Inventory::in_memory();
                let mut expected = 0i64;
                for (i, (cents, quantity)) in positions.iter().enumerate() {
                    inventory
                        .add_product(
                            &format!("P{i}"),
                            "",
                            Money::from_cents(*cents),
                            *quantity,
                            Category::Organizers,
                        )
                        .unwrap();
                    expected += cents * quantity;
                }

                let reports = ReportGenerator::new(&inventory);
                prop_assert_eq!(
                    reports.total_inventory_value(),
                    Money::from_cents(expected)
                );
            }
        }
    }
}
