//! Interactive inventory console.
//!
//! Thin wrapper over the domain crates: all rules live in
//! `stockroom-inventory` / `stockroom-reports`; this binary only prompts,
//! parses, and prints.

mod format;
mod menu;

use anyhow::Result;

use stockroom_core::Money;
use stockroom_inventory::Inventory;
use stockroom_products::Category;

fn main() -> Result<()> {
    stockroom_observability::init();

    let inventory = Inventory::in_memory();
    seed_demo_data(&inventory)?;
    println!("\nOK - demo data loaded");

    menu::run(&inventory)
}

/// Demo dataset so the menu has something to show on first launch.
fn seed_demo_data(inventory: &Inventory) -> Result<()> {
    let samples = [
        ("Pencil", "Artesco pencil", 199, 50, Category::Writing),
        ("Mouse", "Wireless mouse", 2550, 50, Category::Technology),
        ("Rattle", "Agu baby rattle", 2000, 15, Category::Toys),
        ("Sharpener", "Binifan sharpener", 250, 100, Category::Writing),
        ("Doll", "Alicia doll", 6000, 30, Category::Toys),
        ("Radio", "Sony radio", 3500, 25, Category::Technology),
        ("Bible", "Holy Bible", 8999, 18, Category::Books),
    ];

    for (name, description, cents, quantity, category) in samples {
        inventory.add_product(name, description, Money::from_cents(cents), quantity, category)?;
    }
    tracing::info!(count = samples.len(), "demo data seeded");
    Ok(())
}
