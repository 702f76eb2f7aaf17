//! Menu loop: prompt, dispatch, print, repeat.
//!
//! Domain failures are printed and the loop continues; only IO failures
//! propagate out.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use stockroom_core::{DomainError, Money, ProductId};
use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
use stockroom_products::Category;
use stockroom_reports::ReportGenerator;

use crate::format;

pub fn run(inventory: &Inventory) -> Result<()> {
    loop {
        print_menu();
        let Some(choice) = prompt("Select an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_product(inventory)?,
            "2" => list_products(inventory),
            "3" => adjust_stock(inventory, Adjustment::Increase)?,
            "4" => adjust_stock(inventory, Adjustment::Decrease)?,
            "5" => low_stock(inventory)?,
            "6" => full_report(inventory),
            "7" => {
                println!("\nGoodbye!");
                break;
            }
            other => println!("\nERROR: '{other}' is not a menu option"),
        }
    }
    Ok(())
}

fn print_menu() {
    let bar = "=".repeat(50);
    println!("\n{bar}");
    println!("{:^50}", "STOCKROOM INVENTORY");
    println!("{bar}");
    println!("1. Add product");
    println!("2. List all products");
    println!("3. Increase stock");
    println!("4. Decrease stock (sale)");
    println!("5. Low stock products");
    println!("6. Full report");
    println!("7. Quit");
    println!("{bar}");
}

/// Read one trimmed line. `None` means stdin was closed.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_product(inventory: &Inventory) -> Result<()> {
    println!("\n--- ADD NEW PRODUCT ---");
    let Some(name) = prompt("Name: ")? else {
        return Ok(());
    };
    let Some(description) = prompt("Description: ")? else {
        return Ok(());
    };
    let Some(price) = prompt("Price: $")? else {
        return Ok(());
    };

    let Some(quantity) = prompt("Initial quantity: ")? else {
        return Ok(());
    };

    println!("\nAvailable categories:");
    for (index, category) in Category::ALL.iter().enumerate() {
        println!("  {}. {category}", index + 1);
    }
    let Some(selection) = prompt("\nCategory (number or name): ")? else {
        return Ok(());
    };

    let added = (|| {
        let price: Money = price.parse()?;
        let quantity = parse_count(&quantity, "quantity")?;
        let category = Category::parse_selection(&selection)?;
        inventory.add_product(&name, &description, price, quantity, category)
    })();

    match added {
        Ok(product) => println!("\nOK - product added: {product}"),
        Err(err) => println!("ERROR: {err}"),
    }
    Ok(())
}

fn list_products(inventory: &Inventory) {
    println!("{}", format::product_table(&inventory.list_all()));
}

#[derive(Clone, Copy)]
enum Adjustment {
    Increase,
    Decrease,
}

fn adjust_stock(inventory: &Inventory, adjustment: Adjustment) -> Result<()> {
    let Some(id) = prompt("Product id: ")? else {
        return Ok(());
    };
    let amount_label = match adjustment {
        Adjustment::Increase => "Amount to add: ",
        Adjustment::Decrease => "Amount sold: ",
    };
    let Some(amount) = prompt(amount_label)? else {
        return Ok(());
    };

    let outcome = id.parse::<ProductId>().and_then(|id| {
        let amount = parse_count(&amount, "amount")?;
        match adjustment {
            Adjustment::Increase => inventory.increase_stock(id, amount),
            Adjustment::Decrease => inventory.decrease_stock(id, amount),
        }
    });

    match outcome {
        Ok(()) => match adjustment {
            Adjustment::Increase => println!("OK - stock increased"),
            Adjustment::Decrease => println!("OK - sale recorded"),
        },
        Err(err) => println!("ERROR: {err}"),
    }
    Ok(())
}

fn low_stock(inventory: &Inventory) -> Result<()> {
    let Some(raw) = prompt(&format!(
        "Low stock threshold (default {DEFAULT_LOW_STOCK_THRESHOLD}): "
    ))?
    else {
        return Ok(());
    };

    let threshold = if raw.is_empty() {
        Ok(DEFAULT_LOW_STOCK_THRESHOLD)
    } else {
        parse_count(&raw, "threshold")
    };

    match threshold {
        Ok(threshold) => {
            println!("{}", format::product_table(&inventory.low_stock(threshold)))
        }
        Err(err) => println!("ERROR: {err}"),
    }
    Ok(())
}

fn full_report(inventory: &Inventory) {
    let report = ReportGenerator::new(inventory).full_report();
    println!("{}", format::report(&report));
}

fn parse_count(raw: &str, what: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::validation(format!("'{raw}' is not a valid {what}")))
}
