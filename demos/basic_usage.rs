// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_money::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    fixed_money::utils::init_logging();

    println!("=== Fixed Money Example ===\n");

    // Build a small invoice
    let lines = [
        Money::of(19, 99, &EUR).unwrap(),
        Money::of_decimal(Decimal::new(450, 2), &EUR).unwrap(),
        Money::of(0, 75, &EUR).unwrap(),
    ];

    println!("Invoice lines:");
    for line in &lines {
        println!("  {}", line);
    }

    let total = Money::sum(lines).unwrap();
    println!("\nTotal: {} ({}{})", total, EUR.symbol(), total.to_decimal());

    // Split the bill three ways
    println!("\n=== Splitting Three Ways ===");
    for (i, share) in total.divide(3).unwrap().iter().enumerate() {
        println!("  Guest {}: {}", i + 1, share);
    }

    // Split by ratio 1:2:5
    println!("\n=== Allocating 1:2:5 ===");
    for share in total.allocate(&[1, 2, 5]).unwrap() {
        println!("  {} ({:.1}%)", share, share.percentage_of(total).unwrap() * 100.0);
    }

    // Refund more than was paid
    println!("\n=== Refund ===");
    let refund = Money::of(30, 0, &EUR).unwrap();
    let balance = total.minus(refund).unwrap();
    println!("  Balance after refund: {}", balance);
    println!("  Owed back: {}", balance.abs().unwrap());

    // Currency guards
    println!("\n=== Currency Guard ===");
    let dollars = MoneyBuilder::new()
        .currency_code("USD")
        .unwrap()
        .major(10)
        .build()
        .unwrap();

    match total.plus(dollars) {
        Ok(sum) => println!("  Unexpected sum: {}", sum),
        Err(err) => println!("  Rejected: {}", err),
    }

    match Currency::from_code("XYZ") {
        Ok(currency) => println!("  Unexpected currency: {}", currency),
        Err(err) => println!("  Lookup failed: {}", err),
    }
}
