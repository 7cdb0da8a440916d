// ============================================================================
// Field Session Example
// ============================================================================
//
// Run with: cargo run --example field_session --features logging
// Set RUST_LOG=currency_field=trace to see every transition.

use currency_field::prelude::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Currency Field Example ===\n");

    // Display form for every supported currency
    let amount = Decimal::new(123_456_789, 2);
    println!("Display forms of {}:", amount);
    for profile in LocaleProfile::all() {
        println!(
            "  {} {:>4} {}",
            profile.currency_code,
            profile.symbol,
            format_for_display(amount, profile)
        );
    }

    // Simulate a user editing a BRL budget field
    println!("\n=== Editing a BRL field ===");
    let config =
        FieldConfig::new(Decimal::new(50000, 2), CurrencyCode::Brl).with_label("Orçamento");
    let mut field = CurrencyField::new(config, LoggingChangeHandler);
    println!("Initial:  {:?}", field.buffer());

    field.focus();
    println!("Focused:  {:?}", field.buffer());

    for raw in ["500,00", "1500,00", "1.500,005", "1500,,75"] {
        let amount = field.input(raw);
        println!(
            "Typed {:<12} -> buffer {:<10} amount {}",
            format!("{:?}", raw),
            format!("{:?}", field.buffer()),
            amount
        );
    }

    // Host update mid-edit is ignored
    field.set_value(Decimal::from(42));
    println!("After host update while focused: {:?}", field.buffer());

    let committed = field.blur();
    println!("Blurred:  {:?} (committed {})", field.buffer(), committed);

    // Garbage input degrades to a blank field
    println!("\n=== Garbage input ===");
    field.focus();
    field.input("abc");
    let committed = field.blur();
    let view = field.view();
    println!(
        "Committed {} -> text {:?}, placeholder {:?}",
        committed, view.text, view.placeholder
    );

    // Unknown currencies are configuration errors
    println!("\n=== Unknown currency ===");
    match lookup("JPY") {
        Ok(profile) => println!("Unexpected profile: {:?}", profile),
        Err(err) => println!("{}", err),
    }
}
