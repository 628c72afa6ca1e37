//! # Quote CLI
//!
//! A reference front end for the pricing engine: raw flag values go into a
//! [`PriceForm`] untouched, the form validates them, and a clean form is
//! evaluated and printed as JSON.
//!
//! ## Usage
//! ```bash
//! # Plain price
//! cargo run -p tally-form --bin quote -- --price 100
//!
//! # 20% off, $10 shipping, 8.25% tax
//! cargo run -p tally-form --bin quote -- --price 100 --discount 20 \
//!     --shipping 10 --tax 8.25
//!
//! # Buy 2 get 1 free at $25/item, with a $5 coupon
//! cargo run -p tally-form --bin quote -- --price 100 \
//!     --buy-x 2 --get-y 1 --item-price 25 --coupon 5
//! ```
//!
//! Validation failures print one line per field on stderr and exit 2.

use std::env;
use std::process;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use tally_form::currency::symbol_or_default;
use tally_form::PriceForm;

/// Consumes the value following a flag; a missing value stays blank and
/// surfaces later as a normal "required" validation error.
fn take(args: &[String], i: &mut usize) -> String {
    if *i + 1 < args.len() {
        *i += 1;
        args[*i].clone()
    } else {
        String::new()
    }
}

const USAGE: &str = "\
quote - compute a final purchase price

USAGE:
    quote --price <AMOUNT> [OPTIONS]

OPTIONS:
    -p, --price <AMOUNT>       Base price (required)
    -d, --discount <PERCENT>   Percentage discount, 0-99.99
        --shipping <AMOUNT>    Flat shipping fee
        --tax <PERCENT>        Tax rate, applied after shipping
        --coupon <AMOUNT>      Fixed coupon value (engages the coupon)
        --buy-x <COUNT>        Promotion: items bought per free batch
        --get-y <COUNT>        Promotion: free items per batch
        --item-price <AMOUNT>  Promotion: unit price of one item
        --spend <AMOUNT>       Spend & save: threshold on the base price
        --save <AMOUNT>        Spend & save: flat rebate
        --currency <CODE>      Display currency code (default: USD)
    -h, --help                 Show this help
";

fn main() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut form = PriceForm::default();
    let mut currency = String::from("USD");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--price" | "-p" => form.original_price = take(&args, &mut i),
            "--discount" | "-d" => form.discount_rate = take(&args, &mut i),
            "--shipping" => form.shipping_fee = take(&args, &mut i),
            "--tax" => form.tax_rate = take(&args, &mut i),
            "--coupon" => {
                form.use_coupon = true;
                form.coupon_value = take(&args, &mut i);
            }
            "--buy-x" => form.buy_x = take(&args, &mut i),
            "--get-y" => form.get_y = take(&args, &mut i),
            "--item-price" => form.item_price = take(&args, &mut i),
            "--spend" => form.spend_amount = take(&args, &mut i),
            "--save" => form.save_amount = take(&args, &mut i),
            "--currency" => currency = take(&args, &mut i),
            "--help" | "-h" => {
                print!("{USAGE}");
                return;
            }
            other => {
                error!("unknown argument: {other}");
                eprint!("{USAGE}");
                process::exit(2);
            }
        }
        i += 1;
    }

    let report = form.validate();
    if !report.is_valid() {
        for (field, err) in report.iter() {
            error!("{field}: {err}");
        }
        process::exit(2);
    }

    let result = form.evaluate();
    let sym = symbol_or_default(&currency);
    info!(
        "final price {sym}{}.{:02}, total savings {sym}{}.{:02}",
        result.final_price.dollars(),
        result.final_price.cents_part(),
        result.total_savings.dollars(),
        result.total_savings.cents_part(),
    );

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!("failed to serialize result: {err}");
            process::exit(1);
        }
    }
}
