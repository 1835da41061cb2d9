//! Usage tour of the password engine.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate
//! ```

use randpass_core::{Overrides, PasswordError};
use serde_json::json;

fn main() -> Result<(), PasswordError> {
    env_logger::init();

    // Default parameters: ten 12-character passwords
    for pass in randpass_core::generate(None)? {
        println!("default    {pass}");
    }

    // Hex-only output by pointing every class at the same pool
    let hex = Overrides::from(json!({
        "quantity": 5,
        "password_length": 32,
        "uppercase_pool": "abcdef0123456789",
        "lowercase_pool": "abcdef0123456789",
        "digit_pool": "abcdef0123456789",
        "symbol_pool": "abcdef0123456789",
    }));
    for pass in randpass_core::generate(Some(&hex))? {
        println!("hex        {pass}");
    }

    // Short handles with digits in place of symbols
    let handles = Overrides::new()
        .set("password_length", 8)
        .set("quantity", 3)
        .set("uppercase_pool", "abcdefghijklmnopqrstuvwxyz")
        .set("symbol_pool", "1234567890");
    for pass in randpass_core::generate(Some(&handles))? {
        println!("handle     {pass}");
    }

    println!("single     {}", randpass_core::password(None)?);
    Ok(())
}
