//! Your first string calculation.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use string_calculator::add;

fn main() -> Result<(), Box<dyn Error>> {
    for input in ["", "1", "1,2", "1\n2,3", "//;\n1;2", "//[***][%]\n1***2%3"] {
        println!("{:?} => {}", input, add(input)?);
    }

    // Negative numbers are rejected, and the error carries every one of them.
    match add("1,-2,3,-5") {
        Ok(sum) => println!("unexpected sum {}", sum),
        Err(err) => println!("{} (values: {:?})", err, err.negatives().unwrap_or_default()),
    }

    Ok(())
}
