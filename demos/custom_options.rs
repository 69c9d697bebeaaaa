//! Customizing the calculator with CalculatorOptions.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use string_calculator::{CalculatorOptions, Delimiters, StringCalculator};

fn main() -> Result<(), Box<dyn Error>> {
    // Tab-separated numbers
    println!("Tab delimiter:");
    let tab = StringCalculator::with_options(
        CalculatorOptions::new().with_delimiters(Delimiters::new(["\t", "\n"])),
    );
    println!("{}\n", tab.add("1\t2\t3\n4\t5")?);

    // Headers switched off: `//` is just text
    println!("Headers disabled:");
    let strict = StringCalculator::with_options(CalculatorOptions::new().with_custom_delimiters(false));
    match strict.add("//;\n1;2") {
        Ok(sum) => println!("{}\n", sum),
        Err(err) => println!("{}\n", err),
    }

    // Options loaded from JSON
    println!("Options from JSON:");
    let options: CalculatorOptions = serde_json::from_str(r#"{"delimiters": ["|"]}"#)?;
    let piped = StringCalculator::with_options(options);
    println!("{}", piped.add("10|20|30")?);

    Ok(())
}
