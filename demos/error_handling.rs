//! Demonstrate the two error kinds a value shift can produce.

use argshift::Session;

fn main() {
    // Option at the end of the line, no value to take.
    let mut args = Session::new(["--name"]);
    match args.shift_value_for_option("name") {
        Ok(value) => println!("Got value (unexpected): {value:?}"),
        Err(e) => {
            println!("Shift error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Subject: {}", e.subject);
        }
    }

    println!();

    // Value slot occupied by another option.
    let mut args = Session::new(["--name", "--other"]);
    match args.shift_value_for_option("name") {
        Ok(value) => println!("Got value (unexpected): {value:?}"),
        Err(e) => {
            println!("Shift error: {e}");
            println!("  Kind: {:?}", e.kind);
        }
    }
}
