//! Consume a realistic command line piece by piece.

use argshift::Session;

fn main() -> Result<(), argshift::ShiftError> {
    let raw = ["deploy", "--env", "staging", "-fn", "--tag=v1.2", "web", "worker"];
    let mut args = Session::new(raw);

    let command = args.shift_argument();
    println!("command: {command:?}");

    let env = args.shift_value_for_option("env")?;
    println!("env:     {env:?}");

    let tag = args.shift_value_for_option("tag")?;
    println!("tag:     {tag:?}");

    println!("force:   {}", args.has_flag('f'));
    println!("dry-run: {}", args.has_flag('n'));

    while let Some(service) = args.shift_argument() {
        println!("service: {service}");
    }

    println!("leftover: {:?}", args.remainder());
    Ok(())
}
