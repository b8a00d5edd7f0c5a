//! Tokenize a command line and report everything left unconsumed.

use argshift::Session;

fn main() {
    let raw = ["serve", "--port=8080", "-dq", "--verbose", "extra.txt"];
    let mut args = Session::new(raw);

    // This dispatcher only understands `serve` and `--port`.
    let command = args.shift_argument();
    let port = args.shift_value_for_option("port").expect("port value");
    println!("command: {command:?}, port: {port:?}");

    if args.is_empty() {
        println!("all arguments consumed");
    } else {
        println!("unrecognized arguments: {args}");
        for token in args.tokens() {
            println!("  {} {token}", token.class());
        }
    }
}
