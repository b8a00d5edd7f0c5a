//! Destructive command-line token parser.
//!
//! Raw process arguments classify into three token kinds: plain values,
//! `--name` options, and `-abc` flag clusters. A [`Session`] owns the
//! classified sequence; callers consume what they expect, one query at a
//! time, and each match removes its tokens from the pool. Whatever
//! survives is the remainder, ready to be reported as unrecognized input.
//!
//! There is no declaration model. Nothing is registered up front, values
//! stay strings, and the parser never rejects unknown input on its own;
//! deciding what leftovers mean is the caller's job.
//!
//! # Quick start
//!
//! ## Consume a command line
//!
//! ```
//! use argshift::Session;
//!
//! let mut args = Session::new(["build", "--target", "x86_64", "-vq", "src"]);
//!
//! assert_eq!(args.shift_argument(), Some("build".to_string()));
//! assert_eq!(args.shift_value_for_option("target")?, Some("x86_64".to_string()));
//! assert!(args.has_flag('v'));
//! assert!(args.has_flag('q'));
//! assert_eq!(args.shift_argument(), Some("src".to_string()));
//! assert!(args.is_empty());
//! # Ok::<(), argshift::ShiftError>(())
//! ```
//!
//! ## Report what was not consumed
//!
//! ```
//! use argshift::Session;
//!
//! let mut args = Session::new(["serve", "--port=8080", "--color"]);
//!
//! assert_eq!(args.shift_argument(), Some("serve".to_string()));
//! assert_eq!(args.shift_value_for_option("port")?, Some("8080".to_string()));
//! assert_eq!(args.remainder(), ["--color"]);
//! # Ok::<(), argshift::ShiftError>(())
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod lexer;
pub mod session;
pub mod token;

pub use lexer::tokenize;
pub use session::{Session, ShiftError, ShiftErrorKind};
pub use token::{Token, TokenClass};
