#![allow(dead_code)]

use argshift::Session;

/// Build a session from string literals.
pub fn session(raw: &[&str]) -> Session {
    Session::new(raw.iter().copied())
}

/// Assert that the session's remainder renders exactly to `expected`.
pub fn assert_remainder(session: &Session, expected: &[&str]) {
    assert_eq!(
        session.remainder(),
        expected,
        "remainder mismatch, session renders as: {session}"
    );
}

/// Assert that tokenizing `input` and rendering every token back
/// reproduces `input` exactly.
pub fn assert_render_roundtrip(input: &[&str]) {
    let parsed = session(input);
    assert_eq!(
        parsed.remainder(),
        input,
        "render round-trip mismatch:\n--- input ---\n{input:?}\n--- rendered ---\n{:?}",
        parsed.remainder()
    );
}
