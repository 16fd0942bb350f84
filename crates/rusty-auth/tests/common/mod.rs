#![allow(dead_code)]

use rusty_auth::{Field, FormKind, AuthForm};

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Fill every listed field
pub fn fill<K: FormKind>(form: &mut AuthForm<K>, values: &[(Field, &str)]) {
    for (field, value) in values {
        form.set_field(*field, *value).unwrap();
    }
}

/// Snapshot of all values in field order
pub fn values<K: FormKind>(form: &AuthForm<K>) -> Vec<(Field, String)> {
    form.state()
        .values()
        .map(|(field, value)| (field, value.to_string()))
        .collect()
}
