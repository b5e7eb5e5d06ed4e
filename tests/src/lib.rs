//! Shared helpers for the integration tests

use std::sync::Once;

use calc::{calculate, CalcError, EvalConfig, ErrorKind};

static INIT: Once = Once::new();

/// Initialize the logger for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    });
}

/// Evaluate with the default configuration
pub fn eval(expression: &str) -> Result<f64, CalcError> {
    init_test_logger();
    calculate(expression, &EvalConfig::default())
}

/// Kind of the error `expression` fails with, if any
pub fn error_kind(expression: &str) -> Option<ErrorKind> {
    eval(expression).err().map(|e| e.kind())
}
