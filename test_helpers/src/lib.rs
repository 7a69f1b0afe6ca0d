//! Utilities shared by the workspace's test suites.

#![warn(missing_docs)]

// Workaround for "unused crate" lint false positives.
use workspace_hack as _;

use std::sync::Once;

use tracing_log::LogTracer;
use tracing_subscriber::{fmt, EnvFilter};

pub mod tracing;

static LOG_SETUP: Once = Once::new();

/// Start logging if the `RUST_LOG` environment variable is set (possibly
/// via a `.env` file), otherwise leave logging disabled.
///
/// Safe to call from every test; the subscriber is installed at most once.
pub fn maybe_start_logging() {
    dotenvy::dotenv().ok();

    if std::env::var("RUST_LOG").is_ok() {
        start_logging()
    }
}

/// Install an `RUST_LOG`-filtered fmt subscriber writing to the test
/// writer, and bridge `log` crate records into tracing.
pub fn start_logging() {
    LOG_SETUP.call_once(|| {
        LogTracer::init().expect("tracing-log bridge installed once");

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();

        observability_deps::tracing::subscriber::set_global_default(subscriber)
            .expect("subscriber installed once");
    })
}

/// Assert that `actual` (anything string-convertible) contains the
/// `expected` substring, with a readable panic message on failure.
#[macro_export]
macro_rules! assert_contains {
    ($ACTUAL: expr, $EXPECTED: expr) => {
        let actual_value: String = $ACTUAL.to_string();
        let expected_value: String = $EXPECTED.to_string();
        assert!(
            actual_value.contains(&expected_value),
            "Can not find expected in actual.\n\nExpected:\n{}\n\nActual:\n{}",
            expected_value,
            actual_value
        );
    };
}
