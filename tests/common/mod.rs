#![allow(dead_code)]

pub mod mock_blockfrost;

use std::sync::LazyLock;

static INIT_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();
});

pub fn initialize_logging() {
    LazyLock::force(&INIT_LOGGING);
}
