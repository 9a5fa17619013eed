use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs `env_logger` for tests, once per process. `RUST_LOG` overrides the default level.
pub fn init_test_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chained_hash_table", LevelFilter::Debug)
            .is_test(true)
            .parse_default_env();

        // Another test harness may have installed a logger already.
        let _ = builder.try_init();
    });
}
