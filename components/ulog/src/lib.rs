//! Log initialization for unit tests of the workspace crates.

#[cfg(feature = "env")]
use std::io::Write;

/// Filter applied when `RUST_LOG` is not set.
#[cfg(feature = "env")]
const DEFAULT_FILTER: &str = "debug";

/// Route `log` records to the test output, tolerating repeated calls from multiple tests.
#[cfg(feature = "env")]
pub fn try_init_log() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .is_test(true)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {} - {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .try_init();
}
