use log::LevelFilter;

/// Initialize logging for the CLI.
///
/// Logs at `Info` by default and `Debug` when `debug_enabled` is set.
/// An explicit `RUST_LOG` takes precedence over both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A logger may already be installed (eg by a test harness)
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
