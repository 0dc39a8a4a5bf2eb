//! Exit codes and process-wide setup shared by the CLI

/// Retained line count is at most one
pub const EXIT_SUCCESS: i32 = 0;
/// Unsuppressed warnings remain in the report
pub const EXIT_WARNINGS: i32 = 1;
/// A fatal error aborted the run; callers only tell success from failure
pub const EXIT_ERROR: i32 = 1;

/// Initialize `env_logger` on stderr
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown unless
/// `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
