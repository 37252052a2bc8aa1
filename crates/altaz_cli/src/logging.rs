use flexi_logger::{DeferredNow, FlexiLoggerError, Logger, LoggerHandle, Record};

/// Start logging to stderr.
///
/// `RUST_LOG` wins over the level picked from `-v` flags. The returned
/// handle has to live until the program exits.
pub fn start_logger(verbosity: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(stderr_format)
        .start()
}

fn stderr_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] {}: {}",
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}
