//! Example: Filtered Stdout
//!
//! Routes events to stdout while keeping debug-level noise out, and
//! mirrors everything to a log file. Also shows runtime re-registration:
//! the stdout filter is dropped mid-run.
//!
//! Run with:
//! ```bash
//! cargo run --example filtered_stdout
//! ```

use std::sync::Arc;

use fieldlog::{
    Config, Destination, FileLineMode, Filter, Logger, Router, TimestampFormat, fields,
};

fn main() -> std::io::Result<()> {
    // ========================================================================
    // Routing
    // ========================================================================

    let log_path = std::env::temp_dir().join("filtered_stdout.log");
    let log_file = std::fs::File::create(&log_path)?;

    let router = Arc::new(Router::new());
    router.register(
        "stdout",
        Destination::to(std::io::stdout()).filter(Filter::not(Filter::eq("level", "debug"))),
    );
    router.register("file", Destination::to(log_file));
    router.on_error(|id, err| eprintln!("destination {id} failed: {err}"));

    // ========================================================================
    // Logging
    // ========================================================================

    let logger = Logger::new(Config {
        name: Some("demo".to_owned()),
        timestamp: Some(TimestampFormat::Rfc3339),
        utc: true,
        file_line: FileLineMode::Short,
        sort_fields: false,
        router: Some(Arc::clone(&router)),
    });

    logger.log(fields! { "level" => "info", "msg" => "service started" });
    // Filtered off stdout, still lands in the file
    logger.log(fields! { "level" => "debug", "msg" => "cache warmed" });
    logger.log(fields! { "level" => "error", "msg" => "upstream timed out", "attempt" => 3 });

    // Re-register stdout without the filter; debug events now pass through
    router.register("stdout", Destination::to(std::io::stdout()));
    logger.log(fields! { "level" => "debug", "msg" => "now visible" });

    println!("--- contents of {} ---", log_path.display());
    print!("{}", std::fs::read_to_string(&log_path)?);
    Ok(())
}
