//! Example: Severity Fanout
//!
//! Splits one event stream across dedicated files with filter
//! combinators: error-or-fatal events in one file, audit events in
//! another.
//!
//! Run with:
//! ```bash
//! cargo run --example severity_fanout
//! ```

use std::fs::File;
use std::sync::Arc;

use fieldlog::{Config, Destination, Filter, Logger, Router, fields};

fn main() -> std::io::Result<()> {
    let dir = std::env::temp_dir();
    let errors_path = dir.join("severity_fanout.errors.log");
    let audit_path = dir.join("severity_fanout.audit.log");

    // ========================================================================
    // Routing
    // ========================================================================

    let router = Arc::new(Router::new());
    router.register(
        "errors",
        Destination::to(File::create(&errors_path)?).filter(Filter::or([
            Filter::eq("level", "error"),
            Filter::eq("level", "fatal"),
        ])),
    );
    router.register(
        "audit",
        Destination::to(File::create(&audit_path)?).filter(Filter::and([
            Filter::field_exists("audit"),
            Filter::not(Filter::eq("audit", false)),
        ])),
    );

    // ========================================================================
    // Logging
    // ========================================================================

    let logger = Logger::new(Config {
        name: Some("payments".to_owned()),
        sort_fields: true,
        router: Some(Arc::clone(&router)),
        ..Config::default()
    });

    logger.log(fields! { "level" => "info", "msg" => "charge accepted", "audit" => true });
    logger.log(fields! { "level" => "error", "msg" => "card declined", "code" => 402 });
    logger.log(fields! { "level" => "fatal", "msg" => "ledger out of sync", "audit" => true });
    logger.log(fields! { "level" => "debug", "msg" => "retry scheduled", "audit" => false });

    for (label, path) in [("errors", &errors_path), ("audit", &audit_path)] {
        println!("--- {label}: {} ---", path.display());
        print!("{}", std::fs::read_to_string(path)?);
    }
    Ok(())
}
