//! Binary entry point: read flags, build the catalog, and hand it to the menu
//! loop on stdin/stdout. All state is dropped on exit.
use std::io;

use library_tracker::config::Config;
use library_tracker::{logging, Catalog, Session};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::from_args();
    logging::init(config.log_level);

    let catalog = if config.seed_samples {
        Catalog::with_sample_books()
    } else {
        Catalog::new()
    };
    info!(books = catalog.len(), "catalog ready");

    let stdin = io::stdin();
    let mut session = Session::new(catalog, stdin.lock(), io::stdout(), config.session);
    session.run()
}
