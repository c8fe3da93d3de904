//! Diagnostics go to stderr through `tracing-subscriber` so they never mix
//! with the menu printed on stdout.

use std::io;

use tracing::Level;

/// Install the global subscriber. A second call is a no-op, which lets tests
/// and embedders initialise freely.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init(Level::WARN);
        init(Level::DEBUG);
        tracing::warn!("still logging after re-init");
    }
}
