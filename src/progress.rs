//! Spinner shown while waiting on the network.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a stderr spinner with a message, or `None` if disabled.
///
/// Nothing is drawn when stderr is not a terminal.
pub fn create_spinner(message: &str, enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Remove a spinner from the screen.
pub fn finish_spinner(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}
