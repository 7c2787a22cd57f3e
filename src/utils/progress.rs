//! Build spinner that becomes a no-op when the `progress` feature is disabled

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "progress")]
use std::time::Duration;

/// Spinner shown on stderr while an index is being sorted
pub struct BuildSpinner {
    #[cfg(feature = "progress")]
    bar: ProgressBar,
}

impl BuildSpinner {
    /// Start spinning with `message`; hidden when `visible` is false
    pub fn start(message: impl Into<String>, visible: bool) -> Self {
        #[cfg(feature = "progress")]
        {
            let bar = if visible {
                ProgressBar::new_spinner()
            } else {
                ProgressBar::hidden()
            };
            if let Ok(style) =
                ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]")
            {
                bar.set_style(style);
            }
            bar.set_message(message.into());
            bar.enable_steady_tick(Duration::from_millis(100));
            Self { bar }
        }

        #[cfg(not(feature = "progress"))]
        {
            let _ = (message, visible);
            Self {}
        }
    }

    /// Stop spinning and clear the line
    pub fn finish(self) {
        #[cfg(feature = "progress")]
        self.bar.finish_and_clear();
    }
}
