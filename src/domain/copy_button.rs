use std::time::{Duration, Instant};

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const FAILED_LABEL: &str = "Failed";

/// Delay before a copy button returns to its default label.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1200);

/// Text currently shown on a copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyLabel::Idle => COPY_LABEL,
            CopyLabel::Copied => COPIED_LABEL,
            CopyLabel::Failed => FAILED_LABEL,
        }
    }
}

/// Label state of one card's copy button.
///
/// Each activation replaces the pending revert, so an earlier deadline can
/// never reset the label shown for a later click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyButton {
    label: CopyLabel,
    revert_at: Option<Instant>,
}

impl CopyButton {
    pub fn label(&self) -> CopyLabel {
        self.label
    }

    /// Show the outcome of a clipboard write and schedule the revert.
    pub fn record(&mut self, copied: bool, now: Instant, delay: Duration) -> CopyLabel {
        self.label = if copied { CopyLabel::Copied } else { CopyLabel::Failed };
        self.revert_at = Some(now + delay);
        self.label
    }

    /// Apply the pending revert if its deadline has passed. Returns whether the
    /// label changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(deadline) if deadline <= now => {
                self.label = CopyLabel::Idle;
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }
}
