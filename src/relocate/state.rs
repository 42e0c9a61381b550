//! Relocation run state tracking.

use std::path::PathBuf;

use crate::relocate::outcome::{FileOutcome, SkipReason};

/// A completed move.
#[derive(Debug, Clone)]
pub struct MovedFile {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// A failed move.
#[derive(Debug, Clone)]
pub struct FailedMove {
    pub from: PathBuf,
    pub message: String,
}

/// Per-run relocation state and statistics.
#[derive(Debug, Default)]
pub struct RelocateState {
    pub moved: Vec<MovedFile>,
    pub failures: Vec<FailedMove>,

    pub skipped_non_image: u64,
    pub skipped_outside_root: u64,
    pub skipped_no_product_segment: u64,
    pub skipped_unknown_product: u64,
}

impl RelocateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one discovered file.
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Moved { from, to } => self.moved.push(MovedFile {
                from: from.clone(),
                to: to.clone(),
            }),
            FileOutcome::Skipped { reason, .. } => self.record_skip(*reason),
            FileOutcome::Failed { from, message, .. } => self.failures.push(FailedMove {
                from: from.clone(),
                message: message.clone(),
            }),
        }
    }

    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::NotAnImage => self.skipped_non_image += 1,
            SkipReason::OutsideRoot => self.skipped_outside_root += 1,
            SkipReason::NoProductSegment => self.skipped_no_product_segment += 1,
            SkipReason::UnknownProduct => self.skipped_unknown_product += 1,
        }
    }

    pub fn moved_count(&self) -> u64 {
        self.moved.len() as u64
    }

    pub fn failed_count(&self) -> u64 {
        self.failures.len() as u64
    }

    pub fn total_skipped(&self) -> u64 {
        self.skipped_non_image
            + self.skipped_outside_root
            + self.skipped_no_product_segment
            + self.skipped_unknown_product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tallies_outcomes() {
        let mut state = RelocateState::new();

        state.record(&FileOutcome::Moved {
            from: PathBuf::from("product/P1/a.jpg"),
            to: PathBuf::from("RedShoe.jpg"),
        });
        state.record(&FileOutcome::Skipped {
            path: PathBuf::from("product/P1/readme.md"),
            reason: SkipReason::NotAnImage,
        });
        state.record(&FileOutcome::Skipped {
            path: PathBuf::from("product/GHOST/x.png"),
            reason: SkipReason::UnknownProduct,
        });
        state.record(&FileOutcome::Failed {
            from: PathBuf::from("product/P2/c.gif"),
            to: PathBuf::from("BlueHat.gif"),
            message: "permission denied".to_string(),
        });

        assert_eq!(state.moved_count(), 1);
        assert_eq!(state.failed_count(), 1);
        assert_eq!(state.total_skipped(), 2);
        assert_eq!(state.skipped_unknown_product, 1);
        assert_eq!(state.skipped_non_image, 1);
    }
}
