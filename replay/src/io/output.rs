use serde::{Deserialize, Serialize};
use starform::engine::{IgnoreReason, RejectReason, Status};
use starform::io::ext_repr::ExtSession;
use starform::session::TickReport;

use crate::config::ReplayConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReplayOutput {
    pub config: ReplayConfig,
    pub session: ExtSession,
    pub stats: ReplayStats,
}

/// Outcome counts over all operations of a replay
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub n_ticks: u64,
    pub applied: usize,
    pub rejected_out_of_bounds: usize,
    pub rejected_overflow: usize,
    pub ignored_malformed: usize,
    pub ignored_invalid_axis: usize,
    pub ignored_text_mode: usize,
}

impl ReplayStats {
    pub fn register(&mut self, report: &TickReport) {
        for status in report.statuses() {
            match status {
                Status::Applied => self.applied += 1,
                Status::Rejected(RejectReason::OutOfBounds) => self.rejected_out_of_bounds += 1,
                Status::Rejected(RejectReason::Overflow) => self.rejected_overflow += 1,
                Status::Ignored(IgnoreReason::MalformedInput) => self.ignored_malformed += 1,
                Status::Ignored(IgnoreReason::InvalidAxis) => self.ignored_invalid_axis += 1,
                Status::Ignored(IgnoreReason::NotInTextMode) => self.ignored_text_mode += 1,
            }
        }
        self.n_ticks += 1;
    }

    pub fn n_operations(&self) -> usize {
        self.applied
            + self.rejected_out_of_bounds
            + self.rejected_overflow
            + self.ignored_malformed
            + self.ignored_invalid_axis
            + self.ignored_text_mode
    }
}
