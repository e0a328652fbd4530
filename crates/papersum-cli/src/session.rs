//! Client request lifecycle: Idle → Loading → Success | Error.

use papersum_common::PaperSummary;
use thiserror::Error;

use crate::render::ToastKind;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success(PaperSummary),
    Error(ToastKind),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("a request is already in flight")]
pub struct Busy;

/// At most one request in flight per session.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Submit is enabled only when idle-ish and some input exists.
    pub fn can_submit(&self, has_input: bool) -> bool {
        has_input && !self.is_loading()
    }

    /// Enter Loading, dropping any previous result.
    pub fn begin(&mut self) -> Result<(), Busy> {
        if self.is_loading() {
            return Err(Busy);
        }
        self.phase = Phase::Loading;
        Ok(())
    }

    pub fn succeed(&mut self, result: PaperSummary) {
        self.phase = Phase::Success(result);
    }

    pub fn fail(&mut self, kind: ToastKind) {
        self.phase = Phase::Error(kind);
    }
}
