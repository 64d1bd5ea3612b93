//! View-controller state machine
//!
//! A single analysis session as seen by the dashboard:
//! Idle -> Analyzing -> Complete/Error, and Complete -> Optimizing -> Complete.
//! All state lives here so the transitions are testable off-browser; the view
//! layer only forwards user actions and renders whatever the session holds.

use crate::types::{MatchResult, OptimizationResult};

/// Dashboard status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Analyzing,
    Complete,
    Error,
    Optimizing,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Idle => "idle",
            AnalysisStatus::Analyzing => "analyzing",
            AnalysisStatus::Complete => "complete",
            AnalysisStatus::Error => "error",
            AnalysisStatus::Optimizing => "optimizing",
        }
    }
}

/// State of one analyze/optimize round trip
///
/// Results are never persisted; a new analysis discards both the previous
/// match result and any optimization derived from it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub status: AnalysisStatus,
    pub result: Option<MatchResult>,
    pub optimization: Option<OptimizationResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the check-match action is currently available.
    ///
    /// Requires both documents and no call already in flight. Error is not a
    /// terminal state: a fresh analysis may start from it.
    pub fn can_analyze(&self, has_resume: bool, has_jd: bool) -> bool {
        has_resume
            && has_jd
            && self.status != AnalysisStatus::Analyzing
            && self.status != AnalysisStatus::Optimizing
    }

    /// Start an analysis. Returns false when the guard rejects the action,
    /// in which case nothing changes.
    pub fn begin_analysis(&mut self, has_resume: bool, has_jd: bool) -> bool {
        if !self.can_analyze(has_resume, has_jd) {
            return false;
        }
        self.result = None;
        self.optimization = None;
        self.status = AnalysisStatus::Analyzing;
        true
    }

    pub fn complete_analysis(&mut self, result: MatchResult) {
        self.result = Some(result);
        self.status = AnalysisStatus::Complete;
    }

    /// No partial results survive a failed analysis.
    pub fn fail_analysis(&mut self) {
        self.result = None;
        self.optimization = None;
        self.status = AnalysisStatus::Error;
    }

    /// Whether the fix-it action is currently available.
    pub fn can_optimize(&self) -> bool {
        self.result.is_some() && self.status == AnalysisStatus::Complete
    }

    /// Start an optimization. Returns false when no match result exists or
    /// a call is already in flight.
    pub fn begin_optimization(&mut self) -> bool {
        if !self.can_optimize() {
            return false;
        }
        self.status = AnalysisStatus::Optimizing;
        true
    }

    pub fn complete_optimization(&mut self, optimization: OptimizationResult) {
        self.optimization = Some(optimization);
        self.status = AnalysisStatus::Complete;
    }

    /// A failed optimization reverts to Complete with the previous results
    /// untouched, so the user can simply retry.
    pub fn fail_optimization(&mut self) {
        self.status = AnalysisStatus::Complete;
    }
}
