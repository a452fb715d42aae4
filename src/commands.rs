//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update. The engine executes analysis and decoration commands itself;
//! timer commands are returned to the host runtime, which owns the actual
//! timers and delivers the matching `Msg::*TimerFired` when they elapse.

/// Side effects requested by the scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// (Re)start the activity-quiet timer; any previously started activity
    /// timer is superseded and its fire must be ignored
    StartActivityTimer { generation: u64, delay_ms: u64 },
    /// (Re)start the analysis-debounce timer, superseding any prior one
    StartDebounceTimer { generation: u64, delay_ms: u64 },
    /// Run a full analysis pass against current text and caret, then
    /// publish the result
    RunAnalysis,
    /// Publish an empty decoration set now
    ClearDecorations,
}
