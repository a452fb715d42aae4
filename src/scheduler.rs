//! Editing-state scheduler
//!
//! A small state machine deciding when re-analysis may run versus must be
//! suppressed. Two independent timers drive it: a 3000 ms activity-quiet
//! timer (detects that the user stopped typing) and a 300 ms debounce
//! timer (batches the actual tagging work once idle). Timers live in the
//! host runtime; cancellation works by generation counter - bumping the
//! counter makes any outstanding fire stale, the same way a document
//! revision check discards stale parse results.

use crate::commands::Cmd;
use crate::messages::Msg;

/// Milliseconds of typing silence before the user counts as idle again
pub const ACTIVITY_QUIET_MS: u64 = 3000;

/// Milliseconds to batch analysis work after going idle
pub const ANALYSIS_DEBOUNCE_MS: u64 = 300;

/// Whether the user is currently typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingState {
    Idle,
    ActivelyEditing,
}

/// Per-view scheduling state
///
/// Owned exclusively by one engine instance; mutated only by document
/// change notifications and timer callbacks.
#[derive(Debug)]
pub struct Scheduler {
    state: EditingState,
    enabled: bool,
    /// Whether any analysis pass has ever run (first enable analyzes immediately)
    has_analyzed: bool,
    activity_generation: u64,
    debounce_generation: u64,
}

impl Scheduler {
    pub fn new(enabled: bool) -> Self {
        Self {
            state: EditingState::Idle,
            enabled,
            has_analyzed: false,
            activity_generation: 0,
            debounce_generation: 0,
        }
    }

    pub fn state(&self) -> EditingState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Advance the state machine, returning the side effects to perform
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        match msg {
            Msg::DocumentChanged { text_changed } => {
                if !self.enabled || !text_changed {
                    return None;
                }

                self.state = EditingState::ActivelyEditing;
                // Restart the quiet window. A pending debounce stays live:
                // its fire lands in ActivelyEditing and clears decorations
                // instead of analyzing mid-edit text
                self.activity_generation += 1;

                tracing::debug!(
                    "Document changed; restarting activity timer (generation {})",
                    self.activity_generation
                );

                Some(Cmd::StartActivityTimer {
                    generation: self.activity_generation,
                    delay_ms: ACTIVITY_QUIET_MS,
                })
            }

            Msg::ActivityTimerFired { generation } => {
                if !self.enabled || generation != self.activity_generation {
                    tracing::debug!(
                        "Ignoring stale activity timer (generation {} != {})",
                        generation,
                        self.activity_generation
                    );
                    return None;
                }

                self.state = EditingState::Idle;
                self.debounce_generation += 1;

                Some(Cmd::StartDebounceTimer {
                    generation: self.debounce_generation,
                    delay_ms: ANALYSIS_DEBOUNCE_MS,
                })
            }

            Msg::DebounceTimerFired { generation } => {
                if !self.enabled || generation != self.debounce_generation {
                    return None;
                }

                if self.state == EditingState::ActivelyEditing {
                    // The user started typing again; clearing beats stale
                    // highlights flickering under the cursor
                    return Some(Cmd::ClearDecorations);
                }

                self.has_analyzed = true;
                Some(Cmd::RunAnalysis)
            }

            Msg::SetEnabled(enabled) => {
                if enabled {
                    self.enabled = true;
                    if !self.has_analyzed {
                        // First-ever enable: analyze right away, no debounce
                        self.has_analyzed = true;
                        return Some(Cmd::RunAnalysis);
                    }
                    None
                } else {
                    self.enabled = false;
                    self.cancel_timers();
                    Some(Cmd::ClearDecorations)
                }
            }

            Msg::PreferenceToggled => {
                if !self.enabled {
                    return None;
                }
                // External toggles bypass debouncing entirely
                self.has_analyzed = true;
                Some(Cmd::RunAnalysis)
            }

            Msg::ViewDestroyed => {
                self.enabled = false;
                self.cancel_timers();
                None
            }
        }
    }

    /// Invalidate every outstanding timer fire
    fn cancel_timers(&mut self) {
        self.activity_generation += 1;
        self.debounce_generation += 1;
    }
}
