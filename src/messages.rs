//! Message types for the Elm-style architecture
//!
//! All scheduler state changes flow through these message types. Timer
//! firings carry the generation they were started with, so a fire that
//! arrives after its timer was superseded is recognizably stale.

/// Events driving the editing-state scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// The host editor reported a document update
    DocumentChanged {
        /// Whether the update actually changed text (cursor-only updates don't)
        text_changed: bool,
    },
    /// The 3000 ms activity-quiet timer fired
    ActivityTimerFired { generation: u64 },
    /// The 300 ms analysis-debounce timer fired
    DebounceTimerFired { generation: u64 },
    /// Highlighting was switched on or off as a whole
    SetEnabled(bool),
    /// A per-category preference changed; re-analyze immediately
    PreferenceToggled,
    /// The hosting view is going away; cancel everything
    ViewDestroyed,
}
