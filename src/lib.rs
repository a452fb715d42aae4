//! poslight - live part-of-speech highlighting for prose editors
//!
//! This crate provides the analysis pipeline and scheduling state machine
//! for decorating prose with grammatical-category highlights. It follows
//! the Elm Architecture pattern: state changes flow through messages and
//! side effects are described as commands for the host runtime.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod engine;
pub mod exclusion;
pub mod messages;
pub mod orchestrator;
pub mod publisher;
pub mod resolver;
pub mod scheduler;
pub mod tagger;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{HighlightPrefs, PosConfig, PosTag, POS_CONFIGS};
pub use engine::Engine;
pub use messages::Msg;
pub use orchestrator::MatchRange;
pub use publisher::{Decoration, DecorationSet, HostEditor};
pub use scheduler::{EditingState, Scheduler};
pub use tagger::{MatchOffset, StaticTagger, TagMatch, TaggedDocument, Tagger};
pub use view::ActiveView;
