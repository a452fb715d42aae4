//! Engine glue
//!
//! Owns the tagger, the preference snapshot, and the scheduler for one
//! view, and executes the scheduler's analysis/decoration commands against
//! the host editor. Timer commands are passed back to the caller: the host
//! runtime owns the actual timers and delivers the matching timer-fired
//! messages when they elapse.

use crate::commands::Cmd;
use crate::config::HighlightPrefs;
use crate::messages::Msg;
use crate::orchestrator;
use crate::publisher::{DecorationSet, HostEditor};
use crate::scheduler::Scheduler;
use crate::tagger::Tagger;

/// The per-view highlighting engine
pub struct Engine {
    tagger: Box<dyn Tagger>,
    prefs: HighlightPrefs,
    scheduler: Scheduler,
}

impl Engine {
    pub fn new(tagger: Box<dyn Tagger>, prefs: HighlightPrefs, enabled: bool) -> Self {
        Self {
            tagger,
            prefs,
            scheduler: Scheduler::new(enabled),
        }
    }

    pub fn prefs(&self) -> &HighlightPrefs {
        &self.prefs
    }

    /// Replace the preference snapshot (callers follow up with
    /// `Msg::PreferenceToggled` to re-analyze)
    pub fn set_prefs(&mut self, prefs: HighlightPrefs) {
        self.prefs = prefs;
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Feed one message through the scheduler and execute what can be
    /// executed here. Returns the timer commands the host runtime must
    /// arm, if any.
    pub fn handle<H: HostEditor>(&mut self, host: &mut H, msg: Msg) -> Option<Cmd> {
        let cmd = self.scheduler.update(msg)?;
        self.execute(host, cmd)
    }

    fn execute<H: HostEditor>(&mut self, host: &mut H, cmd: Cmd) -> Option<Cmd> {
        match cmd {
            Cmd::RunAnalysis => {
                self.run_analysis(host);
                None
            }
            Cmd::ClearDecorations => {
                host.replace_decorations(DecorationSet::empty());
                host.request_render();
                None
            }
            timer @ (Cmd::StartActivityTimer { .. } | Cmd::StartDebounceTimer { .. }) => {
                Some(timer)
            }
        }
    }

    /// One full tagging + resolution + publish cycle
    ///
    /// A tagger failure aborts the pass and leaves the previously
    /// published decorations untouched.
    fn run_analysis<H: HostEditor>(&mut self, host: &mut H) {
        let text = host.document_text();
        let caret = host.caret();

        let doc = match self.tagger.tag(&text) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::debug!("Tagger failed; keeping previous decorations: {}", e);
                return;
            }
        };

        let decorations = orchestrator::analyze(doc.as_ref(), &text, caret, &self.prefs);
        host.replace_decorations(DecorationSet::new(decorations));
        host.request_render();
    }
}
