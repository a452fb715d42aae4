//! Active-view handle
//!
//! External triggers (a preference toggle from the settings surface) need
//! to reach whichever view currently hosts the engine. Instead of a
//! module-level mutable singleton, the binding is an explicit handle with
//! an attach/detach lifecycle; anything arriving after detach is a no-op.

use crate::commands::Cmd;
use crate::engine::Engine;
use crate::messages::Msg;
use crate::publisher::HostEditor;

/// Binding of one engine to one host editor, or nothing
pub struct ActiveView<H: HostEditor> {
    inner: Option<Binding<H>>,
}

struct Binding<H> {
    engine: Engine,
    host: H,
}

impl<H: HostEditor> Default for ActiveView<H> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<H: HostEditor> ActiveView<H> {
    pub fn detached() -> Self {
        Self { inner: None }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.is_some()
    }

    /// Bind an engine to a host; replaces (and tears down) any prior binding
    pub fn attach(&mut self, engine: Engine, host: H) {
        if self.inner.is_some() {
            tracing::warn!("Attaching over an existing view binding; detaching the old one");
            self.detach();
        }
        self.inner = Some(Binding { engine, host });
    }

    /// Tear down the binding, cancelling every pending timer
    ///
    /// Returns the parts so the caller can keep the host alive.
    pub fn detach(&mut self) -> Option<(Engine, H)> {
        let mut binding = self.inner.take()?;
        binding.engine.handle(&mut binding.host, Msg::ViewDestroyed);
        Some((binding.engine, binding.host))
    }

    /// Route a message to the attached engine; no-op when detached
    pub fn handle(&mut self, msg: Msg) -> Option<Cmd> {
        let Some(binding) = self.inner.as_mut() else {
            tracing::debug!("Dropping {:?} for detached view", msg);
            return None;
        };
        binding.engine.handle(&mut binding.host, msg)
    }

    pub fn engine(&self) -> Option<&Engine> {
        self.inner.as_ref().map(|b| &b.engine)
    }

    pub fn engine_mut(&mut self) -> Option<&mut Engine> {
        self.inner.as_mut().map(|b| &mut b.engine)
    }

    pub fn host(&self) -> Option<&H> {
        self.inner.as_ref().map(|b| &b.host)
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.inner.as_mut().map(|b| &mut b.host)
    }
}
