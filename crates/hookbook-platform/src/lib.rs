//! Platform runner (headless terminal)
//!
//! `App` owns a `Scheduler` and the root builder. It composes frames, routes
//! clicks and text input to hit regions, drives timers and tasks until the
//! tree is idle, and paints frames into a terminal `Scene`.

mod common;

pub mod backend;
pub mod loader;
pub mod paint;
pub mod session;

pub use backend::{AnsiBackend, PlainBackend};
pub use loader::DirLoader;
pub use paint::paint;
pub use session::{Command, run_terminal_session};

use std::rc::Rc;
use std::time::Duration;

use hookbook_core::*;

use crate::common::{field_text, hit_by_target};

/// Upper bound on pump/compose rounds per `pump()`; a tree that keeps asking
/// for frames past this is reported instead of spinning forever.
pub const MAX_SETTLE_PASSES: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("no element matches '{0}'")]
    NoTarget(String),
    #[error("'{0}' cannot be clicked")]
    NotClickable(String),
    #[error("'{0}' is not a text field")]
    NotTextField(String),
    #[error("still asking for frames after {0} passes")]
    Unsettled(usize),
    #[error("bad command: {0}")]
    BadCommand(String),
}

pub struct App {
    sched: Scheduler,
    root: Box<dyn FnMut(&mut Scheduler) -> View>,
    frame: Option<Frame>,
    clock: Option<ManualClock>,
}

impl App {
    /// Runs against the system clock.
    pub fn new(root: impl FnMut(&mut Scheduler) -> View + 'static) -> Self {
        Self {
            sched: Scheduler::new(),
            root: Box::new(root),
            frame: None,
            clock: None,
        }
    }

    /// Runs against a `ManualClock`; time only moves through `advance`.
    pub fn with_manual_clock(root: impl FnMut(&mut Scheduler) -> View + 'static) -> Self {
        let clock = ManualClock::new();
        Self {
            sched: Scheduler::with_clock(Rc::new(clock.clone())),
            root: Box::new(root),
            frame: None,
            clock: Some(clock),
        }
    }

    pub fn set_asset_loader(&mut self, loader: Rc<dyn AssetLoader>) {
        self.sched.set_asset_loader(loader);
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.sched
    }

    /// Compose a new frame unconditionally.
    pub fn frame(&mut self) -> &Frame {
        let root = &mut self.root;
        let frame = self.sched.compose(|s| root(s));
        self.frame.insert(frame)
    }

    /// Compose only if nothing was composed yet or state changed since.
    pub fn render_if_needed(&mut self) -> bool {
        if self.frame.is_none() || self.sched.needs_frame() {
            self.frame();
            true
        } else {
            false
        }
    }

    /// Run tasks, fire due timers and recompose until the tree is idle.
    /// Returns how many frames were composed.
    pub fn pump(&mut self) -> Result<usize, PlatformError> {
        let mut composed = 0;
        for _ in 0..MAX_SETTLE_PASSES {
            self.sched.pump_tasks();
            self.sched.advance_timers();
            if !self.render_if_needed() {
                return Ok(composed);
            }
            composed += 1;
        }
        if self.sched.needs_frame() {
            log::warn!("tree did not settle after {MAX_SETTLE_PASSES} passes");
            return Err(PlatformError::Unsettled(MAX_SETTLE_PASSES));
        }
        Ok(composed)
    }

    fn ensure_frame(&mut self) -> &Frame {
        let Self {
            sched, root, frame, ..
        } = self;
        frame.get_or_insert_with(|| sched.compose(|s| root(s)))
    }

    fn focus(&mut self, hit: &HitRegion) {
        self.sched.focus(hit);
        if let Some(frame) = &mut self.frame {
            frame.focused = Some(hit.id);
        }
    }

    /// Click the button whose test tag (or, failing that, label) is `target`.
    /// Clicking a text field focuses it.
    pub fn click(&mut self, target: &str) -> Result<(), PlatformError> {
        let hit = hit_by_target(self.ensure_frame(), target)
            .cloned()
            .ok_or_else(|| PlatformError::NoTarget(target.to_string()))?;
        log::debug!("click '{target}' -> view {}", hit.id);

        if hit.focusable {
            self.focus(&hit);
        }
        match (&hit.on_click, hit.role) {
            (Some(cb), _) => {
                let cb = cb.clone();
                self.sched.dispatch(|| cb());
            }
            (None, Role::TextField) => {}
            (None, _) => return Err(PlatformError::NotClickable(target.to_string())),
        }
        self.pump().map(|_| ())
    }

    /// Replace the text of the field tagged `target` with `text`.
    pub fn input(&mut self, target: &str, text: &str) -> Result<(), PlatformError> {
        let hit = self.text_field(target)?;
        self.focus(&hit);
        if let Some(node_ref) = &hit.node_ref {
            // Uncontrolled: the element owns its text, nobody is told.
            node_ref.set_value(text);
        } else if let Some(cb) = &hit.on_text_change {
            let cb = cb.clone();
            let text = text.to_string();
            self.sched.dispatch(move || cb(text));
        } else {
            log::debug!("text field '{target}' ignores input");
        }
        self.pump().map(|_| ())
    }

    /// Press Enter in the field tagged `target`.
    pub fn submit(&mut self, target: &str) -> Result<(), PlatformError> {
        let hit = self.text_field(target)?;
        let text = self
            .frame
            .as_ref()
            .and_then(|f| f.find(hit.id))
            .map(field_text)
            .unwrap_or_default();
        if let Some(cb) = &hit.on_text_submit {
            let cb = cb.clone();
            self.sched.dispatch(move || cb(text));
        }
        self.pump().map(|_| ())
    }

    fn text_field(&mut self, target: &str) -> Result<HitRegion, PlatformError> {
        let hit = hit_by_target(self.ensure_frame(), target)
            .cloned()
            .ok_or_else(|| PlatformError::NoTarget(target.to_string()))?;
        if hit.role != Role::TextField {
            return Err(PlatformError::NotTextField(target.to_string()));
        }
        Ok(hit)
    }

    /// Let `by` pass. A manual clock jumps; the system clock is slept on.
    pub fn advance(&mut self, by: Duration) -> Result<usize, PlatformError> {
        match &self.clock {
            Some(clock) => clock.advance(by),
            None => std::thread::sleep(by),
        }
        self.pump()
    }

    /// Tear the tree down. The next `frame` mounts from scratch.
    pub fn unmount(&mut self) {
        self.sched.unmount();
        self.frame = None;
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&View> {
        self.frame.as_ref()?.find_by_tag(tag)
    }

    /// Text content of the view tagged `tag` in the current frame.
    pub fn text_of(&self, tag: &str) -> Option<String> {
        self.find_by_tag(tag).map(|v| v.text_content())
    }

    /// Current text of the field tagged `tag`, controlled or not.
    pub fn field_value(&self, tag: &str) -> Option<String> {
        self.find_by_tag(tag).map(field_text)
    }

    pub fn focused_tag(&self) -> Option<String> {
        let frame = self.frame.as_ref()?;
        let id = frame.focused?;
        frame.find(id)?.modifier.test_tag.clone()
    }

    /// Paint the current frame (composing one first if needed).
    pub fn scene(&mut self) -> Scene {
        let frame = self.ensure_frame();
        paint(&frame.root, frame.focused)
    }

    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> std::io::Result<()> {
        let scene = self.scene();
        backend.frame(&scene)
    }
}
