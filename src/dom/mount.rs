//! Wiring page lifecycle events to layout passes
//!
//! A mounted grid runs one pass immediately, one more once every image has
//! settled, and one after each burst of window resizes. Each pass reads the
//! DOM afresh and recomputes everything.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use super::grid::{read_grid, GridSnapshot};
use super::renderer::{apply_layout, RevealMode};
use crate::error::LayoutError;
use crate::layout::{compute_layout, MasonryLayout};
use crate::lifecycle::{Debouncer, ReadinessChange, ReadinessTracker};
use crate::models::{BreakpointBasis, GridConfig, LayoutConfig};

struct GridState {
    config: GridConfig,
    debouncer: Debouncer,
    readiness: ReadinessTracker,
    last_layout: Option<MasonryLayout>,
    /// Passes that computed and applied a layout
    pass_count: u64,
}

/// An event listener registered on some target, removed on detach
struct Listener {
    target: EventTarget,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        events: &'static [&'static str],
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, LayoutError> {
        for event in events {
            target
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .map_err(dom_error)?;
        }
        Ok(Self {
            target,
            events,
            callback,
        })
    }

    fn detach(&self) {
        for event in self.events {
            if let Err(e) = self
                .target
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }
    }
}

/// A grid mounted on the page
pub struct GridHandle {
    state: Rc<RefCell<GridState>>,
    image_listeners: Vec<Listener>,
    resize_listener: Option<Listener>,
}

impl GridHandle {
    /// Lay out the grid now and start reacting to image loads and resizes
    pub fn mount(config: GridConfig) -> Result<Self, LayoutError> {
        config.validate()?;

        let state = Rc::new(RefCell::new(GridState {
            debouncer: Debouncer::new(config.debounce_ms),
            readiness: ReadinessTracker::new(0),
            last_layout: None,
            pass_count: 0,
            config,
        }));

        let mut handle = Self {
            state,
            image_listeners: Vec::new(),
            resize_listener: None,
        };

        run_pass(&handle.state, RevealMode::Initial);
        handle.watch_images()?;
        handle.watch_resize()?;

        log::info!(
            "Masonry grid '{}' mounted",
            handle.state.borrow().config.container_id
        );
        Ok(handle)
    }

    /// Run a layout pass now
    pub fn layout(&self) -> Option<MasonryLayout> {
        run_pass(&self.state, RevealMode::Immediate)
    }

    /// Pick up a changed item set: lay out again and wait for the new images
    pub fn refresh(&mut self) -> Result<Option<MasonryLayout>, LayoutError> {
        let layout = run_pass(&self.state, RevealMode::Immediate);
        self.watch_images()?;
        Ok(layout)
    }

    pub fn last_layout(&self) -> Option<MasonryLayout> {
        self.state.borrow().last_layout.clone()
    }

    /// Number of layout passes run since mount
    pub fn pass_count(&self) -> u64 {
        self.state.borrow().pass_count
    }

    pub fn config(&self) -> GridConfig {
        self.state.borrow().config.clone()
    }

    /// Remove every listener and drop any pending resize pass
    pub fn detach(&mut self) {
        for listener in self.image_listeners.drain(..) {
            listener.detach();
        }
        if let Some(listener) = self.resize_listener.take() {
            listener.detach();
        }
        let mut state = self.state.borrow_mut();
        if state.debouncer.is_pending() {
            log::debug!("Dropping pending resize layout");
        }
        state.debouncer.cancel();
    }

    /// Track readiness of every image currently in the grid
    ///
    /// Items that are already decoded, or have no image at all, count as
    /// ready straight away. If nothing is left outstanding the post-load pass
    /// runs immediately.
    fn watch_images(&mut self) -> Result<(), LayoutError> {
        for listener in self.image_listeners.drain(..) {
            listener.detach();
        }

        let Some(snapshot) = current_snapshot(&self.state) else {
            self.state.borrow_mut().readiness = ReadinessTracker::new(0);
            return Ok(());
        };

        let mut readiness = ReadinessTracker::new(snapshot.items.len());
        for (index, image) in snapshot.images.iter().enumerate() {
            match image {
                Some(image) if !image.complete() => {
                    let state = Rc::clone(&self.state);
                    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                        on_item_settled(&state, index);
                    });
                    self.image_listeners.push(Listener::attach(
                        image.clone().into(),
                        &["load", "error"],
                        callback,
                    )?);
                }
                _ => readiness.register_ready(index),
            }
        }

        let all_ready = readiness.is_all_ready();
        log::debug!(
            "Waiting on {} of {} images",
            readiness.pending(),
            readiness.total()
        );
        self.state.borrow_mut().readiness = readiness;

        if all_ready {
            run_pass(&self.state, RevealMode::Immediate);
        }
        Ok(())
    }

    fn watch_resize(&mut self) -> Result<(), LayoutError> {
        let window = web_sys::window().ok_or_else(no_window)?;
        let state = Rc::clone(&self.state);
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            schedule_resize_pass(&state);
        });
        self.resize_listener = Some(Listener::attach(window.into(), &["resize"], callback)?);
        Ok(())
    }
}

impl Drop for GridHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

fn on_item_settled(state: &Rc<RefCell<GridState>>, index: usize) {
    let change = state.borrow_mut().readiness.mark_settled(index);
    match change {
        ReadinessChange::AllReady => {
            log::debug!("All images settled, running layout");
            run_pass(state, RevealMode::Immediate);
        }
        ReadinessChange::Pending(remaining) => {
            log::trace!("Image {} settled, {} remaining", index, remaining);
        }
        ReadinessChange::Unchanged => {}
    }
}

/// Queue a layout pass after the quiet period
///
/// Superseded timers still fire but find their ticket stale, which keeps each
/// one-shot callback called exactly once.
fn schedule_resize_pass(state: &Rc<RefCell<GridState>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let (ticket, quiet_period_ms) = {
        let mut state = state.borrow_mut();
        let ticket = state.debouncer.schedule();
        (ticket, state.debouncer.quiet_period_ms())
    };

    let timer_state = Rc::clone(state);
    let callback = Closure::once_into_js(move || {
        let fire = timer_state.borrow_mut().debouncer.should_fire(ticket);
        if fire {
            run_pass(&timer_state, RevealMode::Immediate);
        }
    });

    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        quiet_period_ms as i32,
    ) {
        log::error!("Failed to schedule resize layout: {:?}", e);
    }
}

fn current_snapshot(state: &Rc<RefCell<GridState>>) -> Option<GridSnapshot> {
    let document = web_sys::window()?.document()?;
    let config = state.borrow().config.clone();
    read_grid(&document, &config)
}

/// One full layout pass: read, compute, render
///
/// A missing container makes the pass a no-op. A container too narrow for
/// any column is logged and left alone.
fn run_pass(state: &Rc<RefCell<GridState>>, reveal: RevealMode) -> Option<MasonryLayout> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let config = state.borrow().config.clone();
    let started = window.performance().map(|p| p.now());

    let Some(snapshot) = read_grid(&document, &config) else {
        log::debug!("No element #{}, skipping layout", config.container_id);
        return None;
    };

    let viewport_width = match config.breakpoint_basis {
        BreakpointBasis::Container => None,
        BreakpointBasis::Viewport => window.inner_width().ok().and_then(|w| w.as_f64()),
    };
    let breakpoint_width = config.breakpoint_width(snapshot.container_width, viewport_width);

    let pass_config = match LayoutConfig::resolve(snapshot.container_width, breakpoint_width, &config)
    {
        Ok(pass_config) => pass_config,
        Err(e) => {
            log::warn!("Skipping masonry layout: {}", e);
            return None;
        }
    };

    let layout = compute_layout(&snapshot.items, &pass_config);
    if let Err(e) = apply_layout(
        &snapshot,
        &layout,
        reveal,
        &config.initialized_class,
        config.reveal_delay_ms,
    ) {
        log::error!("Failed to apply masonry layout: {:?}", e);
    }

    if let (Some(started), Some(performance)) = (started, window.performance()) {
        log::debug!(
            "Masonry pass ({:?}) took {:.2}ms",
            reveal,
            performance.now() - started
        );
    }

    let mut state = state.borrow_mut();
    state.pass_count += 1;
    state.last_layout = Some(layout.clone());
    Some(layout)
}

fn dom_error(e: JsValue) -> LayoutError {
    LayoutError::Dom(format!("{:?}", e))
}

fn no_window() -> LayoutError {
    LayoutError::Dom("no window available".to_string())
}
