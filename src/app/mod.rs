//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the runtime (main.rs) and the domain, motion and
//! scene layers. It implements the event-driven loop that powers the demo.
//!
//! # Architecture
//!
//! ```text
//! stdin commands ─┐
//!                 ├→ Event → Controller::handle_event → AppState mutations → Actions
//! frame clock ────┘                 │
//!                                   └→ Scheduler (tweens, timers) → SceneAdapter
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects returned to the presentation layer
//! - [`effects`]: Gesture tweens, timer keys and timing constants
//! - [`handler`]: The [`Controller`] and its [`Event`]s
//! - [`modes`]: Section and view types
//! - [`session`]: JSON dump of the running session
//! - [`state`]: Application state and view model computation
//! - [`timeline`]: Bounded log of dispatched gestures

pub mod actions;
pub mod effects;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;
pub mod timeline;

pub use actions::Action;
pub use effects::{TimerKey, TweenTarget};
pub use handler::{Controller, ControllerOptions, Event, HandlerOutcome};
pub use modes::{Section, ViewName};
pub use session::SessionDump;
pub use state::{AppState, ResponseCard};
pub use timeline::{Timeline, TimelineEntry, TIMELINE_CAPACITY};
