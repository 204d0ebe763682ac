//! gesture-ring: animation and state-transition core for a touchless gesture
//! ring demo.
//!
//! The demo has two sections. The landing section shows a slowly turning
//! "hero" ring that plays a gesture every few seconds. The main section shows
//! a "live" ring that reacts to simulated gestures (swipe left, swipe right,
//! tap, rotate) with short tweens, and answers each gesture with a canned
//! response for the active context (presentation, media, accessibility,
//! general). There is no sensor and no recognizer: gestures come from a timer
//! or from explicit dispatch calls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime (main.rs)                         │  ← stdin thread + frame loop
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Controller: owns state, scheduler, scenes, RNG   │
//! │  - Gesture dispatch and section transitions         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Motion Layer  │   │ Scene Layer   │
//! │ (ui/)         │   │ (motion/)     │   │ (scene/)      │
//! │ - Rendering   │   │ - Easing      │   │ - Adapter     │
//! │ - Theming     │   │ - Tweens      │   │ - Ring specs  │
//! │ - Components  │   │ - Scheduler   │   │ - Headless    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Gestures, contexts, responses, errors (domain/)  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller, state, gesture effects and timeline
//! - [`domain`]: Gesture and context enums, response table, errors
//! - [`motion`]: Easing curves, tweens and the frame scheduler
//! - [`scene`]: Rendering backend trait and the headless backend
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Platform directories
//! - [`observability`]: OpenTelemetry tracing to a rotating file
//!
//! # Configuration
//!
//! `~/.config/gesture-ring/config.toml`, every key optional:
//!
//! ```toml
//! theme = "lavender-day"
//! trace_level = "debug"
//! seed = 42
//! frame_interval_ms = 16
//! landing_cycle = true
//! landing_cycle_ms = 4000
//! initial_context = "media"
//! initial_view = "live"
//! ```
//!
//! The same keys can be overridden as `key=value` command-line arguments.
//!
//! # Example
//!
//! ```
//! use gesture_ring::app::Event;
//! use gesture_ring::domain::GestureKind;
//! use gesture_ring::{initialize, Config};
//! use std::time::Duration;
//!
//! let config = Config { seed: Some(3), initial_context: "presentation".to_string(), ..Config::default() };
//! let mut controller = initialize(&config);
//!
//! controller.handle_event(&Event::SimulateGesture(GestureKind::SwipeLeft))?;
//! controller.handle_event(&Event::Frame { now: Duration::from_millis(16) })?;
//!
//! let latest = controller.state().timeline.latest().unwrap();
//! assert_eq!(latest.summary(), "Swipe Left → Navigate Back");
//! # Ok::<(), gesture_ring::GestureRingError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod motion;
pub mod scene;

pub mod ui;

pub mod observability;

pub use app::{Action, AppState, Controller, ControllerOptions, Event};
pub use domain::{GestureKind, GestureRingError, Result};
pub use ui::Theme;

use app::ViewName;
use scene::HeadlessFactory;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
const DEFAULT_LANDING_CYCLE_MS: u64 = 4000;
const DEFAULT_CONTEXT: &str = "presentation";

/// Runtime configuration.
///
/// Every field has a default, so an empty file or map yields
/// [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in theme name (`indigo-night`, `lavender-day`). Ignored if
    /// `theme_file` loads.
    #[serde(alias = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. A leading `~` is expanded.
    pub theme_file: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `gesture_ring=trace`.
    /// Default: `"info"`.
    pub trace_level: Option<String>,

    /// Seed for gesture confidence values. Unset seeds from the OS.
    pub seed: Option<u64>,

    /// Wall-clock time between frames, in milliseconds. Default: 16.
    pub frame_interval_ms: u64,

    /// Whether the landing ring plays gestures on its own. Default: true.
    pub landing_cycle: bool,

    /// Landing cycle period in milliseconds. Default: 4000.
    pub landing_cycle_ms: u64,

    /// Initial context label. Default: `"presentation"`.
    pub initial_context: String,

    /// Initial main-section view. Default: `"live"`.
    pub initial_view: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            seed: None,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            landing_cycle: true,
            landing_cycle_ms: DEFAULT_LANDING_CYCLE_MS,
            initial_context: DEFAULT_CONTEXT.to_string(),
            initial_view: ViewName::LIVE.to_string(),
        }
    }
}

impl Config {
    /// Parses TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::Config`] for malformed TOML or values of
    /// the wrong type.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| GestureRingError::Config(format!("invalid config: {e}")))?;
        Ok(config.sanitized())
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::Io`] if the file cannot be read and
    /// [`GestureRingError::Config`] if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads the user config file, or defaults when there is none.
    ///
    /// # Errors
    ///
    /// Propagates read and parse errors of an existing file.
    pub fn load_user() -> Result<Self> {
        match infrastructure::config_file() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Builds a configuration from key/value pairs over the defaults.
    ///
    /// ```
    /// use gesture_ring::Config;
    /// use std::collections::BTreeMap;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("seed".to_string(), "7".to_string());
    /// map.insert("frame_interval_ms".to_string(), "fast".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.frame_interval_ms, 16);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();
        config.apply_overrides(map);
        config
    }

    /// Overrides fields named in `map`, then resets zero intervals to their
    /// defaults.
    ///
    /// # Parameters
    ///
    /// * `map` - Field names to raw values, as given on the command line.
    ///   `theme` is accepted for `theme_name`. Values are trimmed.
    ///
    /// Numeric and boolean values that do not parse keep the current value.
    /// Unknown keys are ignored, so a typo never aborts startup.
    ///
    /// # Example
    ///
    /// ```
    /// use gesture_ring::Config;
    /// use std::collections::BTreeMap;
    ///
    /// let mut config = Config::default();
    /// let mut map = BTreeMap::new();
    /// map.insert("landing_cycle_ms".to_string(), " 0 ".to_string());
    /// map.insert("landing_cycle".to_string(), "nope".to_string());
    /// map.insert("colour".to_string(), "red".to_string());
    /// config.apply_overrides(&map);
    ///
    /// assert_eq!(config, Config::default());
    /// ```
    pub fn apply_overrides(&mut self, map: &BTreeMap<String, String>) {
        for (key, value) in map {
            let value = value.trim();
            match key.as_str() {
                "theme" | "theme_name" => self.theme_name = Some(value.to_string()),
                "theme_file" => self.theme_file = Some(value.to_string()),
                "trace_level" => self.trace_level = Some(value.to_string()),
                "seed" => self.seed = value.parse().ok().or(self.seed),
                "frame_interval_ms" => self.frame_interval_ms = value.parse().unwrap_or(self.frame_interval_ms),
                "landing_cycle" => self.landing_cycle = value.parse().unwrap_or(self.landing_cycle),
                "landing_cycle_ms" => self.landing_cycle_ms = value.parse().unwrap_or(self.landing_cycle_ms),
                "initial_context" => self.initial_context = value.to_string(),
                "initial_view" => self.initial_view = value.to_string(),
                _ => {}
            }
        }
        *self = std::mem::take(self).sanitized();
    }

    /// Replaces zero intervals with their defaults.
    fn sanitized(mut self) -> Self {
        if self.frame_interval_ms == 0 {
            self.frame_interval_ms = DEFAULT_FRAME_INTERVAL_MS;
        }
        if self.landing_cycle_ms == 0 {
            self.landing_cycle_ms = DEFAULT_LANDING_CYCLE_MS;
        }
        self
    }

    /// Time between frames.
    #[must_use]
    pub const fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Controller knobs derived from this configuration.
    #[must_use]
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            seed: self.seed,
            landing_cycle: self
                .landing_cycle
                .then(|| Duration::from_millis(self.landing_cycle_ms)),
        }
    }
}

/// Builds the controller described by `config`, with headless scenes.
///
/// The theme resolves from `theme_file`, then `theme_name`, then the default.
/// A blank `initial_view` falls back to `live`.
pub fn initialize(config: &Config) -> Controller<HeadlessFactory> {
    let _span = tracing::debug_span!("initialize").entered();

    let theme_file = config.theme_file.as_deref().map(infrastructure::expand_tilde);
    let theme = Theme::resolve(config.theme_name.as_deref(), theme_file.as_deref());

    let view = ViewName::new(&config.initial_view).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "using the live view");
        ViewName::live()
    });

    tracing::debug!(theme = %theme.name, context = %config.initial_context, "initialized");
    let state = AppState::new(theme, &config.initial_context, view);
    Controller::new(state, HeadlessFactory::new(), config.controller_options())
}
