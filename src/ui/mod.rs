//! Terminal presentation layer with component-based rendering.
//!
//! # Architecture
//!
//! ```text
//! AppState + SceneSnapshot → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, fitting, centering)
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, LandingInfo, ResponseInfo, SceneLine, StatusInfo, TimelineItem, UIViewModel,
};
