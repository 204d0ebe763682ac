//! Scene layer: the opaque 3D backend behind a trait.
//!
//! - [`adapter`]: [`SceneAdapter`] / [`SceneFactory`] contract and property keys
//! - [`spec`]: Ring construction parameters for the hero and live scenes
//! - [`headless`]: In-memory backend used by the terminal demo and tests

pub mod adapter;
pub mod headless;
pub mod spec;

pub use adapter::{Property, SceneAdapter, SceneFactory, SceneKind, SceneSnapshot};
pub use headless::{HeadlessFactory, HeadlessScene};
pub use spec::{Rgb, RingSpec};
