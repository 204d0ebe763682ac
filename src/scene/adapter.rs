//! Rendering backend abstraction.
//!
//! The [`SceneAdapter`] trait is the full contract the core needs from a 3D
//! engine: read and write a handful of numeric properties on the ring group and
//! its materials, swap the ring color, and render one frame. Any engine that can
//! honor it is substitutable.

use super::spec::{Rgb, RingSpec};
use serde::Serialize;
use std::fmt;

/// Which of the two ring scenes a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Landing-page ring.
    Hero,
    /// Main-interface ring.
    Live,
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hero => "hero",
            Self::Live => "live",
        })
    }
}

/// Animatable numeric properties of a ring scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Ring group rotation around X, radians.
    RotationX,
    /// Ring group rotation around Y, radians.
    RotationY,
    /// Ring group rotation around Z, radians.
    RotationZ,
    /// Ring group vertical offset.
    PositionY,
    /// Opacity of the glow ring material.
    GlowOpacity,
    /// Uniform scale of the sensing zone.
    ZoneScale,
    /// Emissive intensity of the ring body material.
    EmissiveIntensity,
    /// Rotation of the particle field around Y, radians.
    ParticleRotationY,
}

impl Property {
    /// Every property, in storage order.
    pub const ALL: [Self; 8] = [
        Self::RotationX,
        Self::RotationY,
        Self::RotationZ,
        Self::PositionY,
        Self::GlowOpacity,
        Self::ZoneScale,
        Self::EmissiveIntensity,
        Self::ParticleRotationY,
    ];
}

/// A live scene created by a backend.
///
/// Properties a scene does not have (a glow ring on the live scene, say) read
/// as `0.0` and ignore writes.
pub trait SceneAdapter: fmt::Debug {
    /// Which ring this scene shows.
    fn kind(&self) -> SceneKind;

    /// Current value of `property`.
    fn property(&self, property: Property) -> f64;

    /// Writes `property`. Unsupported properties ignore the write.
    fn set_property(&mut self, property: Property, value: f64);

    /// Base color of the ring body material.
    fn ring_color(&self) -> Rgb;

    /// Replaces the base color of the ring body material.
    fn set_ring_color(&mut self, color: Rgb);

    /// Draws one frame with the current property values.
    fn render_frame(&mut self);
}

/// Creates scenes on demand.
///
/// The controller calls this exactly once per [`SceneKind`]; later requests for
/// an existing scene are answered with the scene already held.
pub trait SceneFactory {
    /// Builds a scene of `kind` from `spec`.
    ///
    /// # Parameters
    ///
    /// * `kind` - Ring the scene shows
    /// * `spec` - Geometry, materials and lights to build
    ///
    /// # Returns
    ///
    /// The new scene, with every supported property at its initial value.
    fn create(&mut self, kind: SceneKind, spec: &RingSpec) -> Box<dyn SceneAdapter>;
}

/// Point-in-time copy of a scene's animated values.
///
/// Used by the scene summary line, the session dump and tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    /// Scene the values were read from.
    pub kind: SceneKind,
    /// `[x, y, z]` rotation of the ring group, radians.
    pub rotation: [f64; 3],
    /// Vertical offset of the ring group.
    pub position_y: f64,
    /// Glow ring opacity; 0 on the live scene.
    pub glow_opacity: f64,
    /// Emissive intensity of the ring body.
    pub emissive_intensity: f64,
    /// Base color of the ring body.
    pub ring_color: Rgb,
}

impl SceneSnapshot {
    /// Reads the current values of `scene`.
    #[must_use]
    pub fn capture(scene: &dyn SceneAdapter) -> Self {
        Self {
            kind: scene.kind(),
            rotation: [
                scene.property(Property::RotationX),
                scene.property(Property::RotationY),
                scene.property(Property::RotationZ),
            ],
            position_y: scene.property(Property::PositionY),
            glow_opacity: scene.property(Property::GlowOpacity),
            emissive_intensity: scene.property(Property::EmissiveIntensity),
            ring_color: scene.ring_color(),
        }
    }
}
