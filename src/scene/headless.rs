//! In-memory scene backend.
//!
//! [`HeadlessScene`] keeps property values in memory and counts rendered frames.
//! It backs the terminal demo, where the ring is summarized as numbers rather
//! than drawn, and every controller test.

use super::adapter::{Property, SceneAdapter, SceneFactory, SceneKind};
use super::spec::{Rgb, RingSpec};

/// Scene that stores its animated values in memory.
///
/// Properties the ring spec does not build (glow on the live ring, the sensing
/// zone, particles on the hero ring) are unsupported: writes to them are
/// dropped and reads return 0.
///
/// # Example
///
/// ```
/// use gesture_ring::scene::{HeadlessScene, Property, RingSpec, SceneAdapter, SceneKind};
///
/// let mut live = HeadlessScene::new(SceneKind::Live, &RingSpec::live());
/// live.set_property(Property::PositionY, 0.5);
/// live.set_property(Property::GlowOpacity, 0.9);
///
/// assert_eq!(live.property(Property::PositionY), 0.5);
/// assert_eq!(live.property(Property::GlowOpacity), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct HeadlessScene {
    kind: SceneKind,
    /// Current values, indexed by [`slot`].
    values: [f64; PROPERTY_COUNT],
    /// Whether the spec builds the part a property animates.
    supported: [bool; PROPERTY_COUNT],
    ring_color: Rgb,
    frames: u64,
}

const PROPERTY_COUNT: usize = Property::ALL.len();

/// Storage index of `property`.
const fn slot(property: Property) -> usize {
    match property {
        Property::RotationX => 0,
        Property::RotationY => 1,
        Property::RotationZ => 2,
        Property::PositionY => 3,
        Property::GlowOpacity => 4,
        Property::ZoneScale => 5,
        Property::EmissiveIntensity => 6,
        Property::ParticleRotationY => 7,
    }
}

impl HeadlessScene {
    /// Builds a scene with the initial values described by `spec`.
    ///
    /// Rotations and height start at 0, emissive intensity and glow opacity
    /// at their material values, and the zone scale at 1.
    #[must_use]
    pub fn new(kind: SceneKind, spec: &RingSpec) -> Self {
        let mut scene = Self {
            kind,
            values: [0.0; PROPERTY_COUNT],
            supported: [true; PROPERTY_COUNT],
            ring_color: spec.surface.color,
            frames: 0,
        };

        scene.values[slot(Property::EmissiveIntensity)] = spec.surface.emissive_intensity;
        match spec.glow {
            Some((_, overlay)) => scene.values[slot(Property::GlowOpacity)] = overlay.opacity,
            None => scene.supported[slot(Property::GlowOpacity)] = false,
        }
        match spec.sensing_zone {
            Some(_) => scene.values[slot(Property::ZoneScale)] = 1.0,
            None => scene.supported[slot(Property::ZoneScale)] = false,
        }
        if spec.particles.is_none() {
            scene.supported[slot(Property::ParticleRotationY)] = false;
        }
        scene
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

impl SceneAdapter for HeadlessScene {
    fn kind(&self) -> SceneKind {
        self.kind
    }

    fn property(&self, property: Property) -> f64 {
        self.values[slot(property)]
    }

    fn set_property(&mut self, property: Property, value: f64) {
        let index = slot(property);
        if self.supported[index] {
            self.values[index] = value;
        }
    }

    fn ring_color(&self) -> Rgb {
        self.ring_color
    }

    fn set_ring_color(&mut self, color: Rgb) {
        self.ring_color = color;
    }

    fn render_frame(&mut self) {
        self.frames += 1;
    }
}

/// Factory producing [`HeadlessScene`]s and counting how many it made.
#[derive(Debug, Clone, Default)]
pub struct HeadlessFactory {
    hero_created: usize,
    live_created: usize,
}

impl HeadlessFactory {
    /// Creates a factory that has made no scenes yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many scenes of `kind` this factory has created.
    #[must_use]
    pub const fn created(&self, kind: SceneKind) -> usize {
        match kind {
            SceneKind::Hero => self.hero_created,
            SceneKind::Live => self.live_created,
        }
    }
}

impl SceneFactory for HeadlessFactory {
    fn create(&mut self, kind: SceneKind, spec: &RingSpec) -> Box<dyn SceneAdapter> {
        match kind {
            SceneKind::Hero => self.hero_created += 1,
            SceneKind::Live => self.live_created += 1,
        }
        tracing::debug!(scene = %kind, radius = spec.ring.radius, "headless scene created");
        Box::new(HeadlessScene::new(kind, spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values_follow_spec() {
        let hero = HeadlessScene::new(SceneKind::Hero, &RingSpec::hero());
        assert_eq!(hero.property(Property::GlowOpacity), 0.3);
        assert_eq!(hero.property(Property::ZoneScale), 1.0);
        assert_eq!(hero.property(Property::EmissiveIntensity), 0.3);
        assert_eq!(hero.ring_color(), Rgb::INDIGO);

        let live = HeadlessScene::new(SceneKind::Live, &RingSpec::live());
        assert_eq!(live.property(Property::EmissiveIntensity), 0.5);
    }

    #[test]
    fn missing_parts_ignore_writes() {
        let mut live = HeadlessScene::new(SceneKind::Live, &RingSpec::live());
        live.set_property(Property::GlowOpacity, 0.9);
        assert_eq!(live.property(Property::GlowOpacity), 0.0);
        live.set_property(Property::ParticleRotationY, -0.2);
        assert_eq!(live.property(Property::ParticleRotationY), -0.2);
    }

    #[test]
    fn factory_counts_creations() {
        let mut factory = HeadlessFactory::new();
        let mut scene = factory.create(SceneKind::Live, &RingSpec::live());
        scene.render_frame();
        assert_eq!(factory.created(SceneKind::Live), 1);
        assert_eq!(factory.created(SceneKind::Hero), 0);
    }
}
