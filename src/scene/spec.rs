//! Construction parameters for the two ring scenes.
//!
//! The core never builds meshes itself; it hands a [`RingSpec`] to a
//! [`SceneFactory`](super::SceneFactory) and animates the resulting scene
//! through [`Property`](super::Property) values.

use serde::Serialize;
use std::fmt;

/// 24-bit RGB color, stored as `0xRRGGBB`.
///
/// Displays and serializes as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Ring body and the main point light.
    pub const INDIGO: Self = Self(0x6366f1);
    /// Emissive tint of both rings.
    pub const DEEP_INDIGO: Self = Self(0x4f46e5);
    /// Glow, particles and the gesture flash.
    pub const LAVENDER: Self = Self(0xa78bfa);
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Torus geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusSpec {
    /// Distance from the center to the middle of the tube.
    pub radius: f64,
    /// Tube radius.
    pub tube: f64,
    /// Segments around the tube.
    pub radial_segments: u32,
    /// Segments along the ring.
    pub tubular_segments: u32,
}

/// Lit, physically based surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSpec {
    /// Base color. The gesture flash replaces it temporarily.
    pub color: Rgb,
    /// Metalness in `[0, 1]`.
    pub metalness: f64,
    /// Roughness in `[0, 1]`; lower is shinier.
    pub roughness: f64,
    /// Emissive tint.
    pub emissive: Rgb,
    /// Resting emissive intensity, restored after a flash.
    pub emissive_intensity: f64,
}

/// Unlit translucent layer (glow ring, sensing zone, particles).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySpec {
    /// Flat color.
    pub color: Rgb,
    /// Initial opacity in `[0, 1]`.
    pub opacity: f64,
    /// Draw edges only.
    pub wireframe: bool,
}

/// Point light placed in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLightSpec {
    /// Light color.
    pub color: Rgb,
    /// Light intensity.
    pub intensity: f64,
    /// Cut-off distance; 0 means unlimited.
    pub distance: f64,
    /// `[x, y, z]` position.
    pub position: [f64; 3],
}

/// Everything a backend needs to build one ring scene.
///
/// The optional parts decide which [`Property`](super::Property) values the
/// scene supports: glow opacity needs `glow`, zone scale needs
/// `sensing_zone` and particle rotation needs `particles`.
///
/// # Example
///
/// ```
/// use gesture_ring::scene::RingSpec;
///
/// let hero = RingSpec::hero();
/// assert!(hero.glow.is_some() && hero.particles.is_none());
/// assert_eq!(hero.surface.color.to_string(), "#6366f1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RingSpec {
    /// Vertical camera field of view, in degrees.
    pub field_of_view: f64,
    /// Camera distance on the Z axis.
    pub camera_z: f64,
    /// Ambient light intensity.
    pub ambient_intensity: f64,
    /// Point lights, in creation order.
    pub lights: Vec<PointLightSpec>,
    /// Ring body geometry.
    pub ring: TorusSpec,
    /// Ring body material.
    pub surface: SurfaceSpec,
    /// Hero only: translucent torus around the body.
    pub glow: Option<(TorusSpec, OverlaySpec)>,
    /// Hero only: wireframe sphere radius and material.
    pub sensing_zone: Option<(f64, OverlaySpec)>,
    /// Live only: particle count, spread and material.
    pub particles: Option<(u32, f64, OverlaySpec)>,
}

impl RingSpec {
    /// Landing-page ring: body, glow ring and sensing zone, two point lights.
    #[must_use]
    pub fn hero() -> Self {
        Self {
            field_of_view: 45.0,
            camera_z: 8.0,
            ambient_intensity: 0.5,
            lights: vec![
                PointLightSpec { color: Rgb::INDIGO, intensity: 2.0, distance: 100.0, position: [5.0, 5.0, 5.0] },
                PointLightSpec { color: Rgb::LAVENDER, intensity: 1.5, distance: 100.0, position: [-5.0, -5.0, 5.0] },
            ],
            ring: TorusSpec { radius: 2.0, tube: 0.3, radial_segments: 32, tubular_segments: 100 },
            surface: SurfaceSpec {
                color: Rgb::INDIGO,
                metalness: 0.8,
                roughness: 0.2,
                emissive: Rgb::DEEP_INDIGO,
                emissive_intensity: 0.3,
            },
            glow: Some((
                TorusSpec { radius: 2.0, tube: 0.35, radial_segments: 32, tubular_segments: 100 },
                OverlaySpec { color: Rgb::LAVENDER, opacity: 0.3, wireframe: false },
            )),
            sensing_zone: Some((3.5, OverlaySpec { color: Rgb::INDIGO, opacity: 0.05, wireframe: true })),
            particles: None,
        }
    }

    /// Main-interface ring: smaller, shinier, with a particle field.
    #[must_use]
    pub fn live() -> Self {
        Self {
            field_of_view: 45.0,
            camera_z: 6.0,
            ambient_intensity: 0.6,
            lights: vec![PointLightSpec {
                color: Rgb::INDIGO,
                intensity: 2.0,
                distance: 100.0,
                position: [3.0, 3.0, 3.0],
            }],
            ring: TorusSpec { radius: 1.5, tube: 0.25, radial_segments: 32, tubular_segments: 100 },
            surface: SurfaceSpec {
                color: Rgb::INDIGO,
                metalness: 0.9,
                roughness: 0.1,
                emissive: Rgb::DEEP_INDIGO,
                emissive_intensity: 0.5,
            },
            glow: None,
            sensing_zone: None,
            particles: Some((50, 5.0, OverlaySpec { color: Rgb::LAVENDER, opacity: 0.6, wireframe: false })),
        }
    }
}
