//! Light sources.
//!
//! Three kinds of light are supported: directional (an infinitely distant
//! source such as the sun), omnidirectional (a point source with distance
//! attenuation) and spot (an attenuated cone with a direction and cutoff
//! angle).

use cgmath::Vector3;

/// Hard cap on lights enabled in a single frame.
///
/// Fixed-function hardware manages eight light slots; the frame assembler
/// enables lights in queue order until the cap is reached.
pub const MAX_ACTIVE_LIGHTS: usize = 8;

/// Default cutoff angle for spot lights, in degrees.
pub const SPOT_CUTOFF_DEFAULT_DEG: f32 = 15.0;

/// Cutoff value reported for omnidirectional lights: the "full sphere"
/// special value.
pub const OMNI_CUTOFF_DEG: f32 = 180.0;

/// Distance attenuation factors for point-like lights.
///
/// Intensity falls off as `1 / (constant + linear*d + quadratic*d^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    constant: f32,
    linear: f32,
    quadratic: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

impl Attenuation {
    /// Creates attenuation factors; negative inputs are floored to zero.
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant: constant.max(0.0),
            linear: linear.max(0.0),
            quadratic: quadratic.max(0.0),
        }
    }

    pub fn constant(&self) -> f32 {
        self.constant
    }

    pub fn linear(&self) -> f32 {
        self.linear
    }

    pub fn quadratic(&self) -> f32 {
        self.quadratic
    }

    /// Sets the constant factor. Negative values are ignored.
    pub fn set_constant(&mut self, constant: f32) {
        if constant >= 0.0 {
            self.constant = constant;
        }
    }

    /// Sets the linear factor. Negative values are ignored.
    pub fn set_linear(&mut self, linear: f32) {
        if linear >= 0.0 {
            self.linear = linear;
        }
    }

    /// Sets the quadratic factor. Negative values are ignored.
    pub fn set_quadratic(&mut self, quadratic: f32) {
        if quadratic >= 0.0 {
            self.quadratic = quadratic;
        }
    }
}

/// Kind-specific light parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform illumination from a fixed direction.
    Directional { direction: Vector3<f32> },
    /// Point source radiating in all directions.
    Omni { attenuation: Attenuation },
    /// Attenuated cone with a direction and cutoff angle in degrees.
    Spot {
        attenuation: Attenuation,
        direction: Vector3<f32>,
        cutoff_deg: f32,
    },
}

/// A light source with the classic ambient/diffuse/specular color triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    kind: LightKind,
}

impl Light {
    /// Creates a directional light. `direction` points *from* the scene
    /// *towards* the source.
    pub fn directional(
        ambient: Vector3<f32>,
        diffuse: Vector3<f32>,
        specular: Vector3<f32>,
        direction: Vector3<f32>,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            kind: LightKind::Directional { direction },
        }
    }

    /// Creates an omnidirectional (point) light.
    pub fn omni(
        ambient: Vector3<f32>,
        diffuse: Vector3<f32>,
        specular: Vector3<f32>,
        attenuation: Attenuation,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            kind: LightKind::Omni { attenuation },
        }
    }

    /// Creates a spot light with the default 15° cutoff.
    pub fn spot(
        ambient: Vector3<f32>,
        diffuse: Vector3<f32>,
        specular: Vector3<f32>,
        direction: Vector3<f32>,
        attenuation: Attenuation,
    ) -> Self {
        Self::spot_with_cutoff(
            ambient,
            diffuse,
            specular,
            direction,
            attenuation,
            SPOT_CUTOFF_DEFAULT_DEG,
        )
    }

    /// Creates a spot light with an explicit cutoff angle in degrees.
    pub fn spot_with_cutoff(
        ambient: Vector3<f32>,
        diffuse: Vector3<f32>,
        specular: Vector3<f32>,
        direction: Vector3<f32>,
        attenuation: Attenuation,
        cutoff_deg: f32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            kind: LightKind::Spot {
                attenuation,
                direction,
                cutoff_deg,
            },
        }
    }

    pub fn kind(&self) -> &LightKind {
        &self.kind
    }

    /// Direction of the light, for directional and spot lights.
    pub fn direction(&self) -> Option<Vector3<f32>> {
        match self.kind {
            LightKind::Directional { direction } => Some(direction),
            LightKind::Spot { direction, .. } => Some(direction),
            LightKind::Omni { .. } => None,
        }
    }

    /// Changes the direction of a directional or spot light; ignored for
    /// omnidirectional lights.
    pub fn set_direction(&mut self, new_direction: Vector3<f32>) {
        match &mut self.kind {
            LightKind::Directional { direction } => *direction = new_direction,
            LightKind::Spot { direction, .. } => *direction = new_direction,
            LightKind::Omni { .. } => {}
        }
    }

    /// Cone cutoff angle in degrees. Omnidirectional lights report the
    /// 180° full-sphere value; directional lights have no cutoff.
    pub fn cutoff_deg(&self) -> Option<f32> {
        match self.kind {
            LightKind::Spot { cutoff_deg, .. } => Some(cutoff_deg),
            LightKind::Omni { .. } => Some(OMNI_CUTOFF_DEG),
            LightKind::Directional { .. } => None,
        }
    }

    /// Changes a spot light's cutoff angle; ignored for other kinds.
    pub fn set_cutoff_deg(&mut self, cutoff: f32) {
        if let LightKind::Spot { cutoff_deg, .. } = &mut self.kind {
            *cutoff_deg = cutoff;
        }
    }

    /// Attenuation factors, for omnidirectional and spot lights.
    pub fn attenuation(&self) -> Option<&Attenuation> {
        match &self.kind {
            LightKind::Omni { attenuation } => Some(attenuation),
            LightKind::Spot { attenuation, .. } => Some(attenuation),
            LightKind::Directional { .. } => None,
        }
    }

    /// Mutable attenuation factors, for omnidirectional and spot lights.
    pub fn attenuation_mut(&mut self) -> Option<&mut Attenuation> {
        match &mut self.kind {
            LightKind::Omni { attenuation } => Some(attenuation),
            LightKind::Spot { attenuation, .. } => Some(attenuation),
            LightKind::Directional { .. } => None,
        }
    }
}
