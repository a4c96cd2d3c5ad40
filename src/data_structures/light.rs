//! Lights and the fixed table of light slots the shader reads from.

use cgmath::Vector3;

use crate::error::LightError;

/// Number of light slots resident in the shader at once.
pub const MAX_LIGHTS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightMode {
    /// Radiates from `position` in every direction.
    Point,
    /// Infinitely far away, shining along `-direction`.
    Directional { direction: Vector3<f32> },
    /// A point light limited to a cone around `direction`.
    ///
    /// `radial_attenuation` holds the constant, linear and quadratic falloff
    /// factors; `angle_limit` is the half-angle of the cone in degrees.
    Spot {
        direction: Vector3<f32>,
        radial_attenuation: [f32; 3],
        angle_limit: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vector3<f32>,
    pub color: [f32; 4],
    pub mode: LightMode,
}

impl Light {
    pub fn point(position: Vector3<f32>, color: [f32; 4]) -> Self {
        Self {
            position,
            color,
            mode: LightMode::Point,
        }
    }

    pub fn directional(direction: Vector3<f32>, color: [f32; 4]) -> Self {
        Self {
            position: direction,
            color,
            mode: LightMode::Directional { direction },
        }
    }

    pub fn spot(
        position: Vector3<f32>,
        color: [f32; 4],
        direction: Vector3<f32>,
        radial_attenuation: [f32; 3],
        angle_limit: f32,
    ) -> Self {
        Self {
            position,
            color,
            mode: LightMode::Spot {
                direction,
                radial_attenuation,
                angle_limit,
            },
        }
    }

    /// Move the light. A directional light keeps pointing from the origin
    /// towards its position, so its direction follows along.
    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
        if let LightMode::Directional { direction } = &mut self.mode {
            *direction = position;
        }
    }
}

/// The shader's light table, indexed by slot.
///
/// Owned by the rendering context and handed to scenes by reference; a scene
/// fills the slots it needs and leaves the others empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightSlots {
    slots: [Option<Light>; MAX_LIGHTS],
}

impl LightSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, index: usize, light: Light) -> Result<(), LightError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(LightError::SlotOutOfRange {
                index,
                capacity: MAX_LIGHTS,
            })?;
        *slot = Some(light);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Light> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    pub fn clear_all(&mut self) {
        self.slots = Default::default();
    }

    /// Occupied slots as `(index, light)`, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Light)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|light| (i, light)))
    }

    pub fn active_count(&self) -> usize {
        self.iter().count()
    }
}
