//! Fixed demo scenes.
//!
//! A scene owns a tree of [`SceneNode`]s and any lights that move with it.
//! The frame loop calls [`Scene::initialize`] once, then
//! [`Scene::animation_update`] before every frame.

use cgmath::{Matrix4, Vector3, Vector4};

use crate::{
    data_structures::{
        light::{Light, LightSlots},
        scene_graph::{SceneNode, wrap_degrees},
    },
    error::LightError,
};

pub mod scene_three;
pub mod scene_two;

pub use scene_three::SceneThree;
pub use scene_two::SceneTwo;

pub trait Scene {
    fn name(&self) -> &str;

    fn root(&self) -> &SceneNode;

    fn root_mut(&mut self) -> &mut SceneNode;

    /// Lights in slot order.
    fn lights(&self) -> Vec<Light> {
        Vec::new()
    }

    /// Reset the light table and fill it with this scene's lights.
    fn initialize(&mut self, slots: &mut LightSlots) -> Result<(), LightError> {
        slots.clear_all();
        for (i, light) in self.lights().into_iter().enumerate() {
            slots.set(i, light)?;
        }
        Ok(())
    }

    /// Advance one frame of animation.
    fn animation_update(&mut self, _slots: &mut LightSlots) -> Result<(), LightError> {
        self.root_mut().animation_update();
        Ok(())
    }
}

/// A light circling in its own frame, with a marker node that follows it.
///
/// The light sits at `frame * (r cos a, 0, r sin a, 1)` where `a` advances by
/// `speed` degrees per frame.
#[derive(Clone, Debug)]
pub struct OrbitingLight {
    pub light: Light,
    pub radius: f32,
    pub speed: f32,
    pub angle: f32,
    pub frame: Matrix4<f32>,
    /// Index of the marker among the root's children.
    pub marker: usize,
}

impl OrbitingLight {
    pub fn position_at(&self, angle: f32) -> Vector3<f32> {
        let theta = angle.to_radians();
        let local = Vector4::new(self.radius * theta.cos(), 0.0, self.radius * theta.sin(), 1.0);
        (self.frame * local).truncate()
    }

    /// Step the orbit and move the light (and its direction, if it has one
    /// tied to its position) to the new spot.
    pub fn advance(&mut self) -> Vector3<f32> {
        self.angle = wrap_degrees(self.angle + self.speed);
        let position = self.position_at(self.angle);
        self.light.set_position(position);
        position
    }
}

/// Advance every rig, publish the lights to their slots and move the markers.
pub(crate) fn advance_rigs(
    rigs: &mut [OrbitingLight],
    root: &mut SceneNode,
    slots: &mut LightSlots,
) -> Result<(), LightError> {
    for (i, rig) in rigs.iter_mut().enumerate() {
        let position = rig.advance();
        if let Some(marker) = root.children_mut().get_mut(rig.marker) {
            marker.set_position(position);
        }
        slots.set(i, rig.light)?;
    }
    Ok(())
}
