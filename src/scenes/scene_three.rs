//! Textured, lit scene: a ring of orbiting cubes, two spinning rings, a
//! spinning globe and three lights circling around them.

use cgmath::{Deg, Matrix4, Vector3, vec3};

use crate::{
    data_structures::{
        color::{SOFTBLUE, SOFTGREEN, SOFTRED},
        light::{Light, LightSlots},
        material::Material,
        scene_graph::{Axis, Behavior, RenderMode, SceneNode},
    },
    error::{GeometryError, LightError},
    resources::primitives::{Cube, Ellipsoid, Torus},
    scenes::{OrbitingLight, Scene, advance_rigs},
};

pub const CUBE_COUNT: usize = 8;
pub const CUBE_RING_RADIUS: f32 = 0.8;
pub const CUBE_ORBIT_SPEED: f32 = 0.4;
pub const LIGHT_ORBIT_RADIUS: f32 = 3.0;
pub const LIGHT_SPEEDS: [f32; 3] = [0.5, 0.7, 1.0];

const AMBIENT: [f32; 4] = [0.1, 0.1, 0.1, 0.1];

fn rgba(color: [f64; 3]) -> [f32; 4] {
    [color[0] as f32, color[1] as f32, color[2] as f32, 1.0]
}

pub struct SceneThree {
    root: SceneNode,
    rigs: Vec<OrbitingLight>,
}

impl SceneThree {
    pub fn new() -> Result<Self, GeometryError> {
        let mut root = SceneNode::new("scene_three");

        let cube = Cube::uniform(0.1).generate()?;
        let cube_material = Material::new(AMBIENT, [0.7, 0.2, 0.2, 1.0], [0.7, 0.4, 0.8, 1.0], 64.0);
        for i in 0..CUBE_COUNT {
            let theta = i as f32 * 360.0 / CUBE_COUNT as f32;
            let rad = theta.to_radians();
            root.add_child(
                SceneNode::with_mesh(format!("cube_{i}"), cube.clone())
                    .at(vec3(
                        CUBE_RING_RADIUS * rad.cos(),
                        0.0,
                        -CUBE_RING_RADIUS * rad.sin(),
                    ))
                    .rotated(Axis::V, theta)
                    .with_material(cube_material)
                    .with_texture("stoneWall.jpg")
                    .with_render_mode(RenderMode::LitTexture)
                    .with_behavior(Behavior::Orbit {
                        radius: CUBE_RING_RADIUS,
                        speed: CUBE_ORBIT_SPEED,
                    }),
            );
        }

        root.add_child(
            SceneNode::with_mesh(
                "torus",
                Torus::new(0.05, 1.0).with_resolution(36, 36).generate()?,
            )
            .rotated(Axis::U, 60.0)
            .with_material(Material::new(AMBIENT, [0.9, 0.2, 0.2, 1.0], [0.8, 0.6, 0.4, 1.0], 64.0))
            .with_texture("marble.jpg")
            .with_render_mode(RenderMode::LitTexture)
            .with_behavior(Behavior::Spin {
                speeds: [0.3, 0.4, 0.5],
            }),
        );

        root.add_child(
            SceneNode::with_mesh(
                "torus2",
                Torus::new(0.05, 1.2).with_resolution(36, 36).generate()?,
            )
            .rotated(Axis::U, 90.0)
            .rotated(Axis::V, 30.0)
            .with_material(Material::new(AMBIENT, [0.8, 0.2, 0.2, 1.0], [0.8, 0.4, 0.4, 1.0], 64.0))
            .with_texture("marble.jpg")
            .with_render_mode(RenderMode::LitTexture)
            .with_behavior(Behavior::Spin {
                speeds: [-0.6, -0.4, 0.2],
            }),
        );

        root.add_child(
            SceneNode::with_mesh(
                "sphere",
                Ellipsoid::sphere(0.5).with_resolution(36, 36).generate()?,
            )
            .with_material(Material::new(AMBIENT, [0.7, 0.2, 0.5, 1.0], [0.6, 0.4, 0.4, 1.0], 64.0))
            .with_texture("earth.jpg")
            .with_render_mode(RenderMode::LitTexture)
            .with_behavior(Behavior::Spin {
                speeds: [0.0, 1.0, 0.0],
            }),
        );

        let frames = [
            Matrix4::from_translation(vec3(0.0, 2.0, 0.0)),
            Matrix4::from_angle_z(Deg(60.0)),
            Matrix4::from_angle_z(Deg(120.0)),
        ];
        let colors = [SOFTRED, SOFTBLUE, SOFTGREEN];
        let mut rigs = Vec::with_capacity(3);
        for (i, (frame, color)) in frames.into_iter().zip(colors).enumerate() {
            let marker = root.add_child(
                SceneNode::with_mesh(
                    format!("light_marker_{i}"),
                    Ellipsoid::sphere(0.1).with_color(color).generate()?,
                )
                .with_render_mode(RenderMode::VertexColor),
            );
            let mut rig = OrbitingLight {
                light: Light::point(Vector3::new(0.0, 0.0, 0.0), rgba(color)),
                radius: LIGHT_ORBIT_RADIUS,
                speed: LIGHT_SPEEDS[i],
                angle: 0.0,
                frame,
                marker,
            };
            let start = rig.position_at(0.0);
            rig.light = match i {
                0 => Light::directional(start, rgba(color)),
                1 => Light::point(start, rgba(color)),
                _ => Light::spot(
                    start,
                    rgba(color),
                    vec3(0.0, -1.0, 0.0),
                    [1.0, 0.1, 0.01],
                    30.0,
                ),
            };
            root.children_mut()[marker].set_position(start);
            rigs.push(rig);
        }

        Ok(Self { root, rigs })
    }

    pub fn light_rigs(&self) -> &[OrbitingLight] {
        &self.rigs
    }
}

impl Scene for SceneThree {
    fn name(&self) -> &str {
        "three"
    }

    fn root(&self) -> &SceneNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut SceneNode {
        &mut self.root
    }

    fn lights(&self) -> Vec<Light> {
        self.rigs.iter().map(|rig| rig.light).collect()
    }

    fn animation_update(&mut self, slots: &mut LightSlots) -> Result<(), LightError> {
        advance_rigs(&mut self.rigs, &mut self.root, slots)?;
        self.root.animation_update();
        Ok(())
    }
}
