//! Every primitive side by side, shaded by normal.

use cgmath::vec3;

use crate::{
    data_structures::{
        color::Coloring,
        material::Material,
        scene_graph::{Axis, RenderMode, SceneNode},
    },
    error::GeometryError,
    resources::primitives::{Cube, Cylinder, Ellipsoid, Torus},
    scenes::Scene,
};

pub struct SceneTwo {
    root: SceneNode,
}

impl SceneTwo {
    pub fn new() -> Result<Self, GeometryError> {
        let ambient = [0.1, 0.1, 0.1, 0.1];
        let diffuse = [0.2, 0.2, 0.2, 1.0];
        let normal = |node: SceneNode, specular: [f32; 4]| {
            node.with_material(Material::new(ambient, diffuse, specular, 64.0))
                .with_render_mode(RenderMode::NormalColor)
        };

        let cube = Cube::new(1.0, 1.0, 1.0)
            .with_coloring(Coloring::NormalEncoded)
            .generate()?;
        let torus = Torus::new(0.15, 0.3).with_resolution(36, 36).generate()?;
        let sphere = Ellipsoid::sphere(0.4).with_resolution(36, 36).generate()?;
        let cylinder = Cylinder::new(0.3, 0.3, 0.4)
            .with_resolution(36, 36)
            .generate()?;
        let ellipsoid = Ellipsoid::new(0.4, 0.4, 0.6)
            .with_resolution(36, 36)
            .generate()?;

        let root = SceneNode::new("scene_two")
            .with_child(normal(
                SceneNode::with_mesh("cube", cube).at(vec3(-1.0, 1.0, 0.0)),
                [0.4, 0.8, 0.6, 0.1],
            ))
            .with_child(normal(
                SceneNode::with_mesh("torus", torus)
                    .at(vec3(1.0, 1.0, 0.0))
                    .rotated(Axis::U, 90.0),
                [0.8, 0.6, 0.4, 1.0],
            ))
            .with_child(normal(
                SceneNode::with_mesh("sphere", sphere),
                [0.6, 0.4, 0.8, 1.0],
            ))
            .with_child(normal(
                SceneNode::with_mesh("cylinder", cylinder).at(vec3(-1.0, -1.0, 0.0)),
                [0.6, 0.4, 0.8, 1.0],
            ))
            .with_child(normal(
                SceneNode::with_mesh("ellipsoid", ellipsoid).at(vec3(1.0, -1.0, 0.0)),
                [0.8, 0.4, 0.8, 1.0],
            ));

        Ok(Self { root })
    }
}

impl Scene for SceneTwo {
    fn name(&self) -> &str {
        "two"
    }

    fn root(&self) -> &SceneNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut SceneNode {
        &mut self.root
    }
}
