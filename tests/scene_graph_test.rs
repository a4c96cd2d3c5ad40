mod common;

use polyscene::{
    cgmath::{Deg, Matrix4, SquareMatrix, Vector3, vec3},
    context::GPUResource,
    data_structures::{
        material::Material,
        scene_graph::{Axis, RenderMode, SceneNode, wrap_degrees},
    },
    render::Render,
    resources::primitives::Cube,
};

use crate::common::test_utils::{assert_matrix_close, assert_vec3f_close, translation};

fn cube_node(name: &str) -> SceneNode {
    SceneNode::with_mesh(name, Cube::default().generate().unwrap())
}

#[test]
fn should_apply_u_then_v_then_w_then_translation() {
    let node = SceneNode::new("node")
        .at(vec3(1.0, 2.0, 3.0))
        .rotated(Axis::U, 30.0)
        .rotated(Axis::V, 45.0)
        .rotated(Axis::W, 60.0);
    let expected = Matrix4::from_translation(vec3(1.0, 2.0, 3.0))
        * Matrix4::from_angle_z(Deg(60.0))
        * Matrix4::from_angle_y(Deg(45.0))
        * Matrix4::from_angle_x(Deg(30.0));
    assert_matrix_close(node.local_transform().to_matrix(), expected, 1e-5);
}

#[test]
fn should_inherit_the_parent_transform() {
    let mut root = SceneNode::new("root").with_child(
        SceneNode::new("parent")
            .at(vec3(1.0, 0.0, 0.0))
            .rotated(Axis::W, 90.0)
            .with_child(SceneNode::new("child").at(vec3(1.0, 0.0, 0.0))),
    );
    root.update_world_transforms(&Matrix4::identity());

    let child = root.find("child").unwrap();
    assert_vec3f_close(translation(child.world_transform()), vec3(1.0, 1.0, 0.0), 1e-5);

    let offset = Matrix4::from_translation(vec3(0.0, 0.0, -2.0));
    root.update_world_transforms(&offset);
    let child = root.find("child").unwrap();
    assert_vec3f_close(translation(child.world_transform()), vec3(1.0, 1.0, -2.0), 1e-5);
}

#[test]
fn should_normalize_custom_axes() {
    let mut node = SceneNode::new("tilted");
    node.set_axes(Vector3::unit_x(), Vector3::unit_y(), vec3(1.0, 1.0, 0.0));
    node.set_angle(Axis::W, 180.0);
    let moved = node.local_transform().to_matrix() * Vector3::unit_x().extend(0.0);
    assert_vec3f_close(moved.truncate(), vec3(0.0, 1.0, 0.0), 1e-5);
}

#[test]
fn should_draw_meshes_in_depth_first_pre_order() {
    let root = SceneNode::new("root")
        .with_child(
            cube_node("a")
                .with_child(cube_node("a1"))
                .with_child(SceneNode::new("group").with_child(cube_node("a21"))),
        )
        .with_child(cube_node("b"));
    let names: Vec<&str> = root
        .draw_order()
        .into_iter()
        .map(|node| node.name.as_str())
        .collect();
    assert_eq!(names, ["a", "a1", "a21", "b"]);
}

#[test]
fn should_draw_nothing_before_upload() {
    let root = SceneNode::new("root").with_child(cube_node("cube"));
    assert_eq!(root.draw_order().len(), 1);
    assert!(root.draw_calls().is_empty());
    assert!(root.find("cube").unwrap().gpu().is_none());
}

#[test]
fn should_compose_one_render_per_subtree() {
    let root = SceneNode::new("root")
        .with_child(cube_node("a").with_child(cube_node("a1")))
        .with_child(cube_node("b"));
    let Render::Composed(parts) = root.get_render() else {
        panic!("an inner node should compose its children");
    };
    assert_eq!(parts.len(), 3);
    assert!(matches!(parts[0], Render::None));
    assert!(matches!(&parts[1], Render::Composed(inner) if inner.len() == 2));
    assert!(matches!(parts[2], Render::None));

    let mut calls = Vec::new();
    Render::Composed(parts).flatten(&mut calls);
    assert!(calls.is_empty());
}

#[test]
fn should_find_nodes_anywhere_in_the_tree() {
    let mut root = SceneNode::new("root")
        .with_child(SceneNode::new("a").with_child(SceneNode::new("deep")))
        .with_child(SceneNode::new("b"));
    assert_eq!(root.find("root").map(|n| n.name.as_str()), Some("root"));
    assert!(root.find("deep").is_some());
    assert!(root.find("missing").is_none());

    root.find_mut("deep").unwrap().set_position(vec3(0.0, 3.0, 0.0));
    assert_eq!(root.find("deep").unwrap().position(), vec3(0.0, 3.0, 0.0));
}

#[test]
fn should_return_the_index_of_an_added_child() {
    let mut root = SceneNode::new("root");
    assert_eq!(root.add_child(SceneNode::new("first")), 0);
    assert_eq!(root.add_child(SceneNode::new("second")), 1);
    assert_eq!(root.children()[1].name, "second");
}

#[test]
fn should_keep_angles_within_one_turn() {
    let mut node = SceneNode::new("node").rotated(Axis::U, 370.0);
    assert_eq!(node.angle(Axis::U), 10.0);
    node.rotate(Axis::U, -30.0);
    assert_eq!(node.angle(Axis::U), 340.0);
    node.set_angle(Axis::V, 720.0);
    assert_eq!(node.angle(Axis::V), 0.0);

    assert_eq!(wrap_degrees(360.0), 0.0);
    assert_eq!(wrap_degrees(-90.0), 270.0);
    for angle in [-1e-6, -359.99999, 1e9, -1e9] {
        let wrapped = wrap_degrees(angle);
        assert!((0.0..360.0).contains(&wrapped), "{angle} wrapped to {wrapped}");
    }
}

#[test]
fn should_carry_transform_material_and_mode_in_the_uniform() {
    let material = Material::new([0.1; 4], [0.2, 0.3, 0.4, 1.0], [0.5; 4], 32.0);
    let mut node = cube_node("cube")
        .at(vec3(0.0, 1.0, 0.0))
        .rotated(Axis::W, 90.0)
        .with_material(material)
        .with_render_mode(RenderMode::Lit);
    node.update_world_transforms(&Matrix4::identity());

    let uniform = node.uniform();
    let model: [[f32; 4]; 4] = node.world_transform().into();
    assert_eq!(uniform.model, model);
    assert_eq!(uniform.diffuse, [0.2, 0.3, 0.4, 1.0]);
    assert_eq!(uniform.shininess, 32.0);
    assert_eq!(uniform.mode, RenderMode::Lit.shader_id());

    // For a rigid motion the normal matrix rotates like the model matrix.
    for col in 0..3 {
        for row in 0..3 {
            assert!((uniform.normal[col][row] - model[col][row]).abs() < 1e-5);
        }
    }
}

#[test]
fn should_use_the_default_material_when_none_is_set() {
    let node = cube_node("plain");
    assert_eq!(node.uniform().diffuse, Material::default().diffuse);
    assert_eq!(node.render_mode(), RenderMode::VertexColor);
    assert_eq!(node.uniform().mode, 0);
}

#[test]
fn should_map_render_modes_to_shader_ids() {
    let modes = [
        RenderMode::VertexColor,
        RenderMode::NormalColor,
        RenderMode::Texture,
        RenderMode::Lit,
        RenderMode::LitTexture,
    ];
    for (id, mode) in modes.into_iter().enumerate() {
        assert_eq!(mode.shader_id(), id as u32);
    }
    assert!(RenderMode::LitTexture.uses_texture() && RenderMode::LitTexture.is_lit());
    assert!(RenderMode::Texture.uses_texture() && !RenderMode::Texture.is_lit());
    assert!(!RenderMode::Lit.uses_texture() && RenderMode::Lit.is_lit());
}
