mod common;

use polyscene::{
    cgmath::vec3,
    data_structures::{
        light::{Light, LightMode, LightSlots},
        scene_graph::RenderMode,
    },
    scenes::{
        Scene, SceneThree, SceneTwo,
        scene_three::{CUBE_COUNT, CUBE_RING_RADIUS, LIGHT_ORBIT_RADIUS, LIGHT_SPEEDS},
    },
};

use crate::common::test_utils::{angle_distance, assert_vec3f_close};

fn drawn_names(scene: &dyn Scene) -> Vec<String> {
    scene
        .root()
        .draw_order()
        .into_iter()
        .map(|node| node.name.clone())
        .collect()
}

#[test]
fn should_show_every_primitive_by_normal_in_scene_two() {
    let scene = SceneTwo::new().unwrap();
    assert_eq!(scene.name(), "two");
    assert_eq!(
        drawn_names(&scene),
        ["cube", "torus", "sphere", "cylinder", "ellipsoid"]
    );
    for node in scene.root().draw_order() {
        assert_eq!(node.render_mode(), RenderMode::NormalColor);
        assert!(node.mesh().unwrap().validate().is_ok());
    }
    assert!(scene.lights().is_empty());
}

#[test]
fn should_clear_leftover_lights_and_stay_still_in_scene_two() {
    let mut scene = SceneTwo::new().unwrap();
    let mut slots = LightSlots::new();
    slots.set(4, Light::point(vec3(0.0, 0.0, 0.0), [1.0; 4])).unwrap();
    scene.initialize(&mut slots).unwrap();
    assert_eq!(slots.active_count(), 0);

    let before: Vec<_> = scene.root().children().iter().map(|n| n.position()).collect();
    for _ in 0..10 {
        scene.animation_update(&mut slots).unwrap();
    }
    let after: Vec<_> = scene.root().children().iter().map(|n| n.position()).collect();
    assert_eq!(before, after);
}

#[test]
fn should_lay_out_scene_three() {
    let scene = SceneThree::new().unwrap();
    assert_eq!(scene.name(), "three");
    let children = scene.root().children();
    assert_eq!(children.len(), CUBE_COUNT + 3 + 3);

    for cube in &children[..CUBE_COUNT] {
        assert_eq!(cube.render_mode(), RenderMode::LitTexture);
        assert_eq!(cube.texture().unwrap().path, "stoneWall.jpg");
        let p = cube.position();
        assert!(((p.x * p.x + p.z * p.z).sqrt() - CUBE_RING_RADIUS).abs() < 1e-5);
    }
    for name in ["torus", "torus2", "sphere"] {
        assert!(scene.root().find(name).unwrap().render_mode().is_lit());
    }
    for i in 0..3 {
        let marker = scene.root().find(&format!("light_marker_{i}")).unwrap();
        assert_eq!(marker.render_mode(), RenderMode::VertexColor);
    }
    assert_eq!(drawn_names(&scene).len(), children.len());
}

#[test]
fn should_fill_one_slot_per_light_in_scene_three() {
    let mut scene = SceneThree::new().unwrap();
    let mut slots = LightSlots::new();
    scene.initialize(&mut slots).unwrap();
    assert_eq!(slots.active_count(), 3);
    assert!(matches!(slots.get(0).unwrap().mode, LightMode::Directional { .. }));
    assert!(matches!(slots.get(1).unwrap().mode, LightMode::Point));
    assert!(matches!(slots.get(2).unwrap().mode, LightMode::Spot { .. }));
}

#[test]
fn should_orbit_scene_three_lights_with_their_markers() {
    let mut scene = SceneThree::new().unwrap();
    let mut slots = LightSlots::new();
    scene.initialize(&mut slots).unwrap();
    scene.animation_update(&mut slots).unwrap();

    for (i, rig) in scene.light_rigs().iter().enumerate() {
        assert_eq!(rig.angle, LIGHT_SPEEDS[i]);
        let light = slots.get(i).unwrap();
        let expected = rig.position_at(rig.angle);
        assert_vec3f_close(light.position, expected, 1e-6);
        let marker = &scene.root().children()[rig.marker];
        assert_vec3f_close(marker.position(), expected, 1e-6);
    }

    // The first light circles above the scene, the others around the origin.
    let first = slots.get(0).unwrap().position;
    assert!((first.y - 2.0).abs() < 1e-5);
    assert!(((first.x * first.x + first.z * first.z).sqrt() - LIGHT_ORBIT_RADIUS).abs() < 1e-4);
    match slots.get(0).unwrap().mode {
        LightMode::Directional { direction } => assert_eq!(direction, first),
        other => panic!("expected a directional light, got {other:?}"),
    }
    for i in 1..3 {
        let p = slots.get(i).unwrap().position;
        assert!(((p.x * p.x + p.y * p.y + p.z * p.z).sqrt() - LIGHT_ORBIT_RADIUS).abs() < 1e-4);
    }
}

#[test]
fn should_return_scene_three_to_its_start_after_a_full_light_period() {
    let mut scene = SceneThree::new().unwrap();
    let mut slots = LightSlots::new();
    scene.initialize(&mut slots).unwrap();
    let start = scene.light_rigs()[0].position_at(0.0);
    // 720 frames is exactly one turn at 0.5 deg/frame.
    for _ in 0..720 {
        scene.animation_update(&mut slots).unwrap();
    }
    assert!(angle_distance(scene.light_rigs()[0].angle, 0.0) < 0.05);
    assert_vec3f_close(slots.get(0).unwrap().position, start, 1e-2);

    for cube in &scene.root().children()[..CUBE_COUNT] {
        let p = cube.position();
        assert!(((p.x * p.x + p.z * p.z).sqrt() - CUBE_RING_RADIUS).abs() < 1e-4);
    }
}
