mod common;

use polyscene::{
    cgmath::{InnerSpace, vec3},
    error::GeometryError,
    resources::primitives::Ellipsoid,
};

use crate::common::test_utils::{
    EPS, assert_close, assert_indices_in_range, assert_outward, assert_unit_normals,
    assert_vec_close, corners, triangle_area,
};

#[test]
fn should_duplicate_the_seam_and_skip_pole_triangles() {
    for (stacks, slices) in [(2, 3), (5, 7), (18, 36)] {
        let ellipsoid = Ellipsoid::new(0.6, 0.3, 0.9).with_resolution(stacks, slices);
        let mesh = ellipsoid.generate().unwrap();
        assert_eq!(mesh.vertex_count(), (stacks + 1) * (slices + 1));
        assert_eq!(mesh.vertex_count(), ellipsoid.vertex_count());
        assert_eq!(mesh.triangle_count(), 2 * slices * (stacks - 1));
        assert_indices_in_range(&mesh);
    }
}

#[test]
fn should_place_vertices_on_the_surface() {
    let (a, b, c) = (0.6, 0.3, 0.9);
    let mesh = Ellipsoid::new(a, b, c).generate().unwrap();
    for v in mesh.vertices() {
        let p = v.position;
        assert_close((p.x / a).powi(2) + (p.y / b).powi(2) + (p.z / c).powi(2), 1.0, EPS);
    }
}

#[test]
fn should_place_poles_on_the_y_axis() {
    let (stacks, slices) = (6, 8);
    let mesh = Ellipsoid::new(0.6, 0.3, 0.9)
        .with_resolution(stacks, slices)
        .generate()
        .unwrap();
    let row = slices + 1;
    for v in &mesh.vertices()[..row] {
        assert_eq!(v.position, vec3(0.0, 0.3, 0.0));
        assert_vec_close(v.normal, vec3(0.0, 1.0, 0.0), EPS);
    }
    for v in &mesh.vertices()[stacks * row..] {
        assert_eq!(v.position, vec3(0.0, -0.3, 0.0));
        assert_vec_close(v.normal, vec3(0.0, -1.0, 0.0), EPS);
    }
}

#[test]
fn should_repeat_the_first_column_at_the_seam_with_u_of_one() {
    let (stacks, slices) = (4, 9);
    let mesh = Ellipsoid::default()
        .with_resolution(stacks, slices)
        .generate()
        .unwrap();
    let row = slices + 1;
    for i in 0..=stacks {
        let first = mesh.vertices()[i * row];
        let seam = mesh.vertices()[i * row + slices];
        assert_eq!(first.position, seam.position);
        assert_close(first.uv.x, 0.0, EPS);
        assert_close(seam.uv.x, 1.0, EPS);
        assert_close(seam.uv.y, i as f64 / stacks as f64, EPS);
    }
}

#[test]
fn should_follow_the_surface_gradient_with_normals() {
    let (a, b, c) = (0.6, 0.3, 0.9);
    let mesh = Ellipsoid::new(a, b, c).generate().unwrap();
    assert_unit_normals(&mesh);
    for v in mesh.vertices() {
        let p = v.position;
        let gradient = vec3(p.x / (a * a), p.y / (b * b), p.z / (c * c)).normalize();
        assert_vec_close(v.normal, gradient, EPS);
    }
}

#[test]
fn should_use_scaled_positions_as_sphere_normals() {
    let r = 0.4;
    let mesh = Ellipsoid::sphere(r).generate().unwrap();
    for v in mesh.vertices() {
        assert_vec_close(v.normal, v.position / r, EPS);
    }
}

#[test]
fn should_not_repeat_a_position_within_a_triangle() {
    let mesh = Ellipsoid::new(0.6, 0.3, 0.9)
        .with_resolution(3, 5)
        .generate()
        .unwrap();
    for tri in mesh.triangles() {
        let [p0, p1, p2] = corners(&mesh, tri);
        assert!(p0 != p1 && p1 != p2 && p0 != p2, "degenerate {tri:?}");
        assert!(triangle_area(&mesh, tri) > 1e-12);
    }
}

#[test]
fn should_face_every_triangle_outward() {
    assert_outward(&Ellipsoid::default().generate().unwrap());
    assert_outward(&Ellipsoid::sphere(1.0).with_resolution(2, 3).generate().unwrap());
}

#[test]
fn should_reject_bad_parameters() {
    assert_eq!(
        Ellipsoid::default().with_resolution(1, 36).generate().unwrap_err(),
        GeometryError::TooFewStacks {
            shape: "ellipsoid",
            min: 2,
            got: 1
        }
    );
    assert!(matches!(
        Ellipsoid::default().with_resolution(18, 2).generate(),
        Err(GeometryError::TooFewSlices { got: 2, .. })
    ));
    assert!(matches!(
        Ellipsoid::new(0.6, 0.0, 0.9).generate(),
        Err(GeometryError::NonPositiveDimension { name: "radius_y", .. })
    ));
    assert!(Ellipsoid::sphere(-1.0).generate().is_err());
}
