mod common;

use polyscene::{
    cgmath::{InnerSpace, vec3},
    error::GeometryError,
    resources::primitives::Torus,
};

use crate::common::test_utils::{
    EPS, assert_close, assert_closed_manifold, assert_indices_in_range, assert_outward,
    assert_unit_normals, assert_vec_close,
};

fn tube_distance(x: f64, y: f64, z: f64, outer: f64) -> f64 {
    let radial = (x * x + y * y).sqrt() - outer;
    (radial * radial + z * z).sqrt()
}

#[test]
fn should_place_coarse_torus_vertices_on_the_tube() {
    let mesh = Torus::new(0.25, 0.5).with_resolution(4, 4).generate().unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    for v in mesh.vertices() {
        let p = v.position;
        assert_close(tube_distance(p.x, p.y, p.z, 0.5), 0.25, EPS);
    }
}

#[test]
fn should_follow_resolution_in_counts() {
    for (sides, rings) in [(3, 3), (4, 4), (36, 36), (8, 20)] {
        let torus = Torus::default().with_resolution(sides, rings);
        let mesh = torus.generate().unwrap();
        assert_eq!(mesh.vertex_count(), sides * rings);
        assert_eq!(mesh.vertex_count(), torus.vertex_count());
        assert_eq!(mesh.indices().len(), 6 * sides * rings);
        assert_indices_in_range(&mesh);
    }
}

#[test]
fn should_point_normals_away_from_the_tube_center() {
    let (inner, outer) = (0.25, 0.5);
    let mesh = Torus::new(inner, outer).generate().unwrap();
    assert_unit_normals(&mesh);
    for v in mesh.vertices() {
        let p = v.position;
        let ring = vec3(p.x, p.y, 0.0).normalize() * outer;
        assert_vec_close(v.normal, (p - ring) / inner, EPS);
    }
}

#[test]
fn should_close_the_surface_with_consistent_winding() {
    for (sides, rings) in [(3, 3), (4, 4), (12, 24)] {
        let mesh = Torus::default().with_resolution(sides, rings).generate().unwrap();
        assert_closed_manifold(&mesh);
    }
}

#[test]
fn should_face_every_triangle_outward() {
    assert_outward(&Torus::default().generate().unwrap());
    assert_outward(&Torus::new(0.05, 1.0).with_resolution(6, 8).generate().unwrap());
}

#[test]
fn should_span_the_unit_square_with_texture_coordinates() {
    let (sides, rings) = (5, 7);
    let mesh = Torus::default().with_resolution(sides, rings).generate().unwrap();
    let first = mesh.vertices()[0];
    let last = mesh.vertices()[mesh.vertex_count() - 1];
    assert_close(first.uv.x, 0.0, EPS);
    assert_close(first.uv.y, 0.0, EPS);
    assert_close(last.uv.x, 1.0, EPS);
    assert_close(last.uv.y, 1.0, EPS);
}

#[test]
fn should_reject_bad_parameters() {
    assert_eq!(
        Torus::new(0.5, 0.5).generate().unwrap_err(),
        GeometryError::InvalidTorusRadii {
            inner: 0.5,
            outer: 0.5
        }
    );
    assert!(matches!(
        Torus::new(0.6, 0.5).generate(),
        Err(GeometryError::InvalidTorusRadii { .. })
    ));
    assert!(matches!(
        Torus::default().with_resolution(2, 36).generate(),
        Err(GeometryError::TooFewSlices { shape: "torus", .. })
    ));
    assert!(matches!(
        Torus::default().with_resolution(36, 2).generate(),
        Err(GeometryError::TooFewStacks { shape: "torus", .. })
    ));
    assert!(matches!(
        Torus::new(0.0, 0.5).generate(),
        Err(GeometryError::NonPositiveDimension { name: "inner_radius", .. })
    ));
}
