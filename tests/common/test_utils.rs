#![allow(dead_code)]

use std::collections::HashMap;

use polyscene::{
    cgmath::{InnerSpace, Matrix4, Vector3},
    data_structures::mesh::MeshData,
};

pub const EPS: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() <= eps,
        "expected {expected}, got {actual} (eps {eps})"
    );
}

pub fn assert_vec_close(actual: Vector3<f64>, expected: Vector3<f64>, eps: f64) {
    assert!(
        (actual - expected).magnitude() <= eps,
        "expected {expected:?}, got {actual:?} (eps {eps})"
    );
}

/// Distance between two angles in degrees, accounting for the 360 wrap.
pub fn angle_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

pub fn corners(mesh: &MeshData, tri: [u32; 3]) -> [Vector3<f64>; 3] {
    tri.map(|i| mesh.vertices()[i as usize].position)
}

/// Unnormalized geometric normal following the winding order.
pub fn face_normal(mesh: &MeshData, tri: [u32; 3]) -> Vector3<f64> {
    let [a, b, c] = corners(mesh, tri);
    (b - a).cross(c - a)
}

/// Sum of the stored vertex normals of a triangle.
pub fn vertex_normal_sum(mesh: &MeshData, tri: [u32; 3]) -> Vector3<f64> {
    tri.iter()
        .map(|&i| mesh.vertices()[i as usize].normal)
        .fold(Vector3::new(0.0, 0.0, 0.0), |acc, n| acc + n)
}

/// Every triangle winds counter-clockwise when seen from the side its vertex
/// normals point to.
pub fn assert_outward(mesh: &MeshData) {
    for tri in mesh.triangles() {
        let geometric = face_normal(mesh, tri);
        let shading = vertex_normal_sum(mesh, tri);
        assert!(
            geometric.dot(shading) > 0.0,
            "triangle {tri:?} faces inward: {geometric:?} vs {shading:?}"
        );
    }
}

pub fn assert_indices_in_range(mesh: &MeshData) {
    assert_eq!(mesh.indices().len() % 3, 0);
    let count = mesh.vertex_count() as u32;
    for &i in mesh.indices() {
        assert!(i < count, "index {i} out of range for {count} vertices");
    }
    assert!(mesh.validate().is_ok());
}

pub fn assert_unit_normals(mesh: &MeshData) {
    for (i, v) in mesh.vertices().iter().enumerate() {
        assert!(
            (v.normal.magnitude() - 1.0).abs() < 1e-9,
            "normal {i} is not unit length: {:?}",
            v.normal
        );
    }
}

/// How often each directed edge occurs over all triangles.
pub fn directed_edges(mesh: &MeshData) -> HashMap<(u32, u32), usize> {
    let mut edges = HashMap::new();
    for [a, b, c] in mesh.triangles() {
        for edge in [(a, b), (b, c), (c, a)] {
            *edges.entry(edge).or_insert(0) += 1;
        }
    }
    edges
}

/// Closed and consistently oriented: every directed edge occurs once and its
/// reverse occurs once, so each edge is shared by exactly two triangles.
pub fn assert_closed_manifold(mesh: &MeshData) {
    let edges = directed_edges(mesh);
    for (&(a, b), &count) in &edges {
        assert_eq!(count, 1, "edge {a}->{b} used {count} times");
        assert_eq!(
            edges.get(&(b, a)),
            Some(&1),
            "edge {a}->{b} has no matching reverse edge"
        );
    }
}

pub fn triangle_area(mesh: &MeshData, tri: [u32; 3]) -> f64 {
    face_normal(mesh, tri).magnitude() / 2.0
}

pub fn assert_vec3f_close(actual: Vector3<f32>, expected: Vector3<f32>, eps: f32) {
    assert!(
        (actual - expected).magnitude() <= eps,
        "expected {expected:?}, got {actual:?} (eps {eps})"
    );
}

pub fn assert_matrix_close(actual: Matrix4<f32>, expected: Matrix4<f32>, eps: f32) {
    let a: [[f32; 4]; 4] = actual.into();
    let e: [[f32; 4]; 4] = expected.into();
    for (col_a, col_e) in a.iter().zip(e.iter()) {
        for (x, y) in col_a.iter().zip(col_e.iter()) {
            assert!(
                (x - y).abs() <= eps,
                "matrices differ:\n{actual:?}\nvs\n{expected:?}"
            );
        }
    }
}

/// Translation part of a world transform.
pub fn translation(m: Matrix4<f32>) -> Vector3<f32> {
    m.w.truncate()
}
