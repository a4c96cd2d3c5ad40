//! Generated triangle meshes and their GPU counterparts.
//!
//! A [`MeshData`] is filled once by a generator and never touched again.
//! [`MeshData::upload`] turns it into a [`GpuMesh`], whose buffers live exactly
//! as long as the scene node that owns it.

use wgpu::util::DeviceExt;

use crate::data_structures::vertex::{Vertex, VertexRaw};

/// Indexed triangle-list geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl MeshData {
    pub(crate) fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Add a vertex and return its index
    pub(crate) fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    pub(crate) fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Add a triangle unless two of its corners sit on the same point.
    ///
    /// Returns whether the triangle was emitted.
    pub(crate) fn add_triangle_non_degenerate(&mut self, i0: u32, i1: u32, i2: u32) -> bool {
        let p = |i: u32| self.vertices[i as usize].position;
        let (a, b, c) = (p(i0), p(i1), p(i2));
        if a == b || b == c || a == c {
            return false;
        }
        self.add_triangle(i0, i1, i2);
        true
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Packed GPU form of every vertex, in order.
    pub fn to_raw(&self) -> Vec<VertexRaw> {
        self.vertices.iter().map(Vertex::to_raw).collect()
    }

    /// Check the triangle-list invariants: the index count is a multiple of
    /// three and every index points at an existing vertex.
    pub fn validate(&self) -> Result<(), String> {
        if self.indices.len() % 3 != 0 {
            return Err(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            ));
        }
        let count = self.vertices.len();
        match self.indices.iter().position(|&i| i as usize >= count) {
            Some(at) => Err(format!(
                "index {} at position {} is out of range for {} vertices",
                self.indices[at], at, count
            )),
            None => Ok(()),
        }
    }

    /// Create the vertex and index buffers for this mesh.
    pub fn upload(&self, device: &wgpu::Device, label: &str) -> GpuMesh {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(&self.to_raw()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(&self.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        GpuMesh {
            vertex_buffer,
            index_buffer,
            num_elements: self.indices.len() as u32,
        }
    }
}

/// Vertex and index buffers of an uploaded [`MeshData`].
///
/// Dropping it releases both buffers.
#[derive(Debug)]
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}
