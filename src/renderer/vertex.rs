//! Vertex type for the rectangle pipeline

use bytemuck::{Pod, Zeroable};

/// 2D vertex in normalized device coordinates with a flat color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Two triangles covering a pixel rectangle (origin top-left, y down) on a
/// `width` x `height` surface
pub fn rect_vertices(
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    surface: (u32, u32),
    color: [f32; 4],
) -> [Vertex; 6] {
    let (sw, sh) = (surface.0 as f32, surface.1 as f32);
    let to_ndc = |px: f32, py: f32| (px / sw * 2.0 - 1.0, 1.0 - py / sh * 2.0);

    let (l, t) = to_ndc(x, y);
    let (r, b) = to_ndc(x + w, y + h);

    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}
