// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bytemuck::{Pod, Zeroable};
use pupsquad_core::frame::FramePacket;
use pupsquad_core::units::{SCREEN_HEIGHT, SCREEN_WIDTH};
use wgpu::util::DeviceExt;

/// One clip-space vertex of a flat-colored quad.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct QuadVertex {
    position: [f32; 2],
    color: [f32; 4],
}

impl QuadVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Geometry built from one frame packet, ready to draw.
struct FrameGeometry {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

/// Renders a [`FramePacket`]'s quads in submission order.
///
/// Quad coordinates are design-resolution pixels; the vertex data is
/// converted to clip space on the CPU, so the scene stretches with the
/// window rather than revealing more of the world.
pub struct QuadPipeline {
    pipeline: wgpu::RenderPipeline,
}

impl QuadPipeline {
    /// Creates the pipeline for the given surface format.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Quad Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/quad.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Quad Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Quad Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[QuadVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self { pipeline }
    }

    /// Encodes the packet into `view`, clearing it first.
    pub fn encode(
        &self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        packet: &FramePacket,
    ) {
        let geometry = Self::build_geometry(device, packet);
        let clear = packet.clear_color;

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Quad Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear.r as f64,
                        g: clear.g as f64,
                        b: clear.b as f64,
                        a: clear.a as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Some(geometry) = geometry {
            pass.set_pipeline(&self.pipeline);
            pass.set_vertex_buffer(0, geometry.vertex_buffer.slice(..));
            pass.set_index_buffer(geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..geometry.index_count, 0, 0..1);
        }
    }

    /// Builds per-frame vertex/index buffers from the packet's quads.
    fn build_geometry(device: &wgpu::Device, packet: &FramePacket) -> Option<FrameGeometry> {
        if packet.quads.is_empty() {
            return None;
        }

        let mut vertices = Vec::with_capacity(packet.quads.len() * 4);
        let mut indices = Vec::with_capacity(packet.quads.len() * 6);

        for quad in &packet.quads {
            let base = vertices.len() as u32;
            let color = [quad.color.r, quad.color.g, quad.color.b, quad.color.a];
            let (left, top) = to_clip_space(quad.rect.min.x, quad.rect.min.y);
            let (right, bottom) = to_clip_space(quad.rect.max.x, quad.rect.max.y);

            vertices.push(QuadVertex {
                position: [left, top],
                color,
            });
            vertices.push(QuadVertex {
                position: [right, top],
                color,
            });
            vertices.push(QuadVertex {
                position: [right, bottom],
                color,
            });
            vertices.push(QuadVertex {
                position: [left, bottom],
                color,
            });
            indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Some(FrameGeometry {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        })
    }
}

/// Maps design-resolution pixels (y down) to clip space (y up).
fn to_clip_space(x: f32, y: f32) -> (f32, f32) {
    (
        x / SCREEN_WIDTH as f32 * 2.0 - 1.0,
        1.0 - y / SCREEN_HEIGHT as f32 * 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_space_corners() {
        assert_eq!(to_clip_space(0.0, 0.0), (-1.0, 1.0));
        assert_eq!(to_clip_space(1280.0, 720.0), (1.0, -1.0));
        assert_eq!(to_clip_space(640.0, 360.0), (0.0, 0.0));
    }
}
