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

//! The wgpu renderer: consumes [`FramePacket`]s produced by the game crates.

mod context;
mod quad_pipeline;

use std::sync::Arc;

use anyhow::Result;
use pupsquad_core::frame::FramePacket;
use winit::window::Window;

pub use context::GraphicsContext;
pub use quad_pipeline::QuadPipeline;

/// The complete rendering stack for one window.
pub struct Renderer {
    context: GraphicsContext,
    quad_pipeline: QuadPipeline,
}

impl Renderer {
    /// Initializes wgpu and the quad pipeline for `window`.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self> {
        let context = GraphicsContext::new(window, vsync).await?;
        let quad_pipeline = QuadPipeline::new(&context.device, context.surface_config.format);
        Ok(Self {
            context,
            quad_pipeline,
        })
    }

    /// Resizes the swapchain to the new window dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    /// Draws one frame packet to the window surface.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped; the
    /// next redraw draws normally.
    pub fn render(&mut self, packet: &FramePacket) -> Result<()> {
        let surface_texture = match self.context.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated; reconfiguring.");
                self.context.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timed out acquiring the surface texture; skipping frame.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Frame Encoder"),
                });

        self.quad_pipeline
            .encode(&self.context.device, &mut encoder, &view, packet);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }
}
