use anyhow::Result;
use winit::dpi::PhysicalSize;

use spincube_engine::core::{App, AppControl, FrameCtx};
use spincube_engine::device::Gpu;
use spincube_engine::input::{InputFrame, InputState};
use spincube_engine::render::CubeRenderer;
use spincube_engine::transform::{ProjectionPolicy, TransformState};

use crate::config::DemoConfig;

/// The demo application: one cube, one spin, one exit key.
pub struct SpinningCube {
    config: DemoConfig,
    transforms: TransformState,
    renderer: Option<CubeRenderer>,
}

impl SpinningCube {
    pub fn new(config: DemoConfig) -> Self {
        let transforms = TransformState::new(config.eye_offset, &config.projection);
        Self {
            config,
            transforms,
            renderer: None,
        }
    }

    /// A tap that was pressed and released between two frames still counts.
    fn exit_requested(&self, input: &InputState, frame: &InputFrame) -> bool {
        let key = self.config.exit_key;
        input.key_down(key) || frame.was_pressed(key)
    }

    /// Advances the model by one frame; split out so the update is testable without a GPU.
    fn step(&mut self, input: &InputState, frame: &InputFrame, dt: f32) -> AppControl {
        if self.exit_requested(input, frame) {
            log::info!("{} pressed, closing", self.config.exit_key);
            return AppControl::Exit;
        }

        self.transforms.advance(&self.config.spin, dt);
        AppControl::Continue
    }

    /// Under `TrackWindow`, re-derives the projection aspect from `size`.
    fn sync_projection(&mut self, size: PhysicalSize<u32>) {
        if self.config.projection_policy != ProjectionPolicy::TrackWindow {
            return;
        }
        self.config.projection = self
            .config
            .projection
            .with_target_size(size.width, size.height);
        self.transforms.set_projection(&self.config.projection);
    }
}

impl App for SpinningCube {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        self.renderer = Some(CubeRenderer::new(gpu.device(), gpu.surface_format())?);
        self.sync_projection(gpu.size());
        Ok(())
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        self.sync_projection(size);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.step(ctx.input, ctx.input_frame, ctx.time.dt) == AppControl::Exit {
            return AppControl::Exit;
        }

        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        let transforms = &self.transforms;
        ctx.render(self.config.clear_color, |rctx, target| {
            renderer.draw(rctx, target, transforms)
        })
    }
}
