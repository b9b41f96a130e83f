use glam::Vec3;
use winit::dpi::LogicalSize;

use spincube_engine::device::GpuInit;
use spincube_engine::input::Key;
use spincube_engine::transform::{Projection, ProjectionPolicy, Spin};
use spincube_engine::window::RuntimeConfig;

/// Everything the demo can be tuned with. There is no external config source;
/// the defaults reproduce the classic 800x600 spinning cube.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub spin: Spin,
    pub projection: Projection,
    pub projection_policy: ProjectionPolicy,
    /// View translation applied to the whole scene.
    pub eye_offset: Vec3,
    pub exit_key: Key,
    pub clear_color: wgpu::Color,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let size = LogicalSize::new(800.0, 600.0);
        Self {
            runtime: RuntimeConfig {
                title: "Spinning Cube".to_string(),
                initial_size: size,
            },
            // Vertex colors go to the swapchain as-is.
            gpu: GpuInit {
                prefer_srgb: false,
                ..GpuInit::default()
            },
            spin: Spin::default(),
            projection: Projection {
                aspect: (size.width / size.height) as f32,
                ..Projection::default()
            },
            projection_policy: ProjectionPolicy::Fixed,
            eye_offset: Vec3::new(0.0, 0.0, -3.0),
            exit_key: Key::Escape,
            clear_color: wgpu::Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_reference_scene() {
        let c = DemoConfig::default();
        assert_eq!(c.spin.speed, 1.0);
        assert_eq!(c.spin.axis, Vec3::new(0.5, 1.0, 0.0));
        assert_eq!(c.projection, Projection::default());
        assert_eq!(c.projection_policy, ProjectionPolicy::Fixed);
        assert_eq!(c.exit_key, Key::Escape);
        assert_eq!(c.runtime.initial_size, LogicalSize::new(800.0, 600.0));
    }
}
