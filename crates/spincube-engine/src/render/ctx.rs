use winit::dpi::PhysicalSize;

/// Renderer-facing context (queue + viewport).
pub struct RenderCtx<'a> {
    pub queue: &'a wgpu::Queue,
    /// Drawable size in physical pixels.
    pub viewport: PhysicalSize<u32>,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(queue: &'a wgpu::Queue, viewport: PhysicalSize<u32>) -> Self {
        Self { queue, viewport }
    }
}

/// Target for drawing (encoder + color view + depth view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub depth_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        depth_view: &'a wgpu::TextureView,
    ) -> Self {
        Self {
            encoder,
            color_view,
            depth_view,
        }
    }
}
