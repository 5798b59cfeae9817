/// A single acquired swapchain frame.
///
/// Holding the surface texture blocks acquisition of the next one, so submit
/// it promptly.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
