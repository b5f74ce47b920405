use crate::view::Scene;

pub trait RenderBackend {
    /// Width in columns the backend lays lines out against.
    fn configure_surface(&mut self, columns: u16);
    fn frame(&mut self, scene: &Scene) -> std::io::Result<()>;
}
