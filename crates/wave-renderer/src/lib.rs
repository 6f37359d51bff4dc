//! Drawing for the wave demos
//!
//! Painters turn a scenario into a [`Canvas`] of flat shapes, the
//! [`Tessellator`] turns those into a colored triangle mesh, and the
//! [`ShapeRenderer`] uploads and draws the mesh inside the letterboxed
//! [`Viewport`]. Everything except the renderer itself runs on the CPU.

pub mod color;
pub mod painter;
pub mod renderer;
pub mod shapes;
pub mod tessellate;
pub mod viewport;

pub use color::*;
pub use painter::*;
pub use renderer::*;
pub use shapes::*;
pub use tessellate::*;
pub use viewport::*;
