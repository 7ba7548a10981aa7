//! Rendering
//!
//! Shapes are triangle lists in playfield pixels, drawn with WebGPU; text
//! goes to DOM elements layered over the canvas.

pub mod headless;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod hud;

pub use headless::HeadlessCanvas;
pub use pipeline::RenderState;

#[cfg(target_arch = "wasm32")]
pub use canvas::WebCanvas;
#[cfg(target_arch = "wasm32")]
pub use hud::Hud;
