//! Rendering module
//!
//! The game draws through the [`Surface`] trait: Canvas 2D in the browser,
//! a recording [`DrawList`] everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;
pub mod scene;
pub mod sprite;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, WebImage};
pub use recorder::{DrawCommand, DrawList, NamedImage};
pub use sprite::{AnimationStrip, SheetGrid, SpriteAtlas, SpriteError};
pub use surface::{Assets, Color, Image, Rect, Surface};
