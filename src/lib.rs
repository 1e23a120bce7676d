//! lopix - a low-resolution software pixel engine.
//!
//! Applications draw primitives and sprites onto a [`PixelCanvas`], call
//! [`PixelCanvas::update_display`] to expand the result by an integer factor,
//! and hand the display buffer to a [`Display`] for presentation. All
//! rasterization is integer-only software rendering with source-over alpha
//! compositing.

pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod util;

pub use config::EngineConfig;
pub use display::{Display, InputEvent, Key, MouseButtonKind, PixelCanvas, RenderTarget, Sprite};
pub use error::{Error, Result};
