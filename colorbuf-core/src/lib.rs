//! # Color buffers
//!
//! A [`ColorBuffer`] is one frame of packed 32-bit colors kept on the CPU,
//! row-major and addressed as `y * width + x`. Frontends fill it every frame
//! and upload its bytes into a streaming texture of the same size and
//! [`PixelFormat`].
//!
//! This crate has no platform dependencies; the SDL frontend lives in
//! `colorbuf-sdl`.
//!
//! ```
//! use colorbuf_core::{Color, ColorBuffer};
//!
//! let mut buf = ColorBuffer::new(2, 2)?;
//! buf.fill(Color(0xFFAA_BBCC));
//! assert!(buf.pixels().iter().all(|&px| px == 0xFFAA_BBCC));
//! # Ok::<(), colorbuf_core::Error>(())
//! ```
//!
//! Allocation is reported through `tracing` at debug level, install a
//! subscriber in the application to see it.

extern crate alloc;

mod buffer;
mod color;
mod error;
mod viewport;

pub use {
    buffer::{ColorBuffer, fill_color_buffer},
    color::{Color, PixelFormat},
    error::Error,
    viewport::{Scaling, Viewport},
};
