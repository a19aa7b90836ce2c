//! SDL frontend for [`colorbuf_core`]: a window, a streaming texture with the
//! color buffer's size and format, and a frame loop that fills the buffer and
//! presents it every frame.

mod app;
mod cli;
mod error;
mod frame;
mod pacing;
mod video;

pub use {
    app::{App, SdlFrontend},
    cli::{AppOption, COLORBUF_BIN, Cli, Config, FormatOption, ScalingOption},
    error::Error,
    frame::{FailedFrames, FrameLoop, Frontend, Step},
    pacing::Pacer,
    video::{
        Renderer, create_color_buffer_texture, render_color_buffer, sdl_format, target_rect,
    },
};
