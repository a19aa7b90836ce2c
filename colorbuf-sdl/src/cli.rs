use colorbuf_core::{Color, PixelFormat, Scaling};

pub const COLORBUF_BIN: &str = "colorbuf";
pub const COLORBUF_STYLIZED: &str = "ColorBuf";
const ABOUT: &str = "Fills a color buffer every frame and presents it through SDL.";
const AFTER_HELP: &str = "Bindings:

    | Action     | Key    |
    | ---------- | ------ |
    | Fullscreen | F      |
    | Quit       | Escape |

Set RUST_LOG (e.g. RUST_LOG=debug) to change the log level.
";

pub trait AppOption: Default + Clone + Copy + clap::ValueEnum {
    fn str(self) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatOption {
    #[default]
    Argb8888,
    Rgba8888,
}

impl AppOption for FormatOption {
    fn str(self) -> &'static str {
        match self {
            Self::Argb8888 => "argb8888",
            Self::Rgba8888 => "rgba8888",
        }
    }
}

impl From<FormatOption> for PixelFormat {
    #[inline]
    fn from(format: FormatOption) -> Self {
        match format {
            FormatOption::Argb8888 => Self::Argb8888,
            FormatOption::Rgba8888 => Self::Rgba8888,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScalingOption {
    #[default]
    Stretch,
    PixelPerfect,
}

impl AppOption for ScalingOption {
    fn str(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::PixelPerfect => "pixel-perfect",
        }
    }
}

impl From<ScalingOption> for Scaling {
    #[inline]
    fn from(scaling: ScalingOption) -> Self {
        match scaling {
            ScalingOption::Stretch => Self::Stretch,
            ScalingOption::PixelPerfect => Self::PixelPerfect,
        }
    }
}

#[derive(clap::Parser, Debug)]
#[command(name = COLORBUF_BIN, about = ABOUT, after_help = AFTER_HELP)]
pub struct Cli {
    #[arg(
        long,
        help = "Color buffer width in pixels",
        default_value_t = 320,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    width: u32,
    #[arg(
        long,
        help = "Color buffer height in pixels",
        default_value_t = 240,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    height: u32,
    #[arg(
        short,
        long,
        help = "Fill color",
        long_help = "Fill color as a packed 32-bit value in the selected pixel format, \
           written in hex with an optional 0x or # prefix.",
        default_value = "0xFF202020"
    )]
    color: Color,
    #[arg(
        short,
        long,
        help = "Pixel format of the buffer and texture",
        default_value = FormatOption::default().str(),
        value_enum
    )]
    format: FormatOption,
    #[arg(
        short,
        long,
        help = "Initial window size as a multiple of the buffer size",
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..=16)
    )]
    scale: u32,
    #[arg(
        long,
        help = "How the buffer is fitted into the window",
        default_value = ScalingOption::default().str(),
        value_enum
    )]
    scaling: ScalingOption,
    #[arg(long, help = "Don't wait for vertical sync when presenting")]
    no_vsync: bool,
    #[arg(
        long,
        help = "Frame rate cap",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    fps: Option<u32>,
    #[arg(
        long,
        help = "Exit after presenting this many frames",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    frames: Option<u64>,
    #[arg(
        long,
        help = "Consecutive failed frames tolerated before giving up",
        default_value_t = 60
    )]
    max_failed_frames: u32,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            color: self.color,
            format: self.format.into(),
            scale: self.scale,
            scaling: self.scaling.into(),
            vsync: !self.no_vsync,
            fps: self.fps,
            frames: self.frames,
            max_failed_frames: self.max_failed_frames,
        }
    }
}

/// Settings for the window, the color buffer and the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub color: Color,
    pub format: PixelFormat,
    pub scale: u32,
    pub scaling: Scaling,
    pub vsync: bool,
    pub fps: Option<u32>,
    pub frames: Option<u64>,
    pub max_failed_frames: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            color: Color(0xFF20_2020),
            format: PixelFormat::Argb8888,
            scale: 3,
            scaling: Scaling::Stretch,
            vsync: true,
            fps: None,
            frames: None,
            max_failed_frames: 60,
        }
    }
}

impl Config {
    #[must_use]
    pub const fn window_size(&self) -> (u32, u32) {
        (
            self.width.saturating_mul(self.scale),
            self.height.saturating_mul(self.scale),
        )
    }
}
