use {
    crate::{Config, Error, cli::COLORBUF_STYLIZED},
    colorbuf_core::{ColorBuffer, PixelFormat, Scaling, Viewport},
    sdl2::{
        Sdl,
        pixels::{self, PixelFormatEnum},
        rect::Rect,
        render::{BlendMode, Texture, WindowCanvas},
        video::FullscreenType,
    },
    tracing::{debug, warn},
};

#[must_use]
pub const fn sdl_format(format: PixelFormat) -> PixelFormatEnum {
    match format {
        PixelFormat::Argb8888 => PixelFormatEnum::ARGB8888,
        PixelFormat::Rgba8888 => PixelFormatEnum::RGBA8888,
    }
}

/// Uploads `buffer` into `texture`, draws the texture into `target` (the
/// whole render target when `None`) and presents the frame.
///
/// The texture must have the buffer's dimensions; a mismatch is reported
/// before anything is uploaded. No retries are attempted, the caller decides
/// whether to skip the frame or give up.
pub fn render_color_buffer(
    canvas: &mut WindowCanvas,
    buffer: &ColorBuffer,
    texture: &mut Texture,
    target: Option<Rect>,
) -> Result<(), Error> {
    let query = texture.query();
    buffer.check_dimensions(query.width, query.height)?;

    texture.update(None, buffer.as_bytes(), buffer.pitch())?;

    canvas.clear();
    canvas
        .copy(texture, None, target)
        .map_err(|msg| Error::Draw { msg })?;
    canvas.present();

    Ok(())
}

/// Creates the streaming texture the color buffer is uploaded into. Blending
/// is off, the alpha channel is copied like any other.
pub fn create_color_buffer_texture(
    canvas: &WindowCanvas,
    config: &Config,
) -> Result<Texture, Error> {
    let mut texture = canvas
        .texture_creator()
        .create_texture_streaming(sdl_format(config.format), config.width, config.height)
        .map_err(Error::init)?;
    texture.set_blend_mode(BlendMode::None);

    Ok(texture)
}

/// Destination for the texture copy, `None` when the viewport covers the
/// whole window.
#[must_use]
pub fn target_rect(viewport: Viewport, window: (u32, u32)) -> Option<Rect> {
    (!viewport.covers(window))
        .then(|| Rect::new(viewport.x, viewport.y, viewport.width, viewport.height))
}

pub struct Renderer {
    canvas: WindowCanvas,
    texture: Texture,
    scaling: Scaling,
    src_size: (u32, u32),
    window: (u32, u32),
    viewport: Option<Viewport>,
    fullscreen: bool,
}

impl Renderer {
    pub fn new(sdl: &Sdl, config: &Config) -> Result<Self, Error> {
        let video_subsystem = sdl.video().map_err(Error::init)?;
        let (win_width, win_height) = config.window_size();

        let window = video_subsystem
            .window(COLORBUF_STYLIZED, win_width, win_height)
            .position_centered()
            .resizable()
            .allow_highdpi()
            .build()
            .map_err(Error::init)?;

        let mut canvas = window.into_canvas().accelerated();
        if config.vsync {
            canvas = canvas.present_vsync();
        }
        let canvas = canvas.build().map_err(Error::init)?;

        Self::with_canvas(canvas, config)
    }

    /// Creates the streaming texture on an existing canvas.
    pub fn with_canvas(mut canvas: WindowCanvas, config: &Config) -> Result<Self, Error> {
        let texture = create_color_buffer_texture(&canvas, config)?;

        canvas.set_draw_color(pixels::Color::BLACK);

        debug!(
            width = config.width,
            height = config.height,
            format = ?config.format,
            renderer = canvas.info().name,
            "created color buffer texture"
        );

        let mut res = Self {
            canvas,
            texture,
            scaling: config.scaling,
            src_size: (config.width, config.height),
            window: (0, 0),
            viewport: None,
            fullscreen: false,
        };
        res.resize_viewport();

        Ok(res)
    }

    /// Recomputes where the texture lands, call after the window changed size.
    pub fn resize_viewport(&mut self) {
        let window = match self.canvas.output_size() {
            Ok(size) => size,
            Err(msg) => {
                warn!("couldn't query output size: {msg}");
                self.canvas.window().size()
            }
        };

        self.window = window;
        self.viewport = Viewport::fit(self.src_size, window, self.scaling);
        debug!(?window, viewport = ?self.viewport, "viewport resized");
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        let mode = if self.fullscreen {
            FullscreenType::Desktop
        } else {
            FullscreenType::Off
        };

        if let Err(msg) = self.canvas.window_mut().set_fullscreen(mode) {
            warn!("couldn't toggle fullscreen: {msg}");
            self.fullscreen = !self.fullscreen;
        }
    }

    #[must_use]
    pub const fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Presents `buffer`. Returns `Ok(false)` without touching the texture
    /// when the window has no area to draw into.
    pub fn draw_frame(&mut self, buffer: &ColorBuffer) -> Result<bool, Error> {
        let Some(viewport) = self.viewport else {
            return Ok(false);
        };

        let target = target_rect(viewport, self.window);
        render_color_buffer(&mut self.canvas, buffer, &mut self.texture, target)?;
        Ok(true)
    }
}
