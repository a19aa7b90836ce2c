use {
    crate::{
        Config, Error,
        frame::{FrameLoop, Frontend},
        video,
    },
    colorbuf_core::ColorBuffer,
    sdl2::{
        EventPump, Sdl,
        event::{Event, WindowEvent},
        keyboard::Scancode,
    },
    std::time::Duration,
};

/// Window, renderer and event pump driven by the [`FrameLoop`].
pub struct SdlFrontend {
    _sdl: Sdl,
    events: EventPump,
    video: video::Renderer,
    quit: bool,
}

impl SdlFrontend {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let sdl = sdl2::init().map_err(Error::init)?;
        let video = video::Renderer::new(&sdl, config)?;
        let events = sdl.event_pump().map_err(Error::init)?;

        Ok(Self {
            _sdl: sdl,
            events,
            video,
            quit: false,
        })
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit { .. } => self.quit = true,
            Event::Window { win_event, .. } => match win_event {
                WindowEvent::Resized(..) | WindowEvent::SizeChanged(..) => {
                    self.video.resize_viewport();
                }
                WindowEvent::Close => self.quit = true,
                _ => (),
            },
            Event::KeyDown {
                scancode: Some(key),
                repeat: false,
                ..
            } => match key {
                Scancode::Escape => self.quit = true,
                Scancode::F => self.video.toggle_fullscreen(),
                _ => (),
            },
            _ => (),
        }
    }
}

impl Frontend for SdlFrontend {
    fn poll_events(&mut self) -> bool {
        while let Some(event) = self.events.poll_event() {
            self.handle_event(event);
        }
        !self.quit
    }

    fn draw_frame(&mut self, buffer: &ColorBuffer) -> Result<bool, Error> {
        self.video.draw_frame(buffer)
    }

    fn idle(&mut self, timeout: Duration) -> bool {
        let ms = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX).max(1);
        if let Some(event) = self.events.wait_event_timeout(ms) {
            self.handle_event(event);
        }
        !self.quit
    }
}

pub struct App {
    frontend: SdlFrontend,
    frame_loop: FrameLoop,
}

impl App {
    pub fn new(config: Config) -> Result<Self, Error> {
        let frame_loop = FrameLoop::new(&config)?;
        let frontend = SdlFrontend::new(&config)?;

        Ok(Self {
            frontend,
            frame_loop,
        })
    }

    /// Runs until the window is closed or the frame limit is reached, returns
    /// the number of frames presented.
    pub fn run(&mut self) -> Result<u64, Error> {
        self.frame_loop.run(&mut self.frontend)
    }
}
