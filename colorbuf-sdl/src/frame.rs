use {
    crate::{Config, Error, pacing::Pacer},
    colorbuf_core::{Color, ColorBuffer},
    std::time::Duration,
    tracing::{error, info, warn},
};

/// What the frame loop needs from a windowing backend.
pub trait Frontend {
    /// Handles pending input, returns `false` once the user asked to quit.
    fn poll_events(&mut self) -> bool;

    /// Presents `buffer`. `Ok(false)` means there was nowhere to draw and the
    /// frame was skipped.
    fn draw_frame(&mut self, buffer: &ColorBuffer) -> Result<bool, Error>;

    /// Blocks until input arrives or `timeout` passes, returns `false` once
    /// the user asked to quit.
    fn idle(&mut self, timeout: Duration) -> bool;
}

/// Counts consecutive failed frames and decides when the loop gives up.
#[derive(Debug)]
pub struct FailedFrames {
    consecutive: u32,
    limit: u32,
}

impl FailedFrames {
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            consecutive: 0,
            limit,
        }
    }

    #[must_use]
    pub const fn consecutive(&self) -> u32 {
        self.consecutive
    }

    /// Swallows a failed frame until `limit` failures happened in a row,
    /// then hands the error back. A limit of zero gives up on the first one.
    pub fn record<T>(&mut self, result: Result<T, Error>) -> Result<Option<T>, Error> {
        match result {
            Ok(value) => {
                self.consecutive = 0;
                Ok(Some(value))
            }
            Err(err) => {
                self.consecutive = self.consecutive.saturating_add(1);
                if self.consecutive >= self.limit {
                    error!(failed = self.consecutive, "giving up: {err}");
                    Err(err)
                } else {
                    warn!(failed = self.consecutive, "skipping frame: {err}");
                    Ok(None)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Presented,
    Skipped,
    Failed,
    Finished,
}

/// Fills the color buffer and hands it to a [`Frontend`] once per frame.
#[derive(Debug)]
pub struct FrameLoop {
    buffer: ColorBuffer,
    color: Color,
    frames: Option<u64>,
    presented: u64,
    failed: FailedFrames,
    pacer: Pacer,
}

impl FrameLoop {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            buffer: ColorBuffer::new(config.width, config.height)?,
            color: config.color,
            frames: config.frames,
            presented: 0,
            failed: FailedFrames::new(config.max_failed_frames),
            pacer: Pacer::new(config.fps),
        })
    }

    #[must_use]
    pub const fn presented(&self) -> u64 {
        self.presented
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.frames.is_some_and(|frames| self.presented >= frames)
    }

    /// Fills and presents one frame. The frame limit is checked first, so a
    /// limit of zero never draws.
    pub fn step(&mut self, frontend: &mut impl Frontend) -> Result<Step, Error> {
        if self.is_finished() {
            return Ok(Step::Finished);
        }

        self.buffer.fill(self.color);

        Ok(match self.failed.record(frontend.draw_frame(&self.buffer))? {
            Some(true) => {
                self.presented += 1;
                Step::Presented
            }
            Some(false) => Step::Skipped,
            None => Step::Failed,
        })
    }

    /// Runs until the frontend quits or the frame limit is reached, returns
    /// the number of frames presented.
    pub fn run(&mut self, frontend: &mut impl Frontend) -> Result<u64, Error> {
        info!(
            width = self.buffer.width(),
            height = self.buffer.height(),
            color = %self.color,
            "starting frame loop"
        );

        while frontend.poll_events() {
            let running = match self.step(frontend)? {
                Step::Presented => {
                    self.pacer.wait();
                    !self.is_finished()
                }
                // nothing was presented, so vsync won't hold the loop back
                Step::Skipped | Step::Failed => frontend.idle(self.pacer.idle_timeout()),
                Step::Finished => false,
            };

            if !running {
                break;
            }
        }

        info!(presented = self.presented, "frame loop finished");
        Ok(self.presented)
    }
}
