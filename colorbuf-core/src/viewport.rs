use core::cmp::{max, min};

/// How the color buffer is placed inside a window of arbitrary size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scaling {
    /// Cover the whole window, ignoring aspect ratio.
    #[default]
    Stretch,
    /// Largest integer multiple of the buffer that fits, centered.
    PixelPerfect,
}

/// Destination rectangle inside the window, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Returns `None` for a zero sized window, there is nothing to draw into.
    #[must_use]
    pub fn fit(src: (u32, u32), window: (u32, u32), scaling: Scaling) -> Option<Self> {
        let (src_width, src_height) = src;
        let (win_width, win_height) = window;

        if win_width == 0 || win_height == 0 || src_width == 0 || src_height == 0 {
            return None;
        }

        match scaling {
            Scaling::Stretch => Some(Self {
                x: 0,
                y: 0,
                width: win_width,
                height: win_height,
            }),
            Scaling::PixelPerfect => {
                let multiplier = max(min(win_width / src_width, win_height / src_height), 1);
                let width = src_width.saturating_mul(multiplier);
                let height = src_height.saturating_mul(multiplier);

                Some(Self {
                    x: centered(win_width, width),
                    y: centered(win_height, height),
                    width,
                    height,
                })
            }
        }
    }

    #[must_use]
    pub const fn covers(&self, window: (u32, u32)) -> bool {
        self.x == 0 && self.y == 0 && self.width == window.0 && self.height == window.1
    }
}

// negative when the content is larger than the window
fn centered(outer: u32, inner: u32) -> i32 {
    let offset = (i64::from(outer) - i64::from(inner)) / 2;
    i32::try_from(offset).unwrap_or(if offset < 0 { i32::MIN } else { i32::MAX })
}
