use crate::{Color, Error, PixelFormat};
use alloc::{boxed::Box, vec};

/// Writes `color` into every element of `pixels`.
#[inline]
pub fn fill_color_buffer(pixels: &mut [u32], color: Color) {
    pixels.fill(color.raw());
}

/// One frame worth of packed colors, row-major, `y * width + x`.
#[derive(Clone, PartialEq, Eq)]
pub struct ColorBuffer {
    width: u32,
    height: u32,
    pixels: Box<[u32]>,
}

impl core::fmt::Debug for ColorBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColorBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ColorBuffer {
    /// Allocates a zeroed buffer of `width * height` pixels.
    ///
    /// # Errors
    ///
    /// Fails when either dimension is zero or the pixel count overflows.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let len = Self::pixel_count(width, height)?;
        tracing::debug!(width, height, "allocating color buffer");

        Ok(Self {
            width,
            height,
            pixels: vec![0; len].into_boxed_slice(),
        })
    }

    fn pixel_count(width: u32, height: u32) -> Result<usize, Error> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroDimension { width, height });
        }

        // byte length has to fit too, the texture upload works on bytes
        usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .filter(|len| len.checked_mul(PixelFormat::BYTES_PER_PIXEL as usize).is_some())
            .ok_or(Error::DimensionOverflow { width, height })
    }

    #[must_use]
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    // never empty, construction rejects zero dimensions
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Bytes per row.
    #[must_use]
    #[inline]
    pub const fn pitch(&self) -> usize {
        self.width as usize * PixelFormat::BYTES_PER_PIXEL as usize
    }

    #[must_use]
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[must_use]
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Native endian byte view of the pixels, laid out the way SDL expects
    /// packed 32-bit formats.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels())
    }

    #[inline]
    pub fn fill(&mut self, color: Color) {
        fill_color_buffer(&mut self.pixels, color);
    }

    const fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| Color(self.pixels[i]))
    }

    /// Writes a single pixel. Coordinates outside the buffer are ignored,
    /// the return value tells whether anything was written.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        self.index(x, y).is_some_and(|i| {
            self.pixels[i] = color.raw();
            true
        })
    }

    /// Reallocates for new dimensions. Contents are zeroed.
    ///
    /// # Errors
    ///
    /// Same as [`ColorBuffer::new`]; on error the buffer is left untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if (width, height) == (self.width, self.height) {
            self.pixels.fill(0);
            return Ok(());
        }

        *self = Self::new(width, height)?;
        Ok(())
    }

    /// Checks the buffer can be copied into a render target of the given
    /// dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the dimensions differ.
    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<(), Error> {
        if self.width == width && self.height == height {
            Ok(())
        } else {
            Err(Error::SizeMismatch {
                expected: (width, height),
                actual: (self.width, self.height),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn fill_two_by_two() {
        let mut buf = ColorBuffer::new(2, 2).unwrap();
        buf.fill(Color(0xFFAA_BBCC));
        assert_eq!(buf.pixels(), &[0xFFAA_BBCC_u32; 4]);
    }

    #[test]
    fn fill_sets_every_element() {
        for (w, h) in [(1, 1), (3, 7), (64, 1), (1, 64), (320, 240)] {
            for color in [0, 1, 0x8000_0000, 0xFFFF_FFFF, 0x1234_5678] {
                let mut buf = ColorBuffer::new(w, h).unwrap();
                buf.fill(Color(0xDEAD_BEEF));
                buf.fill(Color(color));
                assert!(buf.pixels().iter().all(|&px| px == color), "{w}x{h} {color:#x}");
                assert_eq!(buf.len(), (w * h) as usize);
            }
        }
    }

    #[test]
    fn fill_is_idempotent() {
        let mut once = ColorBuffer::new(5, 3).unwrap();
        once.fill(Color(0x0102_0304));
        let mut twice = once.clone();
        twice.fill(Color(0x0102_0304));
        assert_eq!(once, twice);
    }

    #[test]
    fn fill_free_function_on_empty_slice() {
        let mut pixels: [u32; 0] = [];
        fill_color_buffer(&mut pixels, Color::WHITE);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            ColorBuffer::new(0, 10),
            Err(Error::ZeroDimension {
                width: 0,
                height: 10
            })
        );
        assert!(matches!(
            ColorBuffer::new(10, 0),
            Err(Error::ZeroDimension { .. })
        ));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn overflow_rejected() {
        assert!(matches!(
            ColorBuffer::new(u32::MAX, 2),
            Err(Error::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn row_major_addressing() {
        let mut buf = ColorBuffer::new(4, 3).unwrap();
        assert!(buf.set_pixel(1, 2, Color(7)));
        assert_eq!(buf.pixels()[2 * 4 + 1], 7);
        assert_eq!(buf.pixel(1, 2), Some(Color(7)));
        assert_eq!(buf.pixel(0, 0), Some(Color(0)));
    }

    #[test]
    fn out_of_range_pixels_are_ignored() {
        let mut buf = ColorBuffer::new(4, 3).unwrap();
        assert!(!buf.set_pixel(4, 0, Color::WHITE));
        assert!(!buf.set_pixel(0, 3, Color::WHITE));
        assert_eq!(buf.pixel(4, 0), None);
        assert!(buf.pixels().iter().all(|&px| px == 0));
    }

    #[test]
    fn byte_view_matches_pitch() {
        let mut buf = ColorBuffer::new(3, 2).unwrap();
        buf.fill(Color(0x1122_3344));
        assert_eq!(buf.pitch(), 12);
        assert_eq!(buf.as_bytes().len(), buf.pitch() * 2);
        assert_eq!(&buf.as_bytes()[..4], &0x1122_3344_u32.to_ne_bytes());
    }

    #[test]
    fn check_dimensions_rejects_mismatch() {
        let buf = ColorBuffer::new(4, 4).unwrap();
        assert_eq!(buf.check_dimensions(4, 4), Ok(()));
        // same pixel count, different shape
        assert_eq!(
            buf.check_dimensions(2, 8),
            Err(Error::SizeMismatch {
                expected: (2, 8),
                actual: (4, 4)
            })
        );
        assert!(buf.check_dimensions(4, 5).is_err());
    }

    #[test]
    fn resize_reallocates_and_clears() {
        let mut buf = ColorBuffer::new(2, 2).unwrap();
        buf.fill(Color::WHITE);
        buf.resize(3, 5).unwrap();
        assert_eq!((buf.width(), buf.height(), buf.len()), (3, 5, 15));
        assert!(buf.pixels().iter().all(|&px| px == 0));

        buf.fill(Color::WHITE);
        buf.resize(3, 5).unwrap();
        assert!(buf.pixels().iter().all(|&px| px == 0));
    }

    #[test]
    fn failed_resize_keeps_buffer() {
        let mut buf = ColorBuffer::new(2, 2).unwrap();
        buf.fill(Color::WHITE);
        assert!(buf.resize(0, 2).is_err());
        assert_eq!((buf.width(), buf.height()), (2, 2));
        assert_eq!(buf.pixels(), &[Color::WHITE.raw(); 4]);
    }

    #[traced_test]
    #[test]
    fn allocation_is_logged() {
        let _buf = ColorBuffer::new(16, 9).unwrap();
        assert!(logs_contain("allocating color buffer"));
    }
}
