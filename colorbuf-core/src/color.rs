use crate::Error;
use core::{fmt, str::FromStr};

/// Channel layout of a packed 32-bit color.
///
/// Both layouts are described from the most significant byte down, so
/// `Argb8888` stores alpha in bits 24..32 and blue in bits 0..8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    #[default]
    Argb8888,
    Rgba8888,
}

impl PixelFormat {
    pub const BYTES_PER_PIXEL: u32 = 4;

    #[must_use]
    pub const fn pack(self, r: u8, g: u8, b: u8, a: u8) -> Color {
        let (r, g, b, a) = (r as u32, g as u32, b as u32, a as u32);
        match self {
            Self::Argb8888 => Color(a << 24 | r << 16 | g << 8 | b),
            Self::Rgba8888 => Color(r << 24 | g << 16 | b << 8 | a),
        }
    }

    /// Splits `color` into `[r, g, b, a]`.
    #[must_use]
    pub const fn unpack(self, color: Color) -> [u8; 4] {
        let [hi, b2, b1, lo] = color.0.to_be_bytes();
        match self {
            Self::Argb8888 => [b2, b1, lo, hi],
            Self::Rgba8888 => [hi, b2, b1, lo],
        }
    }

    /// Reinterprets a color packed in `self` as a color packed in `target`.
    #[must_use]
    pub const fn convert(self, color: Color, target: Self) -> Color {
        let [r, g, b, a] = self.unpack(color);
        target.pack(r, g, b, a)
    }
}

/// A packed 32-bit color. The value is opaque to fill and present, only
/// [`PixelFormat`] gives its channels a meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .or_else(|| s.strip_prefix('#'))
            .unwrap_or(s);

        // from_str_radix also takes a leading sign, which isn't a color
        if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(Error::InvalidColor {
                input: s.to_owned(),
            });
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| Error::InvalidColor {
                input: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packs_alpha_in_the_top_byte() {
        let color = PixelFormat::Argb8888.pack(0xAA, 0xBB, 0xCC, 0xFF);
        assert_eq!(color, Color(0xFFAA_BBCC));
        assert_eq!(PixelFormat::Argb8888.unpack(color), [0xAA, 0xBB, 0xCC, 0xFF]);
    }

    #[test]
    fn rgba_packs_alpha_in_the_bottom_byte() {
        let color = PixelFormat::Rgba8888.pack(0xAA, 0xBB, 0xCC, 0xFF);
        assert_eq!(color, Color(0xAABB_CCFF));
        assert_eq!(PixelFormat::Rgba8888.unpack(color), [0xAA, 0xBB, 0xCC, 0xFF]);
    }

    #[test]
    fn convert_between_layouts() {
        let argb = Color(0x80FF_0010);
        let rgba = PixelFormat::Argb8888.convert(argb, PixelFormat::Rgba8888);
        assert_eq!(rgba, Color(0xFF00_1080));
        assert_eq!(PixelFormat::Rgba8888.convert(rgba, PixelFormat::Argb8888), argb);
    }

    #[test]
    fn parse_accepts_prefixes() {
        assert_eq!("0xFFAABBCC".parse(), Ok(Color(0xFFAA_BBCC)));
        assert_eq!("0Xffaabbcc".parse(), Ok(Color(0xFFAA_BBCC)));
        assert_eq!("#ff0000".parse(), Ok(Color(0x00FF_0000)));
        assert_eq!("1".parse(), Ok(Color(1)));
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "0x", "#", "123456789", "0xGG", "+1", "-1", "0x 1"] {
            assert_eq!(
                input.parse::<Color>(),
                Err(Error::InvalidColor {
                    input: input.to_owned()
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(alloc::format!("{}", Color(0xFFAA_BBCC)), "0xFFAABBCC");
        assert_eq!(alloc::format!("{}", Color(0x10)), "0x00000010");
    }
}
