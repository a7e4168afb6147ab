use crate::foundation::error::{ForgeError, ForgeResult};

/// Opaque 8-bit RGB color. Serializes as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach a straight (non-premultiplied) alpha channel.
    pub const fn with_alpha(self, a: u8) -> Rgba8 {
        Rgba8 {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Channels as an array, in `r, g, b` order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        c.channels()
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(c: Rgb8) -> Self {
        image::Rgb(c.channels())
    }
}

impl From<image::Rgb<u8>> for Rgb8 {
    fn from(p: image::Rgb<u8>) -> Self {
        Self::from(p.0)
    }
}

/// 8-bit RGB color with straight alpha. Serializes as `[r, g, b, a]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 0 is fully transparent.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black, the initial state of every overlay pixel.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Drop the alpha channel.
    pub const fn rgb(self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl From<Rgba8> for image::Rgba<u8> {
    fn from(c: Rgba8) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<image::Rgba<u8>> for Rgba8 {
    fn from(p: image::Rgba<u8>) -> Self {
        Self::from(p.0)
    }
}

/// Largest canvas side, and largest absolute layout coordinate or extent.
pub(crate) const MAX_COORD: i32 = 1 << 16;

/// Pixel dimensions of a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Build a canvas size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> ForgeResult<Self> {
        Self { width, height }.validated()
    }

    /// Re-check a size that may have come from deserialized data.
    pub fn validated(self) -> ForgeResult<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(ForgeError::configuration(format!(
                "canvas size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_COORD as u32 || self.height > MAX_COORD as u32 {
            return Err(ForgeError::configuration(format!(
                "canvas size {}x{} exceeds drawable range",
                self.width, self.height
            )));
        }
        Ok(self)
    }

    /// Width as a signed drawing coordinate.
    pub fn w(self) -> i32 {
        self.width as i32
    }

    /// Height as a signed drawing coordinate.
    pub fn h(self) -> i32 {
        self.height as i32
    }
}

/// Which part of the city a location card represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// `N`
    #[serde(rename = "N")]
    North,
    /// `S`
    #[serde(rename = "S")]
    South,
    /// `E`
    #[serde(rename = "E")]
    East,
    /// `W`
    #[serde(rename = "W")]
    West,
    /// `C`
    #[serde(rename = "C")]
    Central,
}

impl Direction {
    /// Every direction, in the order the location cards are generated.
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Central,
    ];

    /// The four compass points, in the order their marks are drawn.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Screen-space bearing in degrees (y grows downward, so north is -90).
    ///
    /// `Central` has no bearing of its own and points east.
    pub fn bearing_degrees(self) -> f64 {
        match self {
            Direction::North => -90.0,
            Direction::South => 90.0,
            Direction::East | Direction::Central => 0.0,
            Direction::West => 180.0,
        }
    }

    /// Lowercase word used in output file names.
    pub fn slug(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Central => "central",
        }
    }

    /// Single-letter code (`N`, `S`, `E`, `W`, `C`).
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
            Direction::Central => 'C',
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
