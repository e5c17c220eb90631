
//! Color space conversion between 8 bit RGB and YPbPr.
//!
//! Uses the ITU-R BT.601 luma weights. Channels are normalized to `[0, 1]`
//! before the forward transform, which yields luma in `[0, 1]` and
//! both chroma components in `[-0.5, 0.5]`.
//!
//! Pixels store `f32` components, but each conversion is evaluated in `f64`
//! and rounded to `f32` once per stored value.

use crate::grid::Grid;

/// Coefficients of the RGB to YPbPr transform.
pub mod forward {
    pub const Y_R: f64 = 0.299;
    pub const Y_G: f64 = 0.587;
    pub const Y_B: f64 = 0.114;

    pub const PB_R: f64 = -0.168736;
    pub const PB_G: f64 = -0.331264;
    pub const PB_B: f64 = 0.5;

    pub const PR_R: f64 = 0.5;
    pub const PR_G: f64 = -0.418688;
    pub const PR_B: f64 = -0.081312;
}

/// Coefficients of the YPbPr to RGB transform.
pub mod inverse {
    pub const R_PR: f64 = 1.402;
    pub const G_PB: f64 = -0.344136;
    pub const G_PR: f64 = -0.714136;
    pub const B_PB: f64 = 1.772;
}

const CHANNEL_MAX: f64 = 255.0;


/// A pixel with three 8 bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {

    /// The red channel.
    pub red: u8,

    /// The green channel.
    pub green: u8,

    /// The blue channel.
    pub blue: u8,
}

/// A pixel as luma and two chroma differences.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct YPbPr {

    /// Luma, in `[0, 1]` for valid input.
    pub y: f32,

    /// Blue difference chroma, roughly in `[-0.5, 0.5]`.
    pub pb: f32,

    /// Red difference chroma, roughly in `[-0.5, 0.5]`.
    pub pr: f32,
}

impl Rgb {

    /// Create a pixel from its three channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    /// Create a pixel with the same value in all channels.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Rgb::new(value, value, value)
    }

    /// Convert to luma and chroma. Never clamps, as every 8 bit input is valid.
    #[inline]
    pub fn to_ypbpr(self) -> YPbPr {
        let r = f64::from(normalize(self.red));
        let g = f64::from(normalize(self.green));
        let b = f64::from(normalize(self.blue));

        YPbPr {
            y: (forward::Y_R * r + forward::Y_G * g + forward::Y_B * b) as f32,
            pb: (forward::PB_R * r + forward::PB_G * g + forward::PB_B * b) as f32,
            pr: (forward::PR_R * r + forward::PR_G * g + forward::PR_B * b) as f32,
        }
    }
}

impl YPbPr {

    /// Convert back to 8 bit channels.
    /// Reconstructed values may leave the valid range after quantization,
    /// so each channel is clamped to `[0, 1]` before scaling and truncating to an integer.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        let (y, pb, pr) = (f64::from(self.y), f64::from(self.pb), f64::from(self.pr));

        let r = y + inverse::R_PR * pr;
        let g = y + inverse::G_PB * pb + inverse::G_PR * pr;
        let b = y + inverse::B_PB * pb;

        Rgb::new(to_channel(r as f32), to_channel(g as f32), to_channel(b as f32))
    }
}

#[inline]
fn normalize(channel: u8) -> f32 {
    (f64::from(channel) / CHANNEL_MAX) as f32
}

/// Clamp to `[0, 1]`, scale, and truncate.
#[inline]
fn to_channel(normalized: f32) -> u8 {
    (f64::from(normalized.max(0.0).min(1.0)) * CHANNEL_MAX) as u8
}


/// Convert a whole raster to luma and chroma, consuming the raster.
pub fn rgb_to_ypbpr(pixels: Grid<Rgb>) -> Grid<YPbPr> {
    pixels.map(|pixel| pixel.to_ypbpr())
}

/// Convert a whole luma and chroma grid back to a raster, consuming the grid.
pub fn ypbpr_to_rgb(pixels: Grid<YPbPr>) -> Grid<Rgb> {
    pixels.map(|pixel| pixel.to_rgb())
}
