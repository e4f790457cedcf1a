#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Convert a color on the 0-255 hue wheel to its red/green/blue components.
///
/// Integer-only so it can run inside an LED refresh tick. The wheel is split
/// into six regions of 43 hue steps each.
///
/// ```
/// use pumpkin_common::color::{hsv_to_rgb, Hsv, Rgb};
///
/// assert_eq!(hsv_to_rgb(Hsv { h: 0, s: 255, v: 255 }), Rgb { r: 255, g: 0, b: 0 });
/// ```
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    if hsv.s == 0 {
        return Rgb {
            r: hsv.v,
            g: hsv.v,
            b: hsv.v,
        };
    }

    let region = hsv.h / 43;
    let remainder = (hsv.h as u16 - region as u16 * 43) * 6;

    let v = hsv.v;
    let s = hsv.s as u16;
    let p = ((v as u16 * (255 - s)) >> 8) as u8;
    let q = ((v as u16 * (255 - ((s * remainder) >> 8))) >> 8) as u8;
    let t = ((v as u16 * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;

    let (r, g, b) = match region {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb { r, g, b }
}

#[cfg(test)]
#[path = "color_test.rs"]
mod test;
