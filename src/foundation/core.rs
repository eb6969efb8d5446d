use crate::foundation::math::{clamp_unit, wrap_hue};

pub use kurbo::{Point, Rect};

/// Concrete color in hue/saturation/lightness/alpha form.
///
/// Hue is in degrees `[0, 360)`; saturation, lightness and alpha are in `[0, 1]`.
/// [`Hsla::new`] wraps the hue and clamps the other channels, so every `Hsla` built
/// through it is in gamut.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    /// Build a color, wrapping hue modulo 360 and clamping the remaining channels.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
            a: clamp_unit(a),
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.h, self.s, self.l, a)
    }

    pub fn is_in_gamut(self) -> bool {
        (0.0..360.0).contains(&self.h)
            && (0.0..=1.0).contains(&self.s)
            && (0.0..=1.0).contains(&self.l)
            && (0.0..=1.0).contains(&self.a)
    }

    /// CSS `hsla()` string for web renderers.
    pub fn to_css(self) -> String {
        format!(
            "hsla({:.2}, {:.2}%, {:.2}%, {:.3})",
            self.h,
            self.s * 100.0,
            self.l * 100.0,
            self.a
        )
    }

    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let (r, g, b) = hsl_to_rgb(self.h, self.s, self.l);
        let a = clamp_unit(self.a);
        Rgba8Premul {
            r: to_u8(r * a),
            g: to_u8(g * a),
            b: to_u8(b * a),
            a: to_u8(a),
        }
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = wrap_hue(h) / 360.0;
    let s = clamp_unit(s);
    let l = clamp_unit(l);

    if s == 0.0 {
        return (l, l, l);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
