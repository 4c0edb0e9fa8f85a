use std::fmt;

/// HSL color: hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

/// CSS notation, e.g. `hsl(220, 90%, 55%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            round2(self.h),
            round2(self.s * 100.0),
            round2(self.l * 100.0)
        )
    }
}

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn to_srgb(hsl: Hsl) -> (u8, u8, u8) {
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;

    if s < 1e-6 {
        let v = to_u8(l);
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = hsl.h.rem_euclid(360.0) / 360.0;

    (
        to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_channel(p, q, h)),
        to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

pub fn to_color(hsl: Hsl) -> ratatui::style::Color {
    let (r, g, b) = to_srgb(hsl);
    ratatui::style::Color::Rgb(r, g, b)
}

/// Hue interpolates linearly with no wrap-around: a 220° → 0° ramp sweeps
/// through cyan, green and yellow rather than taking the short arc via magenta.
pub fn lerp(a: Hsl, b: Hsl, t: f32) -> Hsl {
    Hsl {
        h: a.h + (b.h - a.h) * t,
        s: a.s + (b.s - a.s) * t,
        l: a.l + (b.l - a.l) * t,
    }
}

/// Scale lightness by `factor` (0.0 = black, 1.0 = original).
pub fn dim(hsl: Hsl, factor: f32) -> Hsl {
    Hsl {
        l: hsl.l * factor.clamp(0.0, 1.0),
        ..hsl
    }
}
