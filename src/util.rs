//! Color math helpers for deriving palette entries.
//!
//! The palette carries a handful of tints computed from base colors rather
//! than hand-picked. `lighten` and `darken` shift HSL lightness, `shade`
//! mixes toward black.

/// Parses `#rgb` or `#rrggbb` into an RGB triplet.
///
/// # Example
///
/// ```rust
/// use tokendeck::parse_hex;
///
/// assert_eq!(parse_hex("#007aff"), Some((0x00, 0x7a, 0xff)));
/// assert_eq!(parse_hex("#cdf"), Some((0xcc, 0xdd, 0xff)));
/// assert_eq!(parse_hex("blue"), None);
/// ```
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    match digits.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let nibble = c.to_digit(16)? as u8;
                channels[i] = nibble << 4 | nibble;
            }
            Some((channels[0], channels[1], channels[2]))
        }
        6 => {
            let value = u32::from_str_radix(digits, 16).ok()?;
            Some((
                ((value >> 16) & 0xff) as u8,
                ((value >> 8) & 0xff) as u8,
                (value & 0xff) as u8,
            ))
        }
        _ => None,
    }
}

/// Formats an RGB triplet as a lowercase `#rrggbb` string.
pub fn format_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Increases HSL lightness by `amount` (clamped to 1.0).
pub fn lighten(amount: f32, rgb: (u8, u8, u8)) -> (u8, u8, u8) {
    let (h, s, l) = rgb_to_hsl(rgb);
    hsl_to_rgb((h, s, (l + amount).clamp(0.0, 1.0)))
}

/// Decreases HSL lightness by `amount` (clamped to 0.0).
pub fn darken(amount: f32, rgb: (u8, u8, u8)) -> (u8, u8, u8) {
    let (h, s, l) = rgb_to_hsl(rgb);
    hsl_to_rgb((h, s, (l - amount).clamp(0.0, 1.0)))
}

/// Mixes a color toward black: `amount` is the black ratio.
pub fn shade(amount: f32, (r, g, b): (u8, u8, u8)) -> (u8, u8, u8) {
    let keep = (1.0 - amount).clamp(0.0, 1.0);
    (
        (r as f32 * keep).round() as u8,
        (g as f32 * keep).round() as u8,
        (b as f32 * keep).round() as u8,
    )
}

fn rgb_to_hsl((r, g, b): (u8, u8, u8)) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

fn hsl_to_rgb((h, s, l): (f32, f32, f32)) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let channel = |t: f32| -> u8 {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round() as u8
    };

    (
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    )
}
