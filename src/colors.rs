// SPDX-License-Identifier: GPL-3.0-or-later

use crate::hash::ident_hash;
use crate::Res;

pub type Rgb = rgb::RGB<u8>;

/// Derive a stable tint for an identifier string.
///
/// Each channel is pinned to [80, 235] so the tint stays readable behind
/// both light and dark text.
pub fn rgb_from_identifier(id: &str) -> Rgb {
    let hash = i64::from(ident_hash(id)).abs().max(1);

    Rgb::new(
        channel(hash, 131, 0x5A5A5A),
        channel(hash, 173, 0xA5A5A5),
        channel(hash, 211, 0xCACACA),
    )
}

/// Same tint formatted as a lowercase `#rrggbb` string.
pub fn from_identifier(id: &str) -> String {
    let c = rgb_from_identifier(id);
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

pub fn hex_to_rgba(hex: &str, alpha: f32) -> Res<String> {
    let c = parse_hex(hex)?;
    Ok(format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, alpha))
}

pub fn parse_hex(hex: &str) -> Res<Rgb> {
    let digits = match hex.strip_prefix('#') {
        Some(d) if d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()) => d,
        _ => return Err(format!("invalid hex color {hex}").into()),
    };

    let v = u32::from_str_radix(digits, 16)?;
    Ok(Rgb::new(
        ((v >> 16) & 0xff) as u8,
        ((v >> 8) & 0xff) as u8,
        (v & 0xff) as u8,
    ))
}

fn channel(hash: i64, prime: i64, mask: u32) -> u8 {
    // multiply on i64, truncate the product to its low 32 bits
    let v = ((hash * prime) as u32) ^ mask;
    ((v & 0xff) % 156 + 80) as u8
}
