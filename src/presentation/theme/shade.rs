use coolor::{Hsl, Rgb};
use ratatui::style::Color;

const ANSI_BASE: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (170, 0, 0),
    (0, 170, 0),
    (170, 85, 0),
    (0, 0, 170),
    (170, 0, 170),
    (0, 170, 170),
    (170, 170, 170),
    (85, 85, 85),
    (255, 85, 85),
    (85, 255, 85),
    (255, 255, 85),
    (85, 85, 255),
    (255, 85, 255),
    (85, 255, 255),
    (255, 255, 255),
];

/// Moves the lightness of `color` by `delta`, clamped to `0.0..=1.0`.
///
/// `Color::Reset` has no fixed value and is returned unchanged.
#[must_use]
pub fn shade(color: Color, delta: f32) -> Color {
    let Some((r, g, b)) = to_rgb(color) else {
        return color;
    };
    let hsl = Rgb::new(r, g, b).to_hsl();
    let rgb = Hsl::new(hsl.h, hsl.s, (hsl.l + delta).clamp(0.0, 1.0)).to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    let index = match color {
        Color::Reset => return None,
        Color::Rgb(r, g, b) => return Some((r, g, b)),
        Color::Indexed(i) => i,
        Color::Black => 0,
        Color::Red => 1,
        Color::Green => 2,
        Color::Yellow => 3,
        Color::Blue => 4,
        Color::Magenta => 5,
        Color::Cyan => 6,
        Color::Gray => 7,
        Color::DarkGray => 8,
        Color::LightRed => 9,
        Color::LightGreen => 10,
        Color::LightYellow => 11,
        Color::LightBlue => 12,
        Color::LightMagenta => 13,
        Color::LightCyan => 14,
        Color::White => 15,
    };
    Some(indexed_rgb(index))
}

// xterm 256-color palette: 16 base colors, a 6x6x6 cube, then a gray ramp.
fn indexed_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => ANSI_BASE[usize::from(index)],
        16..=231 => {
            let cube = index - 16;
            let level = |c: u8| if c == 0 { 0 } else { 55 + c * 40 };
            (level(cube / 36), level((cube / 6) % 6), level(cube % 6))
        }
        _ => {
            let v = 8 + (index - 232) * 10;
            (v, v, v)
        }
    }
}
