use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use super::shade::shade;

const LIFT_HIGHLIGHT: f32 = 0.15;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub title_style: Style,
    pub base_style: Style,
    pub dimmed_style: Style,
    pub button_style: Style,
    pub tile_border: Style,
    pub lifted_border: Style,
    pub opened_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Red")
    }
}

impl Theme {
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            base_style: Style::default().fg(Color::Reset),
            dimmed_style: Style::default().fg(Color::DarkGray),
            button_style: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            tile_border: Style::default().fg(Color::Gray),
            lifted_border: Style::default()
                .fg(shade(accent, LIFT_HIGHLIGHT))
                .add_modifier(Modifier::BOLD),
            opened_border: Style::default().fg(Color::Green),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        "gold" => Color::Indexed(220),
        "pine" | "evergreen" => Color::Indexed(28),
        _ => Color::Red,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| ());
    match s.len() {
        6 => Ok((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => Ok((
            channel(&s[0..1].repeat(2))?,
            channel(&s[1..2].repeat(2))?,
            channel(&s[2..3].repeat(2))?,
        )),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Green"), Color::Green);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Gold"), Color::Indexed(220));
        assert_eq!(parse_color("Invalid"), Color::Red);
    }

    #[test]
    fn test_theme_uses_accent() {
        let theme = Theme::new("Yellow");
        assert_eq!(theme.accent, Color::Yellow);
        assert_eq!(theme.button_style.bg, Some(Color::Yellow));
    }

    #[test]
    fn test_lifted_border_is_brighter_accent() {
        let theme = Theme::new("#aa2222");
        assert_eq!(theme.accent, Color::Rgb(170, 34, 34));
        assert_ne!(theme.lifted_border.fg, Some(theme.accent));
    }
}
