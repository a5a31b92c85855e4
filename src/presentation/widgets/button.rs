//! Bordered push button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line button drawn inside a rounded border.
pub struct Button<'a> {
    label: &'a str,
    style: Style,
    border_style: Style,
}

impl<'a> Button<'a> {
    /// Rows a button occupies.
    pub const HEIGHT: u16 = 3;

    const PADDING: u16 = 3;

    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
            border_style: Style::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Columns needed to show the whole label.
    #[must_use]
    pub fn width(&self) -> u16 {
        u16::try_from(self.label.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2 * Self::PADDING)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        buf.set_style(inner, self.style);
        Paragraph::new(Line::from(self.label).centered())
            .style(self.style)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_includes_padding_and_border() {
        assert_eq!(Button::new("Back").width(), 10);
    }

    #[test]
    fn test_renders_label_centered() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        Button::new("Go").render(area, &mut buf);

        let middle: String = (0..12).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(middle.trim_matches(|c| c == '│' || c == ' '), "Go");
        assert_eq!(buf[(0, 0)].symbol(), "╭");
    }
}
