//! Gift tile widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::entities::Gift;
use crate::presentation::theme::Theme;

const BOX_ART: [&str; 2] = ["_\\/_", "|_||_|"];

/// Resting appearance of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    /// Wrapped.
    Closed,
    /// Wrapped and raised under the pointer.
    Lifted,
    /// Unwrapped, message visible.
    Opened,
}

pub struct GiftTile<'a> {
    gift: &'a Gift,
    state: TileState,
    theme: &'a Theme,
}

impl<'a> GiftTile<'a> {
    /// Preferred tile size.
    pub const WIDTH: u16 = 24;
    pub const HEIGHT: u16 = 8;

    #[must_use]
    pub const fn new(gift: &'a Gift, state: TileState, theme: &'a Theme) -> Self {
        Self { gift, state, theme }
    }

    fn border_style(&self) -> Style {
        match self.state {
            TileState::Closed => self.theme.tile_border,
            TileState::Lifted => self.theme.lifted_border,
            TileState::Opened => self.theme.opened_border,
        }
    }

    fn render_closed(&self, inner: Rect, buf: &mut Buffer) {
        let [_, art, title, hint] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let art_style = Style::default().fg(self.theme.accent);
        Paragraph::new(
            BOX_ART
                .iter()
                .map(|line| Line::from(*line).centered())
                .collect::<Vec<_>>(),
        )
        .style(art_style)
        .render(art, buf);

        Line::from(self.gift.title())
            .centered()
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(title, buf);

        Line::from(format!("press {}", self.gift.id()))
            .centered()
            .style(self.theme.dimmed_style)
            .render(hint, buf);
    }

    fn render_opened(&self, inner: Rect, buf: &mut Buffer) {
        let [title, message] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);

        Line::from(self.gift.title())
            .centered()
            .style(self.theme.title_style)
            .render(title, buf);

        Paragraph::new(self.gift.message())
            .centered()
            .wrap(Wrap { trim: true })
            .style(self.theme.base_style)
            .render(message, buf);
    }
}

impl Widget for GiftTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.area() == 0 {
            return;
        }

        let border_type = match self.state {
            TileState::Lifted => BorderType::Thick,
            TileState::Closed | TileState::Opened => BorderType::Rounded,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(self.border_style())
            .title(Line::from(format!(" #{} ", self.gift.id())).centered());
        let inner = block.inner(area);
        block.render(area, buf);

        match self.state {
            TileState::Opened => self.render_opened(inner, buf),
            TileState::Closed | TileState::Lifted => self.render_closed(inner, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GiftId;

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn contains_text(buf: &Buffer, needle: &str) -> bool {
        (buf.area.y..buf.area.bottom()).any(|y| row_text(buf, y).contains(needle))
    }

    fn sample_gift() -> Gift {
        Gift::new(GiftId::new(2).unwrap(), "Cocoa", "Hot and sweet")
    }

    #[test]
    fn test_closed_tile_hides_message() {
        let gift = sample_gift();
        let theme = Theme::default();
        let area = Rect::new(0, 0, GiftTile::WIDTH, GiftTile::HEIGHT);
        let mut buf = Buffer::empty(area);

        GiftTile::new(&gift, TileState::Closed, &theme).render(area, &mut buf);

        assert!(contains_text(&buf, "Cocoa"));
        assert!(contains_text(&buf, "#2"));
        assert!(contains_text(&buf, "press 2"));
        assert!(!contains_text(&buf, "Hot and sweet"));
    }

    #[test]
    fn test_opened_tile_shows_message() {
        let gift = sample_gift();
        let theme = Theme::default();
        let area = Rect::new(0, 0, GiftTile::WIDTH, GiftTile::HEIGHT);
        let mut buf = Buffer::empty(area);

        GiftTile::new(&gift, TileState::Opened, &theme).render(area, &mut buf);

        assert!(contains_text(&buf, "Hot and sweet"));
        assert!(!contains_text(&buf, "press 2"));
    }

    #[test]
    fn test_lifted_tile_uses_lifted_border() {
        let gift = sample_gift();
        let theme = Theme::default();
        let area = Rect::new(0, 0, GiftTile::WIDTH, GiftTile::HEIGHT);
        let mut buf = Buffer::empty(area);

        GiftTile::new(&gift, TileState::Lifted, &theme).render(area, &mut buf);

        assert_eq!(Some(buf[(0, 0)].fg), theme.lifted_border.fg);
    }
}
