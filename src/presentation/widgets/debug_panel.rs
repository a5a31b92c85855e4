use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::application::StateSnapshot;

/// Read-only overlay showing the live session state as JSON.
pub struct DebugPanel<'a> {
    snapshot: &'a StateSnapshot,
}

impl<'a> DebugPanel<'a> {
    #[must_use]
    pub const fn new(snapshot: &'a StateSnapshot) -> Self {
        Self { snapshot }
    }
}

impl DebugPanel<'_> {
    /// Cells the panel covers when rendered into `area`.
    #[must_use]
    pub fn area(&self, area: Rect) -> Rect {
        let json = self.snapshot.to_json_pretty();
        Self::popup_area(&json, area)
    }

    fn popup_area(json: &str, area: Rect) -> Rect {
        let content_width = json.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
        let width = u16::try_from(content_width)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width.saturating_sub(2));
        let height = u16::try_from(json.lines().count())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height.saturating_sub(2));

        let x = area.right().saturating_sub(width).saturating_sub(1);
        area.intersection(Rect::new(x, area.y.saturating_add(1), width, height))
    }
}

impl Widget for DebugPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let json = self.snapshot.to_json_pretty();
        let intersection = Self::popup_area(&json, area);
        if intersection.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" state ")
            .style(Style::default().fg(Color::Magenta));

        Clear.render(intersection, buf);
        Paragraph::new(json)
            .block(block)
            .style(Style::default().fg(Color::White))
            .render(intersection, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Page;

    #[test]
    fn test_renders_snapshot_fields() {
        let snapshot = StateSnapshot {
            current_page: Page::Gifts,
            opened_gifts: vec![1, 3],
            all_gifts_opened: false,
            proceed_visible: false,
            total_gifts: 4,
        };
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        DebugPanel::new(&snapshot).render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("\"current_page\": \"gifts\""));
        assert!(text.contains("\"total_gifts\": 4"));
        assert!(text.contains(" state "));
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let snapshot = StateSnapshot {
            current_page: Page::Welcome,
            opened_gifts: Vec::new(),
            all_gifts_opened: false,
            proceed_visible: false,
            total_gifts: 4,
        };
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        DebugPanel::new(&snapshot).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_area_matches_drawn_panel() {
        let snapshot = StateSnapshot {
            current_page: Page::Surprise,
            opened_gifts: Vec::new(),
            all_gifts_opened: false,
            proceed_visible: false,
            total_gifts: 4,
        };
        let area = Rect::new(0, 0, 80, 24);
        let panel = DebugPanel::new(&snapshot);
        let covered = panel.area(area);

        assert!(covered.area() > 0);
        assert_eq!(covered.right(), area.right() - 1);
        assert_eq!(covered.y, 1);

        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        assert_eq!(buf[(covered.x, covered.y)].fg, Color::Magenta);
        assert_eq!(buf[(covered.x.saturating_sub(1), covered.y)].symbol(), " ");
    }
}
