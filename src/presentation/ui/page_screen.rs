//! Page screens.

use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::application::{Control, Session, transitions};
use crate::domain::entities::{GiftCatalog, GiftId, Page};
use crate::domain::keybinding::{Action, Keybind};
use crate::infrastructure::config::GreetingConfig;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::ui::hit_map::{HitMap, HitTarget};
use crate::presentation::widgets::{Button, GiftTile, TileState};

const TREE_ART: [&str; 6] = ["*", "/.\\", "/.'.\\", "/.'.'.\\", "/'.'.'.'\\", "|_|"];
const PRESENT_ART: [&str; 3] = ["_\\/_", "|_||_|", "|_||_|"];

const BUTTON_GAP: u16 = 3;
const TILE_GAP: u16 = 2;
const TILES_PER_ROW: usize = 4;
// One spare row above each tile so a lifted tile can rise into it.
const TILE_SLOT_HEIGHT: u16 = GiftTile::HEIGHT + 1;

/// Renders the active page and records its clickable regions.
pub struct PageScreen<'a> {
    session: &'a Session,
    catalog: &'a GiftCatalog,
    greeting: &'a GreetingConfig,
    theme: &'a Theme,
    show_progress: bool,
}

impl<'a> PageScreen<'a> {
    #[must_use]
    pub const fn new(
        session: &'a Session,
        catalog: &'a GiftCatalog,
        greeting: &'a GreetingConfig,
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            catalog,
            greeting,
            theme,
            show_progress: true,
        }
    }

    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Controls drawn on the active page.
    fn visible_controls(&self) -> Vec<Control> {
        let proceed_visible = self.session.tracker().proceed_visible();
        transitions::controls_on(self.session.current_page())
            .filter(|control| *control != Control::ProceedToComplete || proceed_visible)
            .collect()
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let controls = self.visible_controls();
        let buttons: Vec<(Control, Button<'_>)> = controls
            .iter()
            .map(|control| {
                let button = Button::new(control.label())
                    .style(self.theme.button_style)
                    .border_style(Style::default().fg(self.theme.accent));
                (*control, button)
            })
            .collect();

        let gaps = BUTTON_GAP.saturating_mul(u16::try_from(buttons.len().saturating_sub(1)).unwrap_or(0));
        let total = buttons
            .iter()
            .fold(gaps, |acc, (_, button)| acc.saturating_add(button.width()));
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for (control, button) in buttons {
            let width = button.width();
            let rect = Rect::new(x, area.y, width, Button::HEIGHT).intersection(area);
            button.render(rect, buf);
            hits.push(rect, HitTarget::Control(control));
            x = x.saturating_add(width).saturating_add(BUTTON_GAP);
        }
    }

    fn render_welcome(&self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let [tree, _, title, subtitle, _, buttons] = centered_rows(area, [6, 1, 1, 1, 1, Button::HEIGHT]);

        render_art(&TREE_ART, Style::default().fg(Color::Green), tree, buf);
        Line::from(self.greeting.title.as_str())
            .centered()
            .style(self.theme.title_style)
            .render(title, buf);
        Line::from(self.greeting.subtitle.as_str())
            .centered()
            .style(self.theme.base_style)
            .render(subtitle, buf);

        self.render_buttons(buttons, buf, hits);
    }

    fn render_gifts(&self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let layout = TileLayout::new(self.catalog.len());
        let progress_height = u16::from(self.show_progress);
        let [header, progress, _, tiles, _, buttons] = centered_rows(
            area,
            [1, progress_height, 1, layout.height(), 1, Button::HEIGHT],
        );

        Line::from("Choose a gift to unwrap")
            .centered()
            .style(self.theme.title_style)
            .render(header, buf);

        if self.show_progress {
            self.progress_line().render(progress, buf);
        }

        let tracker = self.session.tracker();
        for gift in self.catalog {
            let id = gift.id();
            let state = if tracker.is_opened(id) {
                TileState::Opened
            } else if tracker.lifted() == Some(id) {
                TileState::Lifted
            } else {
                TileState::Closed
            };

            let slot = layout.slot(id, tiles);
            let tile_y = if state == TileState::Lifted { slot.y } else { slot.y + 1 };
            let tile = Rect::new(slot.x, tile_y, slot.width, GiftTile::HEIGHT).intersection(tiles);

            GiftTile::new(gift, state, self.theme).render(tile, buf);
            hits.push(slot, HitTarget::Gift(id));
        }

        self.render_buttons(buttons, buf, hits);
    }

    fn progress_line(&self) -> Line<'static> {
        let tracker = self.session.tracker();
        if tracker.all_opened() {
            Line::from("All gifts opened!")
                .centered()
                .style(self.theme.title_style)
        } else {
            Line::from(format!(
                "{}/{} opened",
                tracker.opened_count(),
                tracker.total()
            ))
            .centered()
            .style(self.theme.dimmed_style)
        }
    }

    fn render_surprise(&self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let [art, _, message, _, buttons] = centered_rows(area, [3, 1, 2, 1, Button::HEIGHT]);

        render_art(&PRESENT_ART, Style::default().fg(self.theme.accent), art, buf);
        Paragraph::new(self.greeting.surprise_message.as_str())
            .centered()
            .wrap(Wrap { trim: true })
            .style(self.theme.base_style)
            .render(message, buf);

        self.render_buttons(buttons, buf, hits);
    }

    fn render_complete(&self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let list_height = u16::try_from(self.catalog.len()).unwrap_or(u16::MAX);
        let [title, _, list, _, buttons] =
            centered_rows(area, [1, 1, list_height, 1, Button::HEIGHT]);

        Line::from(self.greeting.complete_message.as_str())
            .centered()
            .style(self.theme.title_style)
            .render(title, buf);

        let lines: Vec<Line<'_>> = self
            .catalog
            .iter()
            .map(|gift| {
                Line::from(vec![
                    Span::styled(
                        format!("#{} {}", gift.id(), gift.title()),
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(": "),
                    Span::styled(gift.message(), self.theme.base_style),
                ])
                .centered()
            })
            .collect();
        Paragraph::new(lines).render(list, buf);

        self.render_buttons(buttons, buf, hits);
    }
}

impl StatefulWidget for PageScreen<'_> {
    type State = HitMap;

    fn render(self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        hits.clear();
        match self.session.current_page() {
            Page::Welcome => self.render_welcome(area, buf, hits),
            Page::Gifts => self.render_gifts(area, buf, hits),
            Page::Surprise => self.render_surprise(area, buf, hits),
            Page::Complete => self.render_complete(area, buf, hits),
        }
    }
}

impl HasCommands for PageScreen<'_> {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let page = self.session.current_page();
        let mut commands = Vec::new();

        match page {
            Page::Welcome => {
                commands.extend(registry.keybind(Action::OpenNow, "Open now"));
                commands.extend(registry.keybind(Action::OpenLater, "Later"));
            }
            Page::Gifts => {
                commands.extend(
                    registry
                        .keybind(Action::OpenGift, "Open gift")
                        .map(|bind| bind.with_key_display(format!("1-{}", self.catalog.len()))),
                );
                if self.session.tracker().proceed_visible() {
                    commands.extend(registry.keybind(Action::Proceed, "See all"));
                }
                commands.extend(registry.keybind(Action::Back, "Back"));
            }
            Page::Surprise | Page::Complete => {
                commands.extend(registry.keybind(Action::Back, "Back"));
            }
        }

        if page != Page::Welcome {
            commands.extend(registry.keybind(Action::GoHome, "Home"));
        }
        commands.extend(registry.keybind(Action::ToggleDebug, "State"));
        commands.extend(registry.keybind(Action::Quit, "Quit"));
        commands
    }
}

/// Grid placement for gift tiles: one row up to four gifts, two rows above.
#[derive(Debug, Clone, Copy)]
struct TileLayout {
    count: usize,
    per_row: usize,
}

impl TileLayout {
    fn new(count: usize) -> Self {
        let per_row = if count > TILES_PER_ROW {
            count.div_ceil(2)
        } else {
            count.max(1)
        };
        Self { count, per_row }
    }

    fn rows(self) -> usize {
        self.count.div_ceil(self.per_row)
    }

    fn height(self) -> u16 {
        u16::try_from(self.rows())
            .unwrap_or(1)
            .saturating_mul(TILE_SLOT_HEIGHT)
    }

    /// Slot for `id` inside `area`, including the spare lift row.
    fn slot(self, id: GiftId, area: Rect) -> Rect {
        let index = id.index();
        let row = index / self.per_row;
        let col = index % self.per_row;
        let in_row = self.per_row.min(self.count - row * self.per_row);

        let per_row = u16::try_from(self.per_row).unwrap_or(1);
        let gaps = TILE_GAP.saturating_mul(per_row.saturating_sub(1));
        let width = (area.width.saturating_sub(gaps) / per_row).min(GiftTile::WIDTH);

        let in_row = u16::try_from(in_row).unwrap_or(1);
        let row_width = width
            .saturating_mul(in_row)
            .saturating_add(TILE_GAP.saturating_mul(in_row.saturating_sub(1)));
        let x0 = area.x + area.width.saturating_sub(row_width) / 2;

        let col = u16::try_from(col).unwrap_or(0);
        let row = u16::try_from(row).unwrap_or(0);
        let x = x0.saturating_add(col.saturating_mul(width.saturating_add(TILE_GAP)));
        let y = area.y.saturating_add(row.saturating_mul(TILE_SLOT_HEIGHT));

        Rect::new(x, y, width, TILE_SLOT_HEIGHT).intersection(area)
    }
}

/// Splits `area` into rows of the given heights, centered vertically.
fn centered_rows<const N: usize>(area: Rect, heights: [u16; N]) -> [Rect; N] {
    let constraints = iter::once(Constraint::Fill(1))
        .chain(heights.map(Constraint::Length))
        .chain(iter::once(Constraint::Fill(1)));
    let rows = Layout::vertical(constraints).split(area);
    std::array::from_fn(|i| rows[i + 1])
}

fn render_art(lines: &[&'static str], style: Style, area: Rect, buf: &mut Buffer) {
    let text: Vec<Line<'static>> = lines.iter().map(|line| Line::from(*line).centered()).collect();
    Paragraph::new(text).style(style).render(area, buf);
}
