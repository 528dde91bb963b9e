use parlor_core::card::Card;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Width and height of a card in terminal cells
pub const CARD_WIDTH: u16 = 9;
pub const CARD_HEIGHT: u16 = 7;

/// A single face-up playing card
pub struct CardWidget {
    pub card: Card,
    /// Show the point value in the middle of the card
    pub show_value: bool,
}

impl CardWidget {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            show_value: true,
        }
    }

    pub fn show_value(mut self, show_value: bool) -> Self {
        self.show_value = show_value;
        self
    }

    fn suit_color(&self) -> Color {
        if self.card.suit.is_red() {
            Theme::RED_SUIT
        } else {
            Theme::BLACK_SUIT
        }
    }
}

impl Widget for CardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < CARD_WIDTH || area.height < CARD_HEIGHT {
            return;
        }

        let border_style = Style::default().fg(Theme::CARD_BORDER);
        render_outline(area, buf, border_style);

        let suit_color = self.suit_color();
        let rank_style = Style::default().fg(suit_color).add_modifier(Modifier::BOLD);
        let suit_style = Style::default().fg(suit_color);

        let rank = self.card.rank.rank.short_name();
        let suit = self.card.suit.symbol().to_string();
        let rank_len = rank.len() as u16;

        // Top-left: rank then suit
        buf.set_string(area.x + 1, area.y + 1, rank, rank_style);
        buf.set_string(area.x + 1 + rank_len, area.y + 1, &suit, suit_style);

        // Bottom-right: suit then rank, flush against the border
        let br_y = area.y + CARD_HEIGHT - 2;
        let br_x = area.x + CARD_WIDTH - 1 - rank_len;
        buf.set_string(br_x, br_y, rank, rank_style);
        buf.set_string(br_x - 1, br_y, &suit, suit_style);

        let center_y = area.y + CARD_HEIGHT / 2;
        if self.show_value {
            let value = self.card.value().to_string();
            let value_x = area.x + (CARD_WIDTH - value.len() as u16) / 2;
            let value_style = Style::default().fg(Theme::GOLD);
            buf.set_string(value_x, center_y, &value, value_style);
        } else {
            buf.set_string(area.x + CARD_WIDTH / 2, center_y, &suit, suit_style);
        }
    }
}

fn render_outline(area: Rect, buf: &mut Buffer, border_style: Style) {
    let right = area.x + CARD_WIDTH - 1;
    let bottom = area.y + CARD_HEIGHT - 1;

    buf.set_string(area.x, area.y, "\u{256d}", border_style); // ╭
    buf.set_string(right, area.y, "\u{256e}", border_style); // ╮
    buf.set_string(area.x, bottom, "\u{2570}", border_style); // ╰
    buf.set_string(right, bottom, "\u{256f}", border_style); // ╯

    for x in 1..CARD_WIDTH - 1 {
        buf.set_string(area.x + x, area.y, "\u{2500}", border_style); // ─
        buf.set_string(area.x + x, bottom, "\u{2500}", border_style);
    }

    for y in 1..CARD_HEIGHT - 1 {
        buf.set_string(area.x, area.y + y, "\u{2502}", border_style); // │
        buf.set_string(right, area.y + y, "\u{2502}", border_style);
        for x in 1..CARD_WIDTH - 1 {
            buf.set_string(area.x + x, area.y + y, " ", Style::default());
        }
    }
}
