use parlor_core::card::Card;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::card::{CardWidget, CARD_HEIGHT, CARD_WIDTH};

/// Blank columns between neighbouring cards
pub const CARD_GAP: u16 = 1;

/// A dealt hand laid out left to right, centred in its area.
/// Cards that don't fit in the width are skipped.
pub struct HandWidget<'a> {
    pub cards: &'a [Card],
    pub show_values: bool,
}

impl<'a> HandWidget<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        Self {
            cards,
            show_values: true,
        }
    }

    pub fn show_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    /// Calculate the total width needed for the hand
    pub fn total_width(&self) -> u16 {
        let n = self.cards.len() as u16;
        if n == 0 {
            return 0;
        }
        n * CARD_WIDTH + (n - 1) * CARD_GAP
    }

    /// Get the Rect for a specific card given the hand area
    pub fn card_rect(&self, area: Rect, card_index: usize) -> Option<Rect> {
        if card_index >= self.cards.len() {
            return None;
        }

        let start_x = area.x + area.width.saturating_sub(self.total_width()) / 2;
        let x = start_x + (card_index as u16) * (CARD_WIDTH + CARD_GAP);

        Some(Rect::new(x, area.y, CARD_WIDTH, CARD_HEIGHT))
    }
}

impl<'a> Widget for HandWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < CARD_HEIGHT {
            return;
        }

        for (i, card) in self.cards.iter().enumerate() {
            if let Some(card_area) = self.card_rect(area, i) {
                if card_area.right() > area.right() {
                    continue;
                }
                CardWidget::new(*card)
                    .show_value(self.show_values)
                    .render(card_area, buf);
            }
        }
    }
}
