use ratatui::style::Color;

/// Colours for card rendering
pub struct Theme;

impl Theme {
    pub const CARD_BORDER: Color = Color::Rgb(108, 117, 125);

    // Suit colors
    pub const RED_SUIT: Color = Color::Rgb(230, 57, 70);
    pub const BLACK_SUIT: Color = Color::Rgb(224, 224, 224);

    pub const GOLD: Color = Color::Rgb(255, 183, 3);
}
