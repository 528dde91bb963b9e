pub mod card;
pub mod hand;
pub mod theme;

pub use card::{CardWidget, CARD_HEIGHT, CARD_WIDTH};
pub use hand::HandWidget;
pub use theme::Theme;
