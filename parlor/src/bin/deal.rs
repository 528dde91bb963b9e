use std::io::{self, IsTerminal, Write};

use clap::Parser;
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal;
use parlor_core::card::{Card, RankDescriptor};
use parlor_core::deck::Deck;
use parlor_widgets::{HandWidget, CARD_HEIGHT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};
use ratatui::widgets::Widget;

/// Shuffle a standard 52-card deck and deal a hand from it
#[derive(Parser, Debug)]
#[command(name = "deal")]
struct Args {
    /// Number of cards to deal
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// Seed the shuffle for a reproducible deal
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the hand as text instead of drawing cards
    #[arg(long)]
    plain: bool,

    /// Draw the suit instead of the point value in the middle of each card
    #[arg(long)]
    no_values: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut stdout = io::stdout();

    print_rank_table(&mut stdout)?;

    let mut deck = build_deck(args.seed);
    let hand = deck.deal(args.count)?;
    if args.plain || !fits_terminal(&hand) {
        print_plain(&mut stdout, &hand)?;
    } else {
        print_cards(&mut stdout, &hand, !args.no_values)?;
    }

    writeln!(stdout, "{} cards left in the deck", deck.remaining())?;
    Ok(())
}

/// A shuffled deck, reproducible when a seed is given
fn build_deck(seed: Option<u64>) -> Deck {
    seed.map_or_else(
        || Deck::shuffled(&mut rand::thread_rng()),
        Deck::shuffled_with_seed,
    )
}

fn print_rank_table<W: Write>(out: &mut W) -> io::Result<()> {
    let ranks: Vec<String> = RankDescriptor::table()
        .iter()
        .map(|d| d.to_string())
        .collect();
    writeln!(out, "ranks: {}", ranks.join(" "))
}

fn fits_terminal(hand: &[Card]) -> bool {
    if hand.is_empty() || !io::stdout().is_terminal() {
        return false;
    }
    match terminal::size() {
        Ok((width, _)) => HandWidget::new(hand).total_width() <= width,
        Err(e) => {
            log::debug!("terminal size unavailable: {}", e);
            false
        }
    }
}

fn print_plain<W: Write>(out: &mut W, hand: &[Card]) -> io::Result<()> {
    if hand.is_empty() {
        return writeln!(out, "no cards dealt");
    }
    let cards: Vec<String> = hand.iter().map(|c| c.to_string()).collect();
    let total: u32 = hand.iter().map(|c| u32::from(c.value())).sum();
    writeln!(out, "{} (value {})", cards.join(" "), total)
}

/// Draw the hand into an off-screen buffer and write it out line by line
fn print_cards<W: Write>(out: &mut W, hand: &[Card], show_values: bool) -> io::Result<()> {
    let widget = HandWidget::new(hand).show_values(show_values);
    let area = Rect::new(0, 0, widget.total_width(), CARD_HEIGHT);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);

    for y in 0..area.height {
        for x in 0..area.width {
            let cell = &buf[(x, y)];
            let bold = cell.modifier.contains(Modifier::BOLD);
            queue!(out, SetForegroundColor(to_crossterm(cell.fg)))?;
            if bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(cell.symbol()))?;
            if bold {
                queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            }
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

fn to_crossterm(color: Color) -> crossterm::style::Color {
    match color {
        Color::Rgb(r, g, b) => crossterm::style::Color::Rgb { r, g, b },
        _ => crossterm::style::Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop the colour and attribute escapes, keeping the drawn cells
    fn strip_styles(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn test_rank_table_line() {
        let mut out = Vec::new();
        print_rank_table(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ranks: A=11 2=2 3=3 4=4 5=5 6=6 7=7 8=8 9=9 10=10 J=10 Q=10 K=10\n"
        );
    }

    #[test]
    fn test_plain_hand() {
        let mut deck = Deck::standard();
        let hand = deck.deal(3).unwrap();
        let mut out = Vec::new();
        print_plain(&mut out, &hand).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "K\u{2666} Q\u{2666} J\u{2666} (value 30)\n"
        );
    }

    #[test]
    fn test_plain_empty_hand() {
        let mut out = Vec::new();
        print_plain(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "no cards dealt\n");
    }

    #[test]
    fn test_drawn_hand_has_one_line_per_row() {
        let mut deck = Deck::standard();
        let hand = deck.deal(2).unwrap();
        let mut out = Vec::new();
        print_cards(&mut out, &hand, true).unwrap();
        let text = strip_styles(&String::from_utf8(out).unwrap());
        assert_eq!(text.lines().count(), CARD_HEIGHT as usize);
        assert!(text.contains('K'));
        assert!(text.contains('Q'));
        assert!(text.contains("10"));
    }

    #[test]
    fn test_drawn_hand_without_values() {
        let mut deck = Deck::standard();
        // King and queen: only the value would print a '1'
        let hand = deck.deal(2).unwrap();
        let mut out = Vec::new();
        print_cards(&mut out, &hand, false).unwrap();
        let text = strip_styles(&String::from_utf8(out).unwrap());
        assert!(!text.contains('1'));
        assert!(text.contains('\u{2666}'));
    }

    #[test]
    fn test_seeded_deal_is_reproducible() {
        let args = Args::parse_from(["deal", "--seed", "42"]);
        let mut deck = build_deck(args.seed);
        let mut expected = Deck::shuffled_with_seed(42);
        assert_eq!(deck.deal(5).unwrap(), expected.deal(5).unwrap());
        assert_eq!(build_deck(None).remaining(), 52);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["deal"]);
        assert_eq!(args.count, 5);
        assert_eq!(args.seed, None);
        assert!(!args.plain);
        assert!(!args.no_values);

        let args = Args::parse_from(["deal", "-n", "7", "--seed", "42", "--plain", "--no-values"]);
        assert_eq!(args.count, 7);
        assert_eq!(args.seed, Some(42));
        assert!(args.plain);
        assert!(args.no_values);
    }
}
