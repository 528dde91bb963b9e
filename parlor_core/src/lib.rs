pub mod card;
pub mod deck;
pub mod rps;

pub use card::*;
pub use deck::{DealError, Deck, DeckState, DECK_SIZE};
pub use rps::{
    check_win, get_choices, play_round, Choice, Choices, InputError, Opponent, Outcome,
    RandomOpponent, Verdict, PROMPT,
};

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    #[test]
    fn test_round_through_root_exports() {
        let mut input = Cursor::new("rock\n".as_bytes());
        let mut output = Vec::new();
        let choices: crate::Choices =
            crate::get_choices(&mut input, &mut output, &mut crate::Choice::Scissors).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), crate::PROMPT);

        let verdict = crate::check_win(&choices.player, choices.computer).unwrap();
        assert_eq!(verdict.outcome, crate::Outcome::Win);
    }
}
