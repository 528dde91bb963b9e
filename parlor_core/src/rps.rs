use std::fmt;
use std::io::{self, BufRead, Write};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

pub const PROMPT: &str = "Enter a choice (rock, paper, scissors): ";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input closed before a choice was entered")]
    Closed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// The choice this one defeats
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Exact, case-sensitive match against the lowercase names
    pub fn from_input(input: &str) -> Option<Choice> {
        Choice::ALL.into_iter().find(|c| c.as_str() == input)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the computer's move
pub trait Opponent {
    fn throw(&mut self) -> Choice;
}

/// A fixed choice always throws itself
impl Opponent for Choice {
    fn throw(&mut self) -> Choice {
        *self
    }
}

/// Picks uniformly among rock, paper and scissors
pub struct RandomOpponent<R> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn throw(&mut self) -> Choice {
        // ALL is non-empty
        let choice = Choice::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Choice::Rock);
        log::debug!("computer throws {}", choice);
        choice
    }
}

/// Outcome from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    Win,
    Lose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match (self.outcome, self.player) {
            (Outcome::Tie, _) => "It's a tie!",
            (Outcome::Win, Choice::Rock) => "Rock smashes scisors! You win!",
            (Outcome::Lose, Choice::Rock) => "Paper covers rock, you lose :(",
            (Outcome::Win, Choice::Paper) => "Paper covers rock, you win!",
            (Outcome::Lose, Choice::Paper) => "Scissors cut paper, you lose :(",
            (Outcome::Win, Choice::Scissors) => "Scissors cuts paper, you win!",
            (Outcome::Lose, Choice::Scissors) => "Rock smashes scisors!, you lose :(",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One round's moves. The player's text is kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices {
    pub player: String,
    pub computer: Choice,
}

/// Prompt for the player's move and draw the computer's.
pub fn get_choices<I, W, O>(
    input: &mut I,
    output: &mut W,
    opponent: &mut O,
) -> Result<Choices, InputError>
where
    I: BufRead,
    W: Write,
    O: Opponent + ?Sized,
{
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Closed);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(Choices {
        player: line,
        computer: opponent.throw(),
    })
}

/// Judge a round. `None` when the player's text isn't one of the three moves.
pub fn check_win(player: &str, computer: Choice) -> Option<Verdict> {
    let Some(player) = Choice::from_input(player) else {
        log::debug!("no rule for player choice {:?}", player);
        return None;
    };

    let outcome = if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    };

    Some(Verdict {
        player,
        computer,
        outcome,
    })
}

/// Play a single round on the given console streams.
pub fn play_round<I, W, O>(
    input: &mut I,
    output: &mut W,
    opponent: &mut O,
) -> Result<Option<Verdict>, InputError>
where
    I: BufRead,
    W: Write,
    O: Opponent + ?Sized,
{
    let choices = get_choices(input, output, opponent)?;
    writeln!(
        output,
        "You chose {}, computer chose {}",
        choices.player, choices.computer
    )?;

    let verdict = check_win(&choices.player, choices.computer);
    if let Some(verdict) = &verdict {
        writeln!(output, "{}", verdict)?;
    }
    output.flush()?;
    Ok(verdict)
}
