//! Terminal blackjack: one game against the dealer.
//!
//! Set `TWENTYONE_SEED` to replay a shuffle and `RUST_LOG=debug` to see the
//! engine's log on stderr.

use std::env;
use std::io::{self, BufRead, Stdout, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, ResetColor, SetBackgroundColor, Stylize};
use crossterm::terminal::{Clear, ClearType};
use log::{error, warn};

use twentyone::{Card, DecisionSource, GameResult, Hand, Renderer, Table, Verdict};

const CARD_HEIGHT: usize = 7;

type CardLines = [String; CARD_HEIGHT];

fn card_lines(card: &Card) -> CardLines {
    let color = if card.suit.is_red() {
        Color::Red
    } else {
        Color::Black
    };
    let label = card.rank.label();
    let face = |text: String| format!("│{}│", text.with(color));

    [
        "┌─────────┐".to_owned(),
        face(format!("{label:<9}")),
        face(" ".repeat(9)),
        face(format!("    {}    ", card.suit.symbol())),
        face(" ".repeat(9)),
        face(format!("{label:>9}")),
        "└─────────┘".to_owned(),
    ]
}

fn back_of_card_lines() -> CardLines {
    [
        "┌─────────┐".to_owned(),
        "│░░░░░░░░░│".to_owned(),
        "│░ T W E ░│".to_owned(),
        "│░ N T Y ░│".to_owned(),
        "│░ O N E ░│".to_owned(),
        "│░░░░░░░░░│".to_owned(),
        "└─────────┘".to_owned(),
    ]
}

fn print_row(row: &[CardLines]) {
    for line in 0..CARD_HEIGHT {
        let joined: Vec<&str> = row.iter().map(|card| card[line].as_str()).collect();
        println!("{}", joined.join(" "));
    }
}

fn hand_row(hand: &Hand) -> Vec<CardLines> {
    hand.cards().iter().map(card_lines).collect()
}

struct ConsoleRenderer {
    out: Stdout,
    /// Dealer cards waiting for the hole card to be placed beside them.
    pending: Vec<CardLines>,
}

impl ConsoleRenderer {
    fn new() -> Self {
        Self {
            out: io::stdout(),
            pending: Vec::new(),
        }
    }

    fn clear_screen(&mut self) {
        if let Err(err) = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!("failed to clear screen: {err}");
        }
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            print_row(&self.pending);
            self.pending.clear();
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render_dealer_up_card(&mut self, dealer_hand: &Hand) {
        self.clear_screen();
        println!("Dealer has: ");
        self.pending = dealer_hand.up_card().map(card_lines).into_iter().collect();
    }

    fn render_hole_card(&mut self) {
        self.pending.push(back_of_card_lines());
        self.flush_pending();
    }

    fn render_player_hand(&mut self, player_hand: &Hand, value: u8) {
        self.flush_pending();
        println!();
        println!("Player has: ");
        print_row(&hand_row(player_hand));
        println!(" ({value})");
    }

    fn render_dealer_hand(&mut self, dealer_hand: &Hand, value: u8) {
        self.clear_screen();
        println!("Dealer has: ");
        print_row(&hand_row(dealer_hand));
        println!(" ({value})");
    }

    fn render_outcome(&mut self, result: &GameResult) {
        let icon = match result.outcome.verdict() {
            Verdict::Win => "💵",
            Verdict::Lose | Verdict::Push => "💸",
        };
        println!("{}  {icon}", result.outcome);
    }

    fn render_invalid_input(&mut self) {
        println!("You need to [H]it or [S]tand");
    }
}

struct StdinDecisions {
    input: io::StdinLock<'static>,
}

impl DecisionSource for StdinDecisions {
    fn next_decision(&mut self) -> Option<String> {
        println!("[H]it or [S]tand?");
        if let Err(err) = io::stdout().flush() {
            warn!("failed to flush prompt: {err}");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
            Err(err) => {
                error!("failed to read input: {err}");
                None
            }
        }
    }
}

fn display_welcome() {
    let mut out = io::stdout();
    if let Err(err) = execute!(
        out,
        SetBackgroundColor(Color::White),
        Clear(ClearType::All),
        MoveTo(0, 0)
    ) {
        warn!("failed to prepare screen: {err}");
    }
    println!(
        "{}{}{}",
        "Welcome to".green(),
        " Twenty-One".red(),
        " BlackJack".black()
    );
}

fn seed() -> u64 {
    if let Ok(raw) = env::var("TWENTYONE_SEED") {
        match raw.parse() {
            Ok(seed) => return seed,
            Err(err) => warn!("ignoring TWENTYONE_SEED={raw:?}: {err}"),
        }
    }

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    display_welcome();

    let decisions = StdinDecisions {
        input: io::stdin().lock(),
    };
    let mut table = Table::new(seed(), decisions, ConsoleRenderer::new());

    if let Err(err) = table.run() {
        error!("game aborted: {err}");
        println!("Game aborted: {err}");
    }

    if let Err(err) = execute!(io::stdout(), ResetColor) {
        warn!("failed to reset colors: {err}");
    }
}
