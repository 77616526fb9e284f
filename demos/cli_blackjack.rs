//! CLI blackjack demo.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_engine::{Card, Game, GameOptions, Outcome, Phase, Rank, Suit};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut game = match Game::new(GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    loop {
        while game.phase() == Phase::PlayerTurn {
            print_table(&game);

            let result = match prompt_line("[h]it [s]tand: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Round aborted: {err}");
            }
        }

        print_table(&game);
        match game.outcome() {
            Some(Outcome::PlayerWin) => println!("Winner: Player"),
            Some(Outcome::DealerWin) => println!("Winner: Dealer"),
            Some(Outcome::Tie) => println!("Winner: Tie"),
            None => println!("No result."),
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }

        if let Err(err) = game.new_round() {
            println!("Deal error: {err}");
            return;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let dealer_view = format_dealer(game);
    let dealer_value = if game.is_hole_revealed() {
        game.dealer_value().to_string()
    } else {
        "?".to_string()
    };
    println!("\nDealer: {dealer_view} (value {dealer_value})");
    println!(
        "Player: {} (value {})\n",
        format_cards(game.player_hand().cards()),
        game.player_value()
    );
}

fn format_dealer(game: &Game) -> String {
    let visible = format_cards(game.visible_dealer_cards());
    if game.is_hole_revealed() {
        visible
    } else {
        format!("?? {visible}")
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        numeric => numeric.name(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
