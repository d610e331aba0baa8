//! Interactive console table: seats 1-7 named players, then plays
//! rounds until someone declines another one.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::io::{StdinDecisions, StdoutSink, is_affirmative};
use twentyone::{Game, Player};

fn main() {
    env_logger::init();

    println!("\t\tWelcome to the table. Let's play some blackjack.\n");

    let count = prompt_player_count();
    let mut players = Vec::with_capacity(count);
    for seat in 1..=count {
        let name = prompt_name(seat);
        players.push(Player::new(name, Box::new(StdinDecisions)));
    }
    println!();

    // Seed once at startup; every shuffle reuses the same generator.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(players, seed);
    let mut sink = StdoutSink;

    loop {
        game.play(&mut sink);

        let again = prompt_line("\nDo you want to play again? (Y/N): ");
        if !is_affirmative(&again) {
            break;
        }
        println!();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Re-asks until the count is in the 1-7 the table can seat.
fn prompt_player_count() -> usize {
    loop {
        let input = prompt_line("How many players? (1-7): ");
        match input.parse::<usize>() {
            Ok(count) if (1..=7).contains(&count) => return count,
            _ => println!("Please enter a number from 1 to 7."),
        }
    }
}

fn prompt_name(seat: usize) -> String {
    loop {
        let name = prompt_line(&format!("Enter player {seat} name: "));
        if !name.is_empty() {
            return name;
        }
    }
}
