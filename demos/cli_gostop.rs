//! CLI Go-Stop example: you against a random opponent.

use std::time::{SystemTime, UNIX_EPOCH};

use gostop::{
    Agent, Card, GameOptions, GameState, Group, HumanAgent, Phase, RandomAgent, Renderer,
    TextRenderer,
};

const HUMAN: usize = 0;

fn main() {
    println!("Go-Stop CLI example (press Ctrl-D to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut state = match GameState::new_game(GameOptions::default(), seed) {
        Ok(state) => state,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    let mut human = HumanAgent::stdio("you");
    let mut opponent = RandomAgent::new(seed.wrapping_add(1));
    let mut renderer = TextRenderer;

    loop {
        let actions = state.possible_actions();
        if actions.is_empty() {
            break;
        }

        let player = state.current_player();
        let action = if player == HUMAN {
            print_table(&state);
            human.get_action(&state, &actions)
        } else {
            opponent.get_action(&state, &actions)
        };

        let Some(action) = action else {
            println!("Goodbye.");
            return;
        };

        if player != HUMAN {
            println!("Opponent plays: {action}");
        }

        match state.generate_successor(&action) {
            Ok(Some(next)) => state = next,
            Ok(None) => break,
            Err(err) => {
                println!("Action error: {err}");
                return;
            }
        }
    }

    println!("\n{}", renderer.render(&state));
    match state.winner() {
        Some(HUMAN) => println!("You win with {} points.", state.points(HUMAN)),
        Some(winner) => println!("Opponent wins with {} points.", state.points(winner)),
        None => println!("Nobody reached the threshold. Draw."),
    }
}

fn print_table(state: &GameState) {
    println!("\nDeck: {} cards remaining", state.deck().len());
    println!("Table: {}", format_cards(state.table_cards().cards()));
    println!(
        "Your hand: {}",
        format_cards(state.player_hands()[HUMAN].cards())
    );
    println!(
        "Your captures: {} | {} points",
        format_cards(state.taken_cards()[HUMAN].cards()),
        state.points(HUMAN)
    );
    if let Phase::Capture { top_card, .. } = state.phase() {
        println!("Drawn: {}", format_card(top_card));
    }
    if *state.phase() == Phase::GoStop {
        println!("You reached the threshold.");
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" | ")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.is(Group::Bright) {
        "33"
    } else if card.is(Group::Animal) {
        "32"
    } else if card.is(Group::Ribbon) {
        "31"
    } else {
        "90"
    };
    colorize(&format!("{:>2} {}", card.month().number(), card), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
