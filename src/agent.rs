//! Agents that choose actions for a player.

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::game::{Action, GameState};

/// Chooses an action for the player to act.
pub trait Agent {
    /// Picks one of `possible_actions`, the exact list returned by
    /// [`GameState::possible_actions`] for `state`.
    ///
    /// Returns `None` when there is nothing to choose from or the agent can no
    /// longer decide.
    fn get_action(&mut self, state: &GameState, possible_actions: &[Action]) -> Option<Action>;
}

/// An agent that picks uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    /// Creates a random agent with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn get_action(&mut self, _state: &GameState, possible_actions: &[Action]) -> Option<Action> {
        possible_actions.choose(&mut self.rng).copied()
    }
}

#[cfg(feature = "std")]
pub use human::HumanAgent;

#[cfg(feature = "std")]
mod human {
    use std::io::{self, BufRead, Write};

    use crate::game::{Action, GameState};

    use super::Agent;

    /// An agent that prompts for a numbered choice on a text stream.
    ///
    /// Non-numeric or out-of-range replies are ignored and the prompt is
    /// repeated.
    #[derive(Debug)]
    pub struct HumanAgent<R, W> {
        name: String,
        input: R,
        output: W,
    }

    impl HumanAgent<io::StdinLock<'static>, io::Stdout> {
        /// Creates an agent reading from stdin and prompting on stdout.
        #[must_use]
        pub fn stdio(name: impl Into<String>) -> Self {
            Self::new(name, io::stdin().lock(), io::stdout())
        }
    }

    impl<R: BufRead, W: Write> HumanAgent<R, W> {
        /// Creates an agent over the given streams.
        pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
            Self {
                name: name.into(),
                input,
                output,
            }
        }

        /// Returns the agent's name.
        #[must_use]
        pub fn name(&self) -> &str {
            &self.name
        }

        fn prompt(&mut self, possible_actions: &[Action]) -> io::Result<()> {
            let choices: Vec<String> = possible_actions
                .iter()
                .enumerate()
                .map(|(index, action)| format!("({index}){action}"))
                .collect();
            write!(
                self.output,
                "== Choose action for {} {}? ",
                self.name,
                choices.join("/")
            )?;
            self.output.flush()
        }
    }

    impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
        fn get_action(
            &mut self,
            _state: &GameState,
            possible_actions: &[Action],
        ) -> Option<Action> {
            if possible_actions.is_empty() {
                return None;
            }

            let mut line = String::new();
            loop {
                self.prompt(possible_actions).ok()?;

                line.clear();
                if self.input.read_line(&mut line).ok()? == 0 {
                    return None;
                }

                match line.trim().parse::<usize>() {
                    Ok(index) if index < possible_actions.len() => {
                        return Some(possible_actions[index]);
                    }
                    _ => log::debug!("ignoring selection {:?}", line.trim()),
                }
            }
        }
    }
}
