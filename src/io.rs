//! Boundary traits between the table and the console.
//!
//! The engine never touches stdin or stdout directly. Hit-or-stand
//! questions go through a [`DecisionProvider`] and every printed line
//! goes through a [`DisplaySink`], so a driver can be a real console
//! session or a scripted test double.

use std::io::{self, Write};

/// Blocking oracle for a participant's hit-or-stand choice.
///
/// The engine treats the answer as an opaque boolean query with no side
/// effect on the hand: `true` means hit, anything else is a stand.
pub trait DecisionProvider {
    /// Asks whether the named player wants another card. May block
    /// waiting for input.
    fn wants_hit(&mut self, name: &str) -> bool;
}

/// Sink for everything the table prints, one line per call.
pub trait DisplaySink {
    /// Displays one line of table output.
    fn display(&mut self, text: &str);
}

/// Returns whether a response token counts as a "yes".
///
/// Anything that is not an affirmative token is a stand, so typos and
/// empty input are safe.
///
/// # Example
///
/// ```
/// use twentyone::io::is_affirmative;
///
/// assert!(is_affirmative("y"));
/// assert!(is_affirmative("Yes"));
/// assert!(!is_affirmative("n"));
/// assert!(!is_affirmative(""));
/// ```
#[must_use]
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim(), "y" | "Y" | "yes" | "Yes" | "YES")
}

/// Interactive decisions read from standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinDecisions;

impl DecisionProvider for StdinDecisions {
    fn wants_hit(&mut self, name: &str) -> bool {
        print!("{name}, do you want a hit? (Y/N): ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        is_affirmative(&input)
    }
}

/// Display sink that prints to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn display(&mut self, text: &str) {
        println!("{text}");
    }
}
