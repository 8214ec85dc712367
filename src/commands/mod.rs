//! Command implementations

pub mod play;
pub mod results;

pub use play::run_play;
pub use results::run_results;

/// How a command ended, mapped to the process exit status by the binary.
#[must_use]
pub enum CommandOutcome {
    /// The command ran to completion.
    Completed,
    /// The input was rejected before reaching the game.
    Rejected,
}
