//! Results command
//!
//! Date-scoped historical results. Not implemented yet: the command is
//! reserved in the CLI surface and acknowledges itself as pending.

use super::CommandOutcome;
use crate::error::Result;
use crate::output;
use crate::storage::Store;

/// Check the results of a given date (`YYYYMMDD`).
///
/// # Errors
///
/// Currently infallible; the signature matches the other commands so the
/// binary dispatch stays uniform.
pub fn run_results(_store: &Store, _date: &str) -> Result<CommandOutcome> {
    output::print_error("Esta funcionalidad aún no está implementada");
    Ok(CommandOutcome::Rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn results_is_a_stub() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("games.db"));

        let outcome = run_results(&store, "20260805").unwrap();
        assert!(matches!(outcome, CommandOutcome::Rejected));
    }
}
