use crate::podium::Podium;
use crate::types::MoveCode;
use crate::vocab::Vocabulary;

/// Result of interpreting one move-code sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// Every token applied; the podiums hold the fully transformed state.
    Applied,
    /// A token was outside the allowed vocabulary; processing stopped there.
    Unauthorized,
    /// Odd-length input, or an allowed code hit an empty podium.
    Malformed,
}

/// Apply a single code to the pair. `false` means a pop found an empty
/// podium; the pair may then be partially mutated (SO pops Red before Blue),
/// so callers work on disposable clones.
pub fn execute_code(code: MoveCode, blue: &mut Podium, red: &mut Podium) -> bool {
    match code {
        MoveCode::Ki => {
            let Some(animal) = blue.pop_top() else {
                return false;
            };
            red.push_top(animal);
            true
        }
        MoveCode::Lo => {
            let Some(animal) = red.pop_top() else {
                return false;
            };
            blue.push_top(animal);
            true
        }
        MoveCode::So => {
            let Some(from_red) = red.pop_top() else {
                return false;
            };
            let Some(from_blue) = blue.pop_top() else {
                return false;
            };
            blue.push_top(from_red);
            red.push_top(from_blue);
            true
        }
        MoveCode::Ni => {
            let Some(animal) = blue.pop_bottom() else {
                return false;
            };
            blue.push_top(animal);
            true
        }
        MoveCode::Ma => {
            let Some(animal) = red.pop_bottom() else {
                return false;
            };
            red.push_top(animal);
            true
        }
    }
}

/// Interpret a whole sequence of two-character tokens against the pair,
/// stopping at the first unauthorized or infeasible token.
///
/// The podiums are mutated in place as tokens apply, so a non-`Applied`
/// outcome leaves them partially transformed: run this on clones of the live
/// pair and discard them unless the outcome is `Applied`. The empty sequence
/// is `Applied` with no state change.
pub fn execute_sequence(
    vocab: Vocabulary,
    text: &str,
    blue: &mut Podium,
    red: &mut Podium,
) -> ExecOutcome {
    let bytes = text.as_bytes();
    if bytes.len() % 2 != 0 {
        return ExecOutcome::Malformed;
    }
    for token in bytes.chunks_exact(2) {
        let Some(code) = MoveCode::from_token(token) else {
            return ExecOutcome::Unauthorized;
        };
        if !vocab.contains(code) {
            return ExecOutcome::Unauthorized;
        }
        if !execute_code(code, blue, red) {
            return ExecOutcome::Malformed;
        }
    }
    ExecOutcome::Applied
}
