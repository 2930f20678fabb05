use std::fs;
use std::path::Path;

use crate::types::MoveCode;
use crate::vocab::Vocabulary;

/// Parsed run configuration: the animal roster and the allowed move codes.
///
/// `codes` preserves configuration order for display; `vocab` is the same
/// set in membership form for the interpreter.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub animal_names: Vec<String>,
    pub codes: Vec<MoveCode>,
    pub vocab: Vocabulary,
}

/// Parse the two-line config format: line 1 holds whitespace-separated
/// animal names, line 2 whitespace-separated move codes. Either line may be
/// empty or absent. Any code outside the fixed universe is rejected.
pub fn parse_config(text: &str) -> Result<GameConfig, String> {
    let mut lines = text.lines();

    let animal_names: Vec<String> = lines
        .next()
        .unwrap_or("")
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut codes: Vec<MoveCode> = Vec::new();
    for token in lines.next().unwrap_or("").split_whitespace() {
        let code = MoveCode::from_token(token.as_bytes())
            .ok_or_else(|| format!("unknown move code '{token}' in config"))?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    let vocab = Vocabulary::from_codes(&codes);
    Ok(GameConfig {
        animal_names,
        codes,
        vocab,
    })
}

/// Load and parse a config file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, String> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|e| format!("failed to read config '{}': {e}", path.as_ref().display()))?;
    parse_config(&text)
}
