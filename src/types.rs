use serde::{Deserialize, Serialize};

/// The closed universe of two-letter move codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MoveCode {
    /// Top of Blue moves onto top of Red.
    Ki,
    /// Top of Red moves onto top of Blue.
    Lo,
    /// The two tops swap podiums.
    So,
    /// Bottom of Blue rotates onto top of Blue.
    Ni,
    /// Bottom of Red rotates onto top of Red.
    Ma,
}

impl MoveCode {
    #[inline]
    pub fn all() -> [MoveCode; 5] {
        [
            MoveCode::Ki,
            MoveCode::Lo,
            MoveCode::So,
            MoveCode::Ni,
            MoveCode::Ma,
        ]
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            MoveCode::Ki => "KI",
            MoveCode::Lo => "LO",
            MoveCode::So => "SO",
            MoveCode::Ni => "NI",
            MoveCode::Ma => "MA",
        }
    }

    /// Parse a single two-byte token. Anything outside the fixed universe
    /// (including lowercase or non-ASCII input) is `None`.
    #[inline]
    pub fn from_token(token: &[u8]) -> Option<MoveCode> {
        match token {
            b"KI" => Some(MoveCode::Ki),
            b"LO" => Some(MoveCode::Lo),
            b"SO" => Some(MoveCode::So),
            b"NI" => Some(MoveCode::Ni),
            b"MA" => Some(MoveCode::Ma),
            _ => None,
        }
    }
}
