use serde::{Deserialize, Serialize};

/// A registered player. `eligible` tracks whether they may still act in the
/// current scoring round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub eligible: bool,
    pub points: u32,
}

impl Player {
    #[inline]
    fn new(name: String) -> Self {
        Self {
            name,
            eligible: true,
            points: 0,
        }
    }
}

/// Registration-ordered player roster.
#[derive(Debug, Clone, Default)]
pub struct Players {
    players: Vec<Player>,
}

impl Players {
    /// Build the roster from distinct names. At least one player is required
    /// and duplicate names are rejected.
    pub fn from_names<I, S>(names: I) -> Result<Players, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players: Vec<Player> = Vec::new();
        for name in names {
            let name = name.into();
            if players.iter().any(|p| p.name == name) {
                return Err(format!("duplicate player name '{name}'"));
            }
            players.push(Player::new(name));
        }
        if players.is_empty() {
            return Err("at least one player is required".to_string());
        }
        Ok(Players { players })
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Player> {
        self.players.get(i)
    }

    #[inline]
    pub fn by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    #[inline]
    fn by_name_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    #[inline]
    pub fn exists(&self, name: &str) -> bool {
        self.by_name(name).is_some()
    }

    /// True iff the player exists and is still turn-eligible.
    #[inline]
    pub fn can_play(&self, name: &str) -> bool {
        self.by_name(name).is_some_and(|p| p.eligible)
    }

    /// Award a point and re-arm the player's eligibility. No-op for an
    /// unknown name.
    pub fn award_point(&mut self, name: &str) {
        if let Some(p) = self.by_name_mut(name) {
            p.points += 1;
            p.eligible = true;
        }
    }

    /// The player has acted this round without scoring.
    pub fn mark_played(&mut self, name: &str) {
        if let Some(p) = self.by_name_mut(name) {
            p.eligible = false;
        }
    }

    /// Everyone may act again.
    pub fn reset_turns(&mut self) {
        for p in &mut self.players {
            p.eligible = true;
        }
    }

    /// The one player still eligible, if exactly one remains.
    pub fn sole_eligible(&self) -> Option<&Player> {
        let mut it = self.players.iter().filter(|p| p.eligible);
        let first = it.next()?;
        if it.next().is_none() {
            Some(first)
        } else {
            None
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Registration-order iteration (also the standings order).
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
