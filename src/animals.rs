use serde::{Deserialize, Serialize};

/// A performing animal. Identity is the registry index, stable for the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
}

/// Insertion-ordered animal registry. Indices are assigned sequentially from
/// 0 and there is no removal.
#[derive(Debug, Default, Clone)]
pub struct AnimalsDb {
    animals: Vec<Animal>,
}

impl AnimalsDb {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            animals: Vec::with_capacity(cap),
        }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter();
        let mut db = Self::with_capacity(names.size_hint().0);
        for name in names {
            db.add(name.into());
        }
        db
    }

    /// Register an animal, returning its index.
    #[inline]
    pub fn add(&mut self, name: impl Into<String>) -> u8 {
        let idx = self.animals.len() as u8;
        self.animals.push(Animal { name: name.into() });
        idx
    }

    #[inline]
    pub fn get(&self, idx: u8) -> Option<&Animal> {
        self.animals.get(idx as usize)
    }

    #[inline]
    pub fn name(&self, idx: u8) -> Option<&str> {
        self.get(idx).map(|a| a.name.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter()
    }
}
