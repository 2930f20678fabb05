/// One colour's stack of animal indices.
///
/// Bottom is slot 0, top is the last slot. Equality is order-sensitive:
/// two podiums are equal iff they hold the same indices at every level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Podium {
    slots: Vec<u8>,
}

impl Podium {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            slots: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn push_top(&mut self, animal: u8) {
        self.slots.push(animal);
    }

    /// `None` when the podium is empty.
    #[inline]
    pub fn pop_top(&mut self) -> Option<u8> {
        self.slots.pop()
    }

    /// `None` when the podium is empty. O(height): the remaining slots shift
    /// down one level.
    #[inline]
    pub fn pop_bottom(&mut self) -> Option<u8> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.slots.remove(0))
        }
    }

    #[inline]
    pub fn contains(&self, animal: u8) -> bool {
        self.slots.contains(&animal)
    }

    /// Animal at the given level (0 = bottom), if the podium is that tall.
    #[inline]
    pub fn get(&self, level: usize) -> Option<u8> {
        self.slots.get(level).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Bottom-to-top iteration.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.slots.iter().copied()
    }
}

/// Tallest of the four live podiums; drives the display row count.
#[inline]
pub fn max_height(p1: &Podium, p2: &Podium, p3: &Podium, p4: &Podium) -> usize {
    p1.len().max(p2.len()).max(p3.len()).max(p4.len())
}
