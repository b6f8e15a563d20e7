//! Multi-selection over the closed muscle domain.
//!
//! The domain has 36 members, so a selection is a bitmask rather than a
//! hash set: `Copy`, allocation-free, and cheap to snapshot into the
//! undo/redo history.

use super::Muscle;

/// A set of selected muscles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MuscleSelection {
    bits: u64,
}

impl MuscleSelection {
    pub const EMPTY: MuscleSelection = MuscleSelection { bits: 0 };

    pub fn new() -> Self {
        MuscleSelection::EMPTY
    }

    fn bit(muscle: Muscle) -> u64 {
        1u64 << muscle.index()
    }

    pub fn contains(&self, muscle: Muscle) -> bool {
        self.bits & Self::bit(muscle) != 0
    }

    pub fn add(&mut self, muscle: Muscle) {
        self.bits |= Self::bit(muscle);
    }

    pub fn remove(&mut self, muscle: Muscle) {
        self.bits &= !Self::bit(muscle);
    }

    /// Toggles the presence of a muscle in the selection.
    pub fn toggle(&mut self, muscle: Muscle) {
        self.bits ^= Self::bit(muscle);
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Selected muscles in domain order.
    pub fn iter(&self) -> impl Iterator<Item = Muscle> + '_ {
        Muscle::ALL.into_iter().filter(|m| self.contains(*m))
    }
}

impl FromIterator<Muscle> for MuscleSelection {
    fn from_iter<I: IntoIterator<Item = Muscle>>(iter: I) -> Self {
        let mut selection = MuscleSelection::new();
        for muscle in iter {
            selection.add(muscle);
        }
        selection
    }
}
