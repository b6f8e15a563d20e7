//! Undo/redo bookkeeping for muscle selections: two value-semantic stacks
//! and a size cap. No notification machinery — the presentation layer
//! decides when to re-render after calling these operations.

use super::selection::MuscleSelection;

/// Tracks selection state changes, enabling undo/redo.
#[derive(Debug, Clone)]
pub struct SelectionHistory {
    max_entries: usize,
    undo_stack: Vec<MuscleSelection>,
    redo_stack: Vec<MuscleSelection>,
    current: MuscleSelection,
}

impl SelectionHistory {
    pub const DEFAULT_MAX_ENTRIES: usize = 50;

    /// Creates a history keeping at most `max_entries` undo steps; the
    /// oldest entry is evicted when the cap is exceeded.
    pub fn new(max_entries: usize) -> Self {
        SelectionHistory {
            max_entries,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            current: MuscleSelection::EMPTY,
        }
    }

    pub fn current(&self) -> MuscleSelection {
        self.current
    }

    /// Pushes a new selection state. A push equal to the current state is
    /// ignored; any real push clears the redo stack.
    pub fn push(&mut self, selection: MuscleSelection) {
        if selection == self.current {
            return;
        }
        self.undo_stack.push(self.current);
        if self.undo_stack.len() > self.max_entries {
            self.undo_stack.remove(0);
        }
        self.current = selection;
        self.redo_stack.clear();
    }

    /// Reverts to the previous state, returning it, or `None` if there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<MuscleSelection> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(self.current);
        self.current = previous;
        Some(previous)
    }

    /// Re-applies a previously undone state, returning it, or `None` if
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Option<MuscleSelection> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(self.current);
        self.current = next;
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

impl Default for SelectionHistory {
    fn default() -> Self {
        SelectionHistory::new(Self::DEFAULT_MAX_ENTRIES)
    }
}
