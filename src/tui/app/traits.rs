//! Traits for selection behavior
//!
//! `SelectableList` drives tile selection inside a carousel's visible page.

/// Trait for navigable list state
///
/// Default implementations clamp to the list bounds instead of wrapping;
/// wrapping belongs to page turns, not selection.
pub trait SelectableList {
    /// Returns the total number of items in the list
    fn len(&self) -> usize;

    /// Returns true if the list is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the currently selected index
    fn selected_index(&self) -> usize;

    /// Sets the selected index
    fn set_selected_index(&mut self, idx: usize);

    /// Move selection to the next item (clamped to last item)
    fn select_next(&mut self) {
        if !self.is_empty() {
            let new_idx = (self.selected_index() + 1).min(self.len() - 1);
            self.set_selected_index(new_idx);
        }
    }

    /// Move selection to the previous item (clamped to first item)
    fn select_prev(&mut self) {
        let new_idx = self.selected_index().saturating_sub(1);
        self.set_selected_index(new_idx);
    }

    fn select_last(&mut self) {
        if !self.is_empty() {
            self.set_selected_index(self.len() - 1);
        }
    }

    /// Pull the selection back inside the list after it shrank
    fn clamp_selection(&mut self) {
        let max = self.len().saturating_sub(1);
        if self.selected_index() > max {
            self.set_selected_index(max);
        }
    }
}
