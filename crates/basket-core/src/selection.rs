//! Single-selection state for list views, independent of any UI framework.

#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Move down one row, saturating at the last item.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move up one row, saturating at the first item.
    pub fn prev(&mut self) {
        self.selected = Some(self.selected.map_or(0, |idx| idx.saturating_sub(1)));
    }

    /// Keep the selection valid after the list shrinks or empties.
    pub fn clamp(&mut self, len: usize) {
        if let Some(idx) = self.selected {
            if len == 0 {
                self.selected = None;
            } else if idx >= len {
                self.selected = Some(len - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_saturates_at_end() {
        let mut selection = SelectionState::new();
        selection.next(2);
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn next_on_empty_list_selects_nothing() {
        let mut selection = SelectionState::new();
        selection.next(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn prev_saturates_at_start() {
        let mut selection = SelectionState::new();
        selection.set(Some(1));
        selection.prev();
        selection.prev();
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn clamp_after_removal() {
        let mut selection = SelectionState::new();
        selection.set(Some(4));
        selection.clamp(3);
        assert_eq!(selection.get(), Some(2));
        selection.clamp(0);
        assert_eq!(selection.get(), None);
    }
}
