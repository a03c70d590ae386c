//! Selection controller: which landmark, if any, the detail view shows.

use super::geo::RecenterIntent;
use super::landmark::{Landmark, LandmarkId};

/// Detail-view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    /// Nothing selected; detail view hidden.
    #[default]
    Closed,
    /// Detail view open for the held landmark.
    Open(Landmark),
}

/// Owns at most one selected landmark.
///
/// Re-selecting while open replaces the target directly; the `Closed` state
/// is never passed through.
///
/// # Examples
///
/// ```
/// use explorer::domain::SelectionController;
///
/// let mut selection = SelectionController::new();
/// assert!(!selection.is_open());
/// selection.close();
/// assert!(selection.selected().is_none());
/// ```
#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    /// Start in the `Closed` state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The selected landmark, if the detail view is open.
    pub fn selected(&self) -> Option<&Landmark> {
        match &self.state {
            SelectionState::Open(landmark) => Some(landmark),
            SelectionState::Closed => None,
        }
    }

    pub fn selected_id(&self) -> Option<&LandmarkId> {
        self.selected().map(Landmark::id)
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SelectionState::Open(_))
    }

    /// Open the detail view for `landmark` and request a close-zoom recenter
    /// on it.
    pub fn select(&mut self, landmark: Landmark) -> RecenterIntent {
        let intent = RecenterIntent::close(landmark.coordinates());
        self.state = SelectionState::Open(landmark);
        intent
    }

    /// Close the detail view. The map centre is left alone.
    pub fn close(&mut self) {
        self.state = SelectionState::Closed;
    }

    /// Recenter on `landmark` from the open detail view, then close it.
    pub fn center_requested(&mut self, landmark: &Landmark) -> RecenterIntent {
        let intent = RecenterIntent::close(landmark.coordinates());
        self.close();
        intent
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the selection state machine.
    use super::*;
    use crate::domain::{Category, ZoomPreset};
    use crate::test_support::landmark;

    fn library() -> Landmark {
        landmark("library", "Central Library", Category::Educational, 22.72, 75.87)
    }

    fn temple() -> Landmark {
        landmark("temple", "Lakeside Temple", Category::Religious, 22.71, 75.86)
    }

    #[test]
    fn starts_closed() {
        let selection = SelectionController::new();
        assert_eq!(selection.state(), &SelectionState::Closed);
        assert!(selection.selected_id().is_none());
    }

    #[test]
    fn select_opens_and_recenters_close() {
        let mut selection = SelectionController::new();

        let intent = selection.select(library());

        assert_eq!(selection.state(), &SelectionState::Open(library()));
        assert_eq!(intent.center, library().coordinates());
        assert_eq!(intent.zoom, ZoomPreset::Close);
    }

    #[test]
    fn reselect_moves_directly_between_open_states() {
        let mut selection = SelectionController::new();
        selection.select(temple());

        let intent = selection.select(library());

        assert_eq!(selection.state(), &SelectionState::Open(library()));
        assert_eq!(intent.center, library().coordinates());
    }

    #[test]
    fn close_clears_selection() {
        let mut selection = SelectionController::new();
        selection.select(library());

        selection.close();

        assert!(!selection.is_open());
        assert!(selection.selected().is_none());
    }

    #[test]
    fn center_requested_recenters_then_closes() {
        let mut selection = SelectionController::new();
        selection.select(library());

        let intent = selection.center_requested(&library());

        assert_eq!(intent, RecenterIntent::close(library().coordinates()));
        assert_eq!(selection.state(), &SelectionState::Closed);
    }
}
