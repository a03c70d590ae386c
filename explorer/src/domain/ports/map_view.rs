//! Driven port for the map widget.
//!
//! The widget is an external collaborator; this port is the whole surface the
//! domain needs from it. Marker click handlers are bound when the marker is
//! created and carry the landmark they belong to, so the widget never has to
//! look a landmark up by id.

use crate::domain::{Coordinates, Landmark, LandmarkId, UiEvent, UiEventSender};

/// Click handler bound to one marker at creation time.
#[derive(Debug, Clone)]
pub struct MarkerClick {
    landmark: Landmark,
    events: UiEventSender,
}

impl MarkerClick {
    pub(crate) fn new(landmark: Landmark, events: UiEventSender) -> Self {
        Self { landmark, events }
    }

    /// Deliver a selection event for the bound landmark.
    ///
    /// Returns `false` when the session has already been torn down.
    pub fn fire(&self) -> bool {
        self.events
            .send(UiEvent::LandmarkSelected(self.landmark.clone()))
            .is_ok()
    }
}

/// Marker to draw for one landmark.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Landmark the marker represents.
    pub landmark: Landmark,
    /// Handler to invoke when the marker is clicked.
    pub on_click: MarkerClick,
}

/// Port for driving the map widget.
#[cfg_attr(test, mockall::automock)]
pub trait MapView: Send + Sync {
    /// Draw a marker.
    fn add_marker(&self, marker: Marker);

    /// Remove the marker for `id`, if present.
    fn remove_marker(&self, id: &LandmarkId);

    /// Move the map to `center` at the given numeric zoom.
    fn set_view(&self, center: Coordinates, zoom: f64);

    /// Change zoom by `delta` steps around the current centre.
    fn zoom_by(&self, delta: i8);

    /// Enter or leave fullscreen.
    fn set_fullscreen(&self, enabled: bool);
}
