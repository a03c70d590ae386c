//! User intents flowing from presentation and the map widget into the
//! session.

use tokio::sync::mpsc;

use super::category::CategoryFilter;
use super::geo::{BoundingBox, Coordinates};
use super::landmark::Landmark;

/// One user or map-widget event.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The visible map region changed.
    ViewportChanged(BoundingBox),
    /// The sidebar category filter changed.
    CategoryChanged(CategoryFilter),
    /// The search box was submitted.
    TextSearch(String),
    /// A marker or list card was activated.
    LandmarkSelected(Landmark),
    /// The detail view was dismissed.
    DetailsClosed,
    /// "Center on map" was used from the open detail view.
    CenterRequested(Landmark),
    /// Zoom-in control.
    ZoomIn,
    /// Zoom-out control.
    ZoomOut,
    /// The sidebar's map-centre coordinates were submitted.
    CenterChanged(Coordinates),
    /// Reset-view control.
    ResetView,
    /// Fullscreen control.
    ToggleFullscreen,
}

/// Sending half of the session event channel.
pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;

/// Receiving half of the session event channel.
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Create the channel that carries [`UiEvent`]s into a session.
pub fn ui_event_channel() -> (UiEventSender, UiEventReceiver) {
    mpsc::unbounded_channel()
}
