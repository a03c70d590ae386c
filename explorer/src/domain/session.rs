//! Explorer session: one map page's controllers wired to their ports.
//!
//! The session owns the search controller, the selection controller and the
//! marker reconciler behind one mutex. The mutex is never held across an
//! await point, so several searches may be in flight at once; the search
//! controller's token check decides which response lands.
//!
//! Hosts feed [`UiEvent`]s from their event loop:
//!
//! ```rust,ignore
//! while let Some(event) = receiver.recv().await {
//!     session.handle_event(event).await;
//! }
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::category::{CategoryCounts, CategoryFilter};
use super::events::{UiEvent, UiEventSender};
use super::geo::{BoundingBox, Coordinates, RecenterIntent, ZoomPreset};
use super::landmark::{Landmark, LandmarkId};
use super::markers::MarkerReconciler;
use super::ports::{LandmarkSearchService, MapView, SearchServiceError};
use super::search_controller::{
    ControllerState, SearchOutcome, SearchTicket, TextSearchOutcome, ViewportSearchController,
};
use super::selection::SelectionController;

/// Map framing used for the initial view, resets and recentring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapDefaults {
    /// Campus centre used for the initial view and restored by resets.
    pub center: Coordinates,
    /// Zoom level for [`ZoomPreset::Overview`].
    pub overview_zoom: f64,
    /// Zoom level for [`ZoomPreset::Close`].
    pub close_zoom: f64,
}

impl MapDefaults {
    /// Numeric zoom for a preset.
    pub fn zoom_for(&self, preset: ZoomPreset) -> f64 {
        match preset {
            ZoomPreset::Overview => self.overview_zoom,
            ZoomPreset::Close => self.close_zoom,
        }
    }
}

/// Errors surfaced by session operations.
///
/// Search failures are not errors here: they degrade to a notice in
/// [`ControllerState::last_notice`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A direct landmark lookup failed.
    #[error("landmark lookup failed: {0}")]
    Lookup(#[from] SearchServiceError),
}

/// Read model combining search state, filtered view and selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSnapshot {
    /// Search controller state.
    pub search: ControllerState,
    /// Landmarks after local category and text filtering.
    pub filtered: Vec<Landmark>,
    /// Sidebar counts over the unfiltered landmarks.
    pub category_counts: CategoryCounts,
    /// Current campus centre, as last set or reset.
    pub center: Coordinates,
    /// Landmark shown in the detail view.
    pub selected_landmark_id: Option<LandmarkId>,
    /// Whether the detail view is open.
    pub detail_open: bool,
    /// Whether the map is fullscreen.
    pub fullscreen: bool,
}

#[derive(Debug)]
struct SessionState {
    search: ViewportSearchController,
    selection: SelectionController,
    markers: MarkerReconciler,
    center: Coordinates,
    fullscreen: bool,
}

impl SessionState {
    fn new(center: Coordinates) -> Self {
        Self {
            search: ViewportSearchController::new(),
            selection: SelectionController::new(),
            markers: MarkerReconciler::new(),
            center,
            fullscreen: false,
        }
    }

    fn sync_markers(&mut self, map: &dyn MapView, events: &UiEventSender) {
        let filtered = self.search.filtered_landmarks();
        self.markers.reconcile(map, &filtered, events);
    }
}

/// One active map page.
pub struct ExplorerSession {
    service: Arc<dyn LandmarkSearchService>,
    map: Arc<dyn MapView>,
    events: UiEventSender,
    defaults: MapDefaults,
    state: Mutex<SessionState>,
}

impl ExplorerSession {
    /// Create a session. `events` is handed to every marker click handler;
    /// the host reads the other half and calls [`Self::handle_event`].
    pub fn new(
        service: Arc<dyn LandmarkSearchService>,
        map: Arc<dyn MapView>,
        defaults: MapDefaults,
        events: UiEventSender,
    ) -> Self {
        Self {
            service,
            map,
            events,
            defaults,
            state: Mutex::new(SessionState::new(defaults.center)),
        }
    }

    /// Map framing this session was built with.
    pub fn defaults(&self) -> &MapDefaults {
        &self.defaults
    }

    /// Current read model.
    pub fn snapshot(&self) -> ExplorerSnapshot {
        let state = self.lock();
        ExplorerSnapshot {
            search: state.search.state().clone(),
            filtered: state
                .search
                .filtered_landmarks()
                .into_iter()
                .cloned()
                .collect(),
            category_counts: state.search.state().category_counts(),
            center: state.center,
            selected_landmark_id: state.selection.selected_id().cloned(),
            detail_open: state.selection.is_open(),
            fullscreen: state.fullscreen,
        }
    }

    /// Dispatch one UI or map-widget event.
    pub async fn handle_event(&self, event: UiEvent) {
        match event {
            UiEvent::ViewportChanged(bounds) => {
                self.viewport_changed(bounds).await;
            }
            UiEvent::CategoryChanged(filter) => self.category_changed(filter),
            UiEvent::TextSearch(input) => {
                self.text_search(&input).await;
            }
            UiEvent::LandmarkSelected(landmark) => self.select_landmark(landmark),
            UiEvent::DetailsClosed => self.close_details(),
            UiEvent::CenterRequested(landmark) => self.center_requested(&landmark),
            UiEvent::ZoomIn => self.zoom_in(),
            UiEvent::ZoomOut => self.zoom_out(),
            UiEvent::CenterChanged(center) => self.set_center(center),
            UiEvent::ResetView => self.reset_view(),
            UiEvent::ToggleFullscreen => self.toggle_fullscreen(),
        }
    }

    /// Record the viewport and search it.
    pub async fn viewport_changed(&self, bounds: BoundingBox) -> SearchOutcome {
        let ticket = self.lock().search.on_viewport_changed(bounds);
        self.run_search(ticket).await
    }

    /// Change the category filter and redraw markers. No network call.
    pub fn category_changed(&self, filter: CategoryFilter) {
        let mut state = self.lock();
        state.search.on_category_change(filter);
        state.sync_markers(self.map.as_ref(), &self.events);
    }

    /// Handle a search-box submission.
    ///
    /// Returns the search outcome when a search was issued; coordinate input
    /// recentres the map and returns `None`. Markers follow the new query
    /// immediately, whatever the search later returns.
    pub async fn text_search(&self, input: &str) -> Option<SearchOutcome> {
        let outcome = {
            let mut state = self.lock();
            let outcome = state.search.on_text_search(input);
            if !matches!(outcome, TextSearchOutcome::Recenter(_)) {
                state.sync_markers(self.map.as_ref(), &self.events);
            }
            outcome
        };

        match outcome {
            TextSearchOutcome::Recenter(intent) => {
                self.recenter(intent);
                None
            }
            TextSearchOutcome::Search(ticket) => Some(self.run_search(ticket).await),
            TextSearchOutcome::FilterOnly => None,
        }
    }

    /// Open the detail view for `landmark` and recenter on it.
    pub fn select_landmark(&self, landmark: Landmark) {
        debug!(id = %landmark.id(), "landmark selected");
        let intent = self.lock().selection.select(landmark);
        self.recenter(intent);
    }

    /// Close the detail view.
    pub fn close_details(&self) {
        self.lock().selection.close();
    }

    /// "Center on map" from the detail view: recenter, then close.
    pub fn center_requested(&self, landmark: &Landmark) {
        let intent = self.lock().selection.center_requested(landmark);
        self.recenter(intent);
    }

    /// Look a landmark up by id and select it.
    pub async fn open_landmark_by_id(&self, id: &LandmarkId) -> Result<(), SessionError> {
        match self.service.get_by_id(id).await {
            Ok(landmark) => {
                self.select_landmark(landmark);
                Ok(())
            }
            Err(error) => {
                warn!(%id, %error, "landmark lookup failed");
                Err(error.into())
            }
        }
    }

    pub fn zoom_in(&self) {
        self.map.zoom_by(1);
    }

    pub fn zoom_out(&self) {
        self.map.zoom_by(-1);
    }

    /// Move the campus centre and show it at overview zoom.
    pub fn set_center(&self, center: Coordinates) {
        debug!(%center, "campus centre changed");
        self.lock().center = center;
        self.recenter(RecenterIntent::overview(center));
    }

    /// Restore the default campus centre at overview zoom. Hosts also call
    /// this once on mount.
    pub fn reset_view(&self) {
        self.set_center(self.defaults.center);
    }

    pub fn toggle_fullscreen(&self) {
        let enabled = {
            let mut state = self.lock();
            state.fullscreen = !state.fullscreen;
            state.fullscreen
        };
        self.map.set_fullscreen(enabled);
    }

    async fn run_search(&self, ticket: SearchTicket) -> SearchOutcome {
        let SearchTicket { token, params } = ticket;
        let result = self.service.search(&params).await;
        if let Err(error) = &result {
            warn!(%token, %error, "landmark search failed");
        }

        let mut state = self.lock();
        let outcome = state.search.apply_search_result(token, result);
        if outcome.changed_landmarks() {
            state.sync_markers(self.map.as_ref(), &self.events);
        }
        outcome
    }

    fn recenter(&self, intent: RecenterIntent) {
        self.map
            .set_view(intent.center, self.defaults.zoom_for(intent.zoom));
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
