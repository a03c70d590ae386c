//! Viewport/search controller.
//!
//! Turns viewport changes and filter intents into search tickets, applies
//! search results under a last-request-wins discipline, and derives the
//! locally filtered landmark view. The controller performs no I/O: callers
//! execute each [`SearchTicket`] against a
//! [`LandmarkSearchService`](crate::domain::ports::LandmarkSearchService) and
//! hand the result back through
//! [`ViewportSearchController::apply_search_result`].

use std::fmt;

use tracing::debug;

use super::category::{CategoryCounts, CategoryFilter};
use super::geo::{BoundingBox, RecenterIntent};
use super::landmark::{Landmark, SearchParams};
use super::ports::SearchServiceError;
use super::query::ParsedQuery;

/// Identity of one issued search. Tokens increase monotonically per
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchToken(u64);

impl fmt::Display for SearchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A search the caller must execute.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    /// Token to return alongside the result.
    pub token: SearchToken,
    /// Request parameters.
    pub params: SearchParams,
}

/// Informational state the UI shows as a non-blocking notification.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchNotice {
    /// The latest search succeeded with zero landmarks. Not an error.
    EmptyResult,
    /// The latest search failed; landmarks were left unchanged.
    SearchFailed(SearchServiceError),
}

/// Result of handing a search response back to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Landmarks replaced with a non-empty result.
    Applied {
        /// Number of landmarks now held.
        count: usize,
    },
    /// Landmarks replaced with an empty result.
    Empty,
    /// The search failed; landmarks unchanged.
    Failed(SearchServiceError),
    /// A newer search was issued; the response was discarded.
    Stale,
}

impl SearchOutcome {
    /// Whether the landmark list changed.
    pub fn changed_landmarks(&self) -> bool {
        matches!(self, Self::Applied { .. } | Self::Empty)
    }
}

/// What submitting the search box produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TextSearchOutcome {
    /// Input was a coordinate pair; move the map, no search issued.
    Recenter(RecenterIntent),
    /// Query updated and a search issued against the last known bounds.
    Search(SearchTicket),
    /// Query updated; no bounds known yet so no search was issued.
    FilterOnly,
}

/// Mutable controller state. Only [`ViewportSearchController`] mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    last_bounds: Option<BoundingBox>,
    category: CategoryFilter,
    query: String,
    landmarks: Vec<Landmark>,
    is_loading: bool,
    last_notice: Option<SearchNotice>,
}

impl ControllerState {
    /// Most recent viewport, if any was reported.
    pub fn last_bounds(&self) -> Option<BoundingBox> {
        self.last_bounds
    }

    /// Active category filter.
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Active text query; empty when none.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Landmarks from the last applied search, unfiltered.
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Per-filter landmark counts over the unfiltered result set.
    pub fn category_counts(&self) -> CategoryCounts {
        CategoryCounts::tally(self.landmarks.iter().map(Landmark::category))
    }

    /// Whether the latest issued search is still in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Notification produced by the latest completed search.
    pub fn last_notice(&self) -> Option<&SearchNotice> {
        self.last_notice.as_ref()
    }
}

/// Owns [`ControllerState`] for one map page.
///
/// # Examples
///
/// ```
/// use explorer::domain::{BoundingBox, SearchOutcome, ViewportSearchController};
///
/// let mut controller = ViewportSearchController::new();
/// let bounds = BoundingBox::new(22.73, 22.70, 75.90, 75.85)?;
/// let first = controller.on_viewport_changed(bounds);
/// let second = controller.on_viewport_changed(bounds);
///
/// assert_eq!(controller.apply_search_result(second.token, Ok(Vec::new())), SearchOutcome::Empty);
/// assert_eq!(controller.apply_search_result(first.token, Ok(Vec::new())), SearchOutcome::Stale);
/// # Ok::<(), explorer::domain::GeoValidationError>(())
/// ```
#[derive(Debug, Default)]
pub struct ViewportSearchController {
    state: ControllerState,
    issued: u64,
    latest: Option<SearchToken>,
}

impl ViewportSearchController {
    /// Create a controller with empty state and the `all` filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the state.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Record the new viewport and issue a search for it.
    ///
    /// Category is always sent as `all`; category filtering happens locally.
    pub fn on_viewport_changed(&mut self, bounds: BoundingBox) -> SearchTicket {
        self.state.last_bounds = Some(bounds);
        self.issue(bounds)
    }

    /// Change the category filter. Never issues a search.
    pub fn on_category_change(&mut self, category: CategoryFilter) {
        debug!(%category, "category filter changed");
        self.state.category = category;
    }

    /// Handle a search-box submission.
    pub fn on_text_search(&mut self, input: &str) -> TextSearchOutcome {
        match ParsedQuery::parse(input) {
            ParsedQuery::Coordinates(center) => {
                debug!(%center, "search input is a coordinate pair");
                TextSearchOutcome::Recenter(RecenterIntent::overview(center))
            }
            ParsedQuery::Text(query) => {
                self.state.query = query;
                match self.state.last_bounds {
                    Some(bounds) => TextSearchOutcome::Search(self.issue(bounds)),
                    None => TextSearchOutcome::FilterOnly,
                }
            }
        }
    }

    /// Landmarks passing the category filter and the text query.
    pub fn filtered_landmarks(&self) -> Vec<&Landmark> {
        let needle = self.state.query.to_lowercase();
        self.state
            .landmarks
            .iter()
            .filter(|landmark| self.state.category.matches(landmark.category()))
            .filter(|landmark| needle.is_empty() || landmark.mentions(&needle))
            .collect()
    }

    /// Whether `token` identifies the most recently issued search.
    pub fn is_latest(&self, token: SearchToken) -> bool {
        self.latest == Some(token)
    }

    /// Apply a search response if `token` is still the latest issued.
    pub fn apply_search_result(
        &mut self,
        token: SearchToken,
        result: Result<Vec<Landmark>, SearchServiceError>,
    ) -> SearchOutcome {
        if !self.is_latest(token) {
            debug!(%token, latest = ?self.latest, "discarding stale search response");
            return SearchOutcome::Stale;
        }

        self.state.is_loading = false;
        match result {
            Ok(landmarks) if landmarks.is_empty() => {
                debug!(%token, "search returned no landmarks");
                self.state.landmarks = landmarks;
                self.state.last_notice = Some(SearchNotice::EmptyResult);
                SearchOutcome::Empty
            }
            Ok(landmarks) => {
                let count = landmarks.len();
                debug!(%token, count, "applying search response");
                self.state.landmarks = landmarks;
                self.state.last_notice = None;
                SearchOutcome::Applied { count }
            }
            Err(error) => {
                self.state.last_notice = Some(SearchNotice::SearchFailed(error.clone()));
                SearchOutcome::Failed(error)
            }
        }
    }

    fn issue(&mut self, bounds: BoundingBox) -> SearchTicket {
        self.issued += 1;
        let token = SearchToken(self.issued);
        self.latest = Some(token);
        self.state.is_loading = true;
        self.state.last_notice = None;

        let params = SearchParams::new(bounds, CategoryFilter::All, &self.state.query);
        debug!(%token, query = ?params.query, "issuing search");
        SearchTicket { token, params }
    }
}

#[cfg(test)]
#[path = "search_controller_tests.rs"]
mod tests;
