//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod landmark_search;
mod map_view;

#[cfg(test)]
pub use landmark_search::MockLandmarkSearchService;
pub use landmark_search::{
    FixtureLandmarkSearchService, LandmarkSearchService, SearchServiceError,
};
#[cfg(test)]
pub use map_view::MockMapView;
pub use map_view::{MapView, Marker, MarkerClick};
