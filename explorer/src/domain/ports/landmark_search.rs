//! Driven port for the remote landmark search capability.
//!
//! The domain owns the request shape and the error taxonomy so the
//! controllers stay transport-agnostic. Adapters perform exactly one call per
//! request; there is no retry, caching or pagination at this boundary.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Landmark, LandmarkId, SearchParams};

define_port_error! {
    /// Errors surfaced while calling the landmark search service.
    pub enum SearchServiceError {
        /// Network transport failed before a response was received.
        Network { message: String } =>
            "search service unreachable: {message}",
        /// The service answered with a non-success status.
        Service { status: u16, message: String } =>
            "search service returned status {status}: {message}",
        /// The response body did not match the landmark schema.
        Decode { message: String } =>
            "search response decode failed: {message}",
    }
}

impl SearchServiceError {
    /// HTTP status used by the service for unknown landmark ids.
    pub const NOT_FOUND_STATUS: u16 = 404;

    /// Return whether this is the lookup not-found failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Service { status, .. } if *status == Self::NOT_FOUND_STATUS
        )
    }
}

/// Port for querying landmarks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LandmarkSearchService: Send + Sync {
    /// Fetch every landmark matching `params`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explorer::domain::ports::{FixtureLandmarkSearchService, LandmarkSearchService};
    /// use explorer::domain::{BoundingBox, CategoryFilter, SearchParams};
    ///
    /// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
    /// let service = FixtureLandmarkSearchService::default();
    /// let bounds = BoundingBox::new(22.73, 22.70, 75.90, 75.85)?;
    /// let found = service
    ///     .search(&SearchParams::new(bounds, CategoryFilter::All, ""))
    ///     .await?;
    /// assert!(found.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    async fn search(&self, params: &SearchParams) -> Result<Vec<Landmark>, SearchServiceError>;

    /// Fetch one landmark by identifier, outside the bounds-driven flow.
    async fn get_by_id(&self, id: &LandmarkId) -> Result<Landmark, SearchServiceError>;
}

/// In-memory implementation backed by a fixed landmark list.
///
/// Applies the same bounds, category and text rules the remote service is
/// expected to apply, which makes it suitable for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureLandmarkSearchService {
    landmarks: Vec<Landmark>,
}

impl FixtureLandmarkSearchService {
    /// Serve the given landmarks.
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }
}

#[async_trait]
impl LandmarkSearchService for FixtureLandmarkSearchService {
    async fn search(&self, params: &SearchParams) -> Result<Vec<Landmark>, SearchServiceError> {
        let needle = params.query.as_deref().map(str::to_lowercase);
        Ok(self
            .landmarks
            .iter()
            .filter(|landmark| {
                let point = landmark.coordinates();
                params.bounds.contains_lat_lng(point.lat(), point.lng())
            })
            .filter(|landmark| params.category.matches(landmark.category()))
            .filter(|landmark| needle.as_deref().is_none_or(|n| landmark.mentions(n)))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &LandmarkId) -> Result<Landmark, SearchServiceError> {
        self.landmarks
            .iter()
            .find(|landmark| landmark.id() == id)
            .cloned()
            .ok_or_else(|| {
                SearchServiceError::service(
                    SearchServiceError::NOT_FOUND_STATUS,
                    format!("landmark {id} not found"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the fixture search service.
    use super::*;
    use crate::test_support::{bounds, landmark};
    use crate::domain::{Category, CategoryFilter};

    fn service() -> FixtureLandmarkSearchService {
        FixtureLandmarkSearchService::new(vec![
            landmark("library", "Central Library", Category::Educational, 22.72, 75.87),
            landmark("temple", "Lakeside Temple", Category::Religious, 22.71, 75.86),
            landmark("far", "Distant Fort", Category::Historical, 23.50, 76.50),
        ])
    }

    #[tokio::test]
    async fn search_applies_bounds_and_query() {
        let params = SearchParams::new(bounds(), CategoryFilter::All, "LIBRARY");
        let found = service().search(&params).await.expect("search succeeds");
        let ids: Vec<_> = found.iter().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, ["library"]);
    }

    #[tokio::test]
    async fn search_excludes_landmarks_outside_bounds() {
        let params = SearchParams::new(bounds(), CategoryFilter::All, "");
        let found = service().search(&params).await.expect("search succeeds");
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn get_by_id_reports_not_found() {
        let id = LandmarkId::new("missing").expect("valid id");
        let error = service().get_by_id(&id).await.expect_err("unknown id");
        assert!(error.is_not_found());
    }

    #[test]
    fn only_404_service_errors_are_not_found() {
        assert!(!SearchServiceError::service(500_u16, "boom").is_not_found());
        assert!(!SearchServiceError::network("reset").is_not_found());
    }
}
