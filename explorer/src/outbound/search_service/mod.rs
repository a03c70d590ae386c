//! Landmark search service outbound adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `LandmarkSearchService` port.

mod dto;
mod http_service;

pub use http_service::{HttpLandmarkSearchService, HttpSearchServiceBuildError};
