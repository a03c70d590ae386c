//! Campus landmark explorer core.
//!
//! A map page searches landmarks inside the visible viewport, filters them by
//! category and free text, keeps map markers in step with the filtered list,
//! and opens a detail view for the selected landmark. Rendering lives with
//! the host: it implements [`domain::ports::MapView`] and feeds
//! [`domain::UiEvent`]s into an [`domain::ExplorerSession`].

pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{ConfigError, ExplorerSettings};
