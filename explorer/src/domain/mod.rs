//! Domain primitives, controllers and ports.
//!
//! Purpose: keep the reactive core of the explorer free of transport and
//! rendering concerns. The controllers are synchronous state machines; the
//! session wires them to the [`ports`] and is the only async code here.
//!
//! Public surface:
//! - Geo primitives: `Coordinates`, `BoundingBox`, `RecenterIntent`.
//! - Landmark model: `Landmark`, `LandmarkId`, `Category`, `SearchParams`.
//! - Controllers: `ViewportSearchController`, `SelectionController`.
//! - Orchestration: `ExplorerSession`, `MarkerReconciler`, `UiEvent`.

pub mod ports;

mod category;
mod events;
mod geo;
mod landmark;
mod markers;
mod query;
mod search_controller;
mod selection;
mod session;

pub use self::category::{Category, CategoryCounts, CategoryFilter, ParseCategoryError};
pub use self::events::{UiEvent, UiEventReceiver, UiEventSender, ui_event_channel};
pub use self::geo::{BoundingBox, Coordinates, GeoValidationError, RecenterIntent, ZoomPreset};
pub use self::landmark::{
    Landmark, LandmarkDraft, LandmarkId, LandmarkValidationError, SearchParams,
};
pub use self::markers::{MarkerDiff, MarkerReconciler};
pub use self::query::ParsedQuery;
pub use self::search_controller::{
    ControllerState, SearchNotice, SearchOutcome, SearchTicket, SearchToken, TextSearchOutcome,
    ViewportSearchController,
};
pub use self::selection::{SelectionController, SelectionState};
pub use self::session::{ExplorerSession, ExplorerSnapshot, MapDefaults, SessionError};
