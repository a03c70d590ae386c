//! Marker reconciliation between the filtered landmark list and the map.
//!
//! Each landmark-list change is applied as an explicit diff: markers whose
//! ids left the list are removed, ids that joined it get a new marker, and
//! markers whose landmark data changed are redrawn so their click handler
//! carries the current record. Unchanged markers are not touched.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::events::UiEventSender;
use super::landmark::{Landmark, LandmarkId};
use super::ports::{MapView, Marker, MarkerClick};

/// Ids touched on the map by one reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerDiff {
    /// Markers created, in list order.
    pub added: Vec<LandmarkId>,
    /// Markers removed, in id order.
    pub removed: Vec<LandmarkId>,
    /// Markers redrawn because their landmark changed, in list order.
    pub refreshed: Vec<LandmarkId>,
}

impl MarkerDiff {
    /// Whether the map was left unchanged.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.refreshed.is_empty()
    }
}

/// Tracks which landmark each displayed marker was drawn for.
#[derive(Debug, Default)]
pub struct MarkerReconciler {
    displayed: BTreeMap<LandmarkId, Landmark>,
}

impl MarkerReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids that currently have a marker.
    pub fn displayed(&self) -> impl Iterator<Item = &LandmarkId> {
        self.displayed.keys()
    }

    /// Bring the map's markers in line with `landmarks`.
    ///
    /// New and redrawn markers get a click handler bound to their landmark
    /// that reports selections on `events`.
    pub fn reconcile(
        &mut self,
        view: &dyn MapView,
        landmarks: &[&Landmark],
        events: &UiEventSender,
    ) -> MarkerDiff {
        let wanted: BTreeSet<&LandmarkId> = landmarks.iter().map(|landmark| landmark.id()).collect();

        let removed: Vec<LandmarkId> = self
            .displayed
            .keys()
            .filter(|id| !wanted.contains(id))
            .cloned()
            .collect();
        for id in &removed {
            view.remove_marker(id);
            self.displayed.remove(id);
        }

        let mut added = Vec::new();
        let mut refreshed = Vec::new();
        for landmark in landmarks {
            let id = landmark.id().clone();
            match self.displayed.get(&id) {
                Some(shown) if shown == *landmark => continue,
                Some(_) => {
                    view.remove_marker(&id);
                    refreshed.push(id.clone());
                }
                None => added.push(id.clone()),
            }
            let landmark = (*landmark).clone();
            view.add_marker(Marker {
                on_click: MarkerClick::new(landmark.clone(), events.clone()),
                landmark: landmark.clone(),
            });
            self.displayed.insert(id, landmark);
        }

        debug!(
            added = added.len(),
            removed = removed.len(),
            refreshed = refreshed.len(),
            "reconciled map markers"
        );
        MarkerDiff {
            added,
            removed,
            refreshed,
        }
    }
}
