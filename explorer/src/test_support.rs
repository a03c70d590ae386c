//! Test utilities for the explorer crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled only for tests or with the `test-support` feature.

use std::collections::BTreeMap;

use crate::domain::{BoundingBox, Category, Coordinates, Landmark, LandmarkDraft};

/// Campus-sized bounds around the fixture landmarks.
pub fn bounds() -> BoundingBox {
    match BoundingBox::new(22.73, 22.70, 75.90, 75.85) {
        Ok(value) => value,
        Err(err) => panic!("fixture bounds must be valid: {err}"),
    }
}

/// Alternative bounds used to tell two searches apart.
pub fn other_bounds() -> BoundingBox {
    match BoundingBox::new(22.80, 22.75, 75.95, 75.90) {
        Ok(value) => value,
        Err(err) => panic!("fixture bounds must be valid: {err}"),
    }
}

/// Build a landmark with a generated description mentioning its name.
pub fn landmark(id: &str, name: &str, category: Category, lat: f64, lng: f64) -> Landmark {
    landmark_with_description(id, name, category, lat, lng, &format!("About {name}."))
}

/// Build a landmark with an explicit description.
pub fn landmark_with_description(
    id: &str,
    name: &str,
    category: Category,
    lat: f64,
    lng: f64,
    description: &str,
) -> Landmark {
    let coordinates = match Coordinates::new(lat, lng) {
        Ok(value) => value,
        Err(err) => panic!("fixture coordinates must be valid: {err}"),
    };
    let draft = LandmarkDraft {
        id: id.to_owned(),
        name: name.to_owned(),
        category,
        coordinates,
        description: description.to_owned(),
        short_description: name.to_owned(),
        wikipedia_url: None,
        images: Vec::new(),
        established: None,
        kind: None,
        distance_km: None,
        additional_info: BTreeMap::new(),
    };
    match Landmark::new(draft) {
        Ok(value) => value,
        Err(err) => panic!("fixture landmark must be valid: {err}"),
    }
}

/// A small mixed-category campus.
pub fn campus() -> Vec<Landmark> {
    vec![
        landmark_with_description(
            "library",
            "Central Library",
            Category::Educational,
            22.720,
            75.870,
            "Reading rooms and the rare manuscripts archive.",
        ),
        landmark_with_description(
            "clock-tower",
            "Clock Tower",
            Category::Historical,
            22.715,
            75.865,
            "Built in 1921; houses a small library of city records.",
        ),
        landmark_with_description(
            "temple",
            "Lakeside Temple",
            Category::Religious,
            22.710,
            75.860,
            "Evening prayers overlook the lake.",
        ),
        landmark_with_description(
            "botanical-garden",
            "Botanical Garden",
            Category::Natural,
            22.725,
            75.880,
            "Native trees and a butterfly house.",
        ),
        landmark_with_description(
            "auditorium",
            "Main Auditorium",
            Category::Entertainment,
            22.705,
            75.855,
            "Concerts and convocation.",
        ),
    ]
}
