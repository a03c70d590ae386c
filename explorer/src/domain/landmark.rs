//! Landmark records and search parameters.
//!
//! Landmarks are immutable once received from the search service; identity is
//! the opaque [`LandmarkId`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryFilter};
use super::geo::{BoundingBox, Coordinates};

/// Validation errors raised while constructing landmarks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LandmarkValidationError {
    /// The identifier was empty or whitespace.
    #[error("landmark id must not be empty")]
    EmptyId,
    /// The display name was empty or whitespace.
    #[error("landmark {id} must have a name")]
    EmptyName {
        /// Identifier of the offending record.
        id: String,
    },
}

/// Opaque, stable landmark identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LandmarkId(String);

impl LandmarkId {
    /// Validate and construct an identifier. Surrounding whitespace is kept
    /// because the identifier is opaque; only blank input is rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, LandmarkValidationError> {
        let raw = id.into();
        if raw.trim().is_empty() {
            return Err(LandmarkValidationError::EmptyId);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for LandmarkId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for LandmarkId {
    type Error = LandmarkValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LandmarkId> for String {
    fn from(value: LandmarkId) -> Self {
        value.0
    }
}

/// Input payload for [`Landmark::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkDraft {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub coordinates: Coordinates,
    pub description: String,
    pub short_description: String,
    pub wikipedia_url: Option<String>,
    pub images: Vec<String>,
    pub established: Option<String>,
    pub kind: Option<String>,
    pub distance_km: Option<f64>,
    pub additional_info: BTreeMap<String, String>,
}

/// Point of interest returned by the search service.
///
/// Serialises with the same camelCase field names the service uses so hosts
/// can hand it straight to presentation code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    id: LandmarkId,
    name: String,
    category: Category,
    coordinates: Coordinates,
    description: String,
    short_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    wikipedia_url: Option<String>,
    images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    established: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
    additional_info: BTreeMap<String, String>,
}

impl Landmark {
    /// Validate and construct a landmark.
    pub fn new(draft: LandmarkDraft) -> Result<Self, LandmarkValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &LandmarkId {
        &self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn short_description(&self) -> &str {
        self.short_description.as_str()
    }
    /// Link to the landmark's encyclopaedia article, when the service has one.
    pub fn wikipedia_url(&self) -> Option<&str> {
        self.wikipedia_url.as_deref()
    }
    pub fn images(&self) -> &[String] {
        &self.images
    }
    pub fn established(&self) -> Option<&str> {
        self.established.as_deref()
    }
    /// Free-form landmark type such as "Library" or "Temple".
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }
    pub fn additional_info(&self) -> &BTreeMap<String, String> {
        &self.additional_info
    }

    /// Case-insensitive match of an already lower-cased needle against the
    /// name or description.
    pub(crate) fn mentions(&self, needle_lowercase: &str) -> bool {
        self.name.to_lowercase().contains(needle_lowercase)
            || self.description.to_lowercase().contains(needle_lowercase)
    }
}

impl TryFrom<LandmarkDraft> for Landmark {
    type Error = LandmarkValidationError;

    fn try_from(draft: LandmarkDraft) -> Result<Self, Self::Error> {
        let id = LandmarkId::new(draft.id)?;
        if draft.name.trim().is_empty() {
            return Err(LandmarkValidationError::EmptyName {
                id: id.as_str().to_owned(),
            });
        }

        Ok(Self {
            id,
            name: draft.name,
            category: draft.category,
            coordinates: draft.coordinates,
            description: draft.description,
            short_description: draft.short_description,
            wikipedia_url: draft.wikipedia_url,
            images: draft.images,
            established: draft.established,
            kind: draft.kind,
            distance_km: draft.distance_km,
            additional_info: draft.additional_info,
        })
    }
}

/// Parameters that fully determine one search request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchParams {
    /// Visible map region.
    pub bounds: BoundingBox,
    /// Category sent to the service; the controller always sends `all`.
    pub category: CategoryFilter,
    /// Free-text query, omitted when blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl SearchParams {
    /// Build parameters, normalising a blank query to `None`.
    pub fn new(bounds: BoundingBox, category: CategoryFilter, query: &str) -> Self {
        let trimmed = query.trim();
        Self {
            bounds,
            category,
            query: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn draft() -> LandmarkDraft {
        LandmarkDraft {
            id: "central-library".to_owned(),
            name: "Central Library".to_owned(),
            category: Category::Educational,
            coordinates: Coordinates::new(22.72, 75.87).expect("valid coordinates"),
            description: "Four floors of reading rooms.".to_owned(),
            short_description: "Main library".to_owned(),
            wikipedia_url: Some("https://en.wikipedia.org/wiki/Central_Library".to_owned()),
            images: vec!["https://img.example/library.jpg".to_owned()],
            established: Some("1964".to_owned()),
            kind: Some("Library".to_owned()),
            distance_km: None,
            additional_info: BTreeMap::from([("hours".to_owned(), "8-22".to_owned())]),
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_ids_are_rejected(#[case] id: &str) {
        let mut input = draft();
        input.id = id.to_owned();
        assert_eq!(Landmark::new(input), Err(LandmarkValidationError::EmptyId));
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut input = draft();
        input.name = " ".to_owned();
        let error = Landmark::new(input).expect_err("name required");
        assert!(matches!(error, LandmarkValidationError::EmptyName { .. }));
    }

    #[test]
    fn serialises_with_service_field_names() {
        let landmark = Landmark::new(draft()).expect("valid landmark");
        let value = serde_json::to_value(&landmark).expect("serialise");
        assert_eq!(value["shortDescription"], json!("Main library"));
        assert_eq!(value["type"], json!("Library"));
        assert_eq!(value["additionalInfo"]["hours"], json!("8-22"));
        assert_eq!(
            value["wikipediaUrl"],
            json!("https://en.wikipedia.org/wiki/Central_Library")
        );
        assert!(value.get("distanceKm").is_none());
    }

    #[test]
    fn mentions_is_case_insensitive_over_name_and_description() {
        let landmark = Landmark::new(draft()).expect("valid landmark");
        assert!(landmark.mentions("central"));
        assert!(landmark.mentions("reading"));
        assert!(!landmark.mentions("temple"));
    }

    #[test]
    fn search_params_omit_blank_query() {
        let bounds = BoundingBox::new(1.0, 0.0, 1.0, 0.0).expect("valid bounds");
        let params = SearchParams::new(bounds, CategoryFilter::All, "  ");
        let value = serde_json::to_value(&params).expect("serialise");
        assert_eq!(
            value,
            json!({
                "bounds": { "north": 1.0, "south": 0.0, "east": 1.0, "west": 0.0 },
                "category": "all"
            })
        );
    }

    #[test]
    fn search_params_trim_query() {
        let bounds = BoundingBox::new(1.0, 0.0, 1.0, 0.0).expect("valid bounds");
        let params = SearchParams::new(bounds, CategoryFilter::All, " library ");
        assert_eq!(params.query.as_deref(), Some("library"));
    }
}
