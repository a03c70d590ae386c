//! DTOs for decoding landmark search responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! [`Landmark`]s in one pass.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{Category, Coordinates, Landmark, LandmarkDraft};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LandmarkDto {
    pub(super) id: String,
    pub(super) name: String,
    pub(super) category: Category,
    pub(super) coordinates: CoordinatesDto,
    #[serde(default)]
    pub(super) description: String,
    #[serde(default)]
    pub(super) short_description: String,
    pub(super) wikipedia_url: Option<String>,
    #[serde(default)]
    pub(super) images: Vec<String>,
    pub(super) established: Option<EstablishedDto>,
    #[serde(rename = "type")]
    pub(super) kind: Option<String>,
    pub(super) distance_km: Option<f64>,
    #[serde(default)]
    pub(super) additional_info: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CoordinatesDto {
    pub(super) lat: f64,
    pub(super) lng: f64,
}

/// The service sends founding years either as text or as a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum EstablishedDto {
    Text(String),
    Number(serde_json::Number),
}

impl From<EstablishedDto> for String {
    fn from(value: EstablishedDto) -> Self {
        match value {
            EstablishedDto::Text(text) => text,
            EstablishedDto::Number(number) => number.to_string(),
        }
    }
}

impl LandmarkDto {
    pub(super) fn into_domain(self) -> Result<Landmark, String> {
        let coordinates = Coordinates::new(self.coordinates.lat, self.coordinates.lng)
            .map_err(|err| format!("landmark {}: {err}", self.id))?;

        Landmark::new(LandmarkDraft {
            id: self.id,
            name: self.name,
            category: self.category,
            coordinates,
            description: self.description,
            short_description: self.short_description,
            wikipedia_url: self.wikipedia_url,
            images: self.images,
            established: self.established.map(String::from),
            kind: self.kind,
            distance_km: self.distance_km,
            additional_info: self.additional_info,
        })
        .map_err(|err| err.to_string())
    }
}

pub(super) fn into_domain_landmarks(dtos: Vec<LandmarkDto>) -> Result<Vec<Landmark>, String> {
    dtos.into_iter().map(LandmarkDto::into_domain).collect()
}
