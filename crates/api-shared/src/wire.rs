//! JSON shapes exposed by the API.
//!
//! These mirror the core catalog types but stay plain (strings and numbers) so the OpenAPI
//! schema is self-contained.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vet_core::{Catalog, DoctorRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClinicSummary {
    pub id: String,
    pub label: String,
    pub doctor_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListClinicsRes {
    pub clinics: Vec<ClinicSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Doctor {
    /// Position in the clinic's list; used by details triggers
    pub index: usize,
    pub full_name: String,
    pub surname: String,
    pub given_name: String,
    pub patronymic: String,
    pub specialization: String,
    pub experience: u32,
    /// Experience with the agreed noun, e.g. "12 лет"
    pub experience_text: String,
    pub photo_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListDoctorsRes {
    pub clinic_id: String,
    pub label: String,
    pub doctors: Vec<Doctor>,
}

impl Doctor {
    pub fn from_record(index: usize, record: &DoctorRecord) -> Self {
        Self {
            index,
            full_name: record.full_name(),
            surname: record.surname.to_string(),
            given_name: record.given_name.to_string(),
            patronymic: record.patronymic.clone(),
            specialization: record.specialization.to_string(),
            experience: record.experience,
            experience_text: vet_core::experience_phrase(record.experience),
            photo_url: record.photo_url.clone(),
            description: record.description.clone(),
        }
    }
}

impl ListClinicsRes {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let clinics = catalog
            .clinic_ids()
            .iter()
            .map(|id| ClinicSummary {
                id: id.to_string(),
                label: catalog.label(id.as_str()).unwrap_or_default().to_owned(),
                doctor_count: catalog.lookup(id.as_str()).len(),
            })
            .collect();
        Self { clinics }
    }
}

impl ListDoctorsRes {
    /// `None` when the catalog has no such clinic.
    pub fn from_catalog(catalog: &Catalog, clinic_id: &str) -> Option<Self> {
        let label = catalog.label(clinic_id)?;
        let doctors = catalog
            .lookup(clinic_id)
            .iter()
            .enumerate()
            .map(|(index, record)| Doctor::from_record(index, record))
            .collect();
        Some(Self {
            clinic_id: clinic_id.to_owned(),
            label: label.to_owned(),
            doctors,
        })
    }
}
