//! Catalog store: clinics, their doctors, and the single-clinic page sections.
//!
//! The catalog is loaded once at startup (from the YAML compiled into the crate, or from an
//! override file) and is read-only afterwards. Lookups for unknown clinics return empty
//! results rather than errors; the renderers turn those into placeholders.

use crate::rating::Rating;
use crate::{VetError, VetResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use vet_types::{ClinicId, NonEmptyText};

/// Catalog YAML compiled into the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.yaml");

/// One doctor as shown on a clinic card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub surname: NonEmptyText,
    pub given_name: NonEmptyText,
    #[serde(default)]
    pub patronymic: String,
    pub specialization: NonEmptyText,
    /// Years of practice
    pub experience: u32,
    pub photo_url: String,
    #[serde(default)]
    pub description: String,
}

impl DoctorRecord {
    /// Surname, given name and patronymic separated by spaces.
    pub fn full_name(&self) -> String {
        let mut name = format!("{} {}", self.surname, self.given_name);
        let patronymic = self.patronymic.trim();
        if !patronymic.is_empty() {
            name.push(' ');
            name.push_str(patronymic);
        }
        name
    }
}

/// A service card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    /// Bootstrap icon class, e.g. `bi-heart-pulse`
    pub icon: String,
    pub title: NonEmptyText,
    pub description: String,
    pub price: String,
}

/// A client review on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub initials: String,
    pub name: NonEmptyText,
    pub role: String,
    pub text: String,
    pub rating: Rating,
}

#[derive(Debug, Deserialize)]
struct ClinicEntry {
    id: ClinicId,
    label: NonEmptyText,
    #[serde(default)]
    doctors: Vec<DoctorRecord>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    clinics: Vec<ClinicEntry>,
    #[serde(default)]
    services: Vec<ServiceItem>,
    #[serde(default)]
    reviews: Vec<ReviewItem>,
}

/// Read-only catalog of clinics, doctors, services and reviews.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    order: Vec<ClinicId>,
    doctors: HashMap<ClinicId, Vec<DoctorRecord>>,
    labels: HashMap<ClinicId, String>,
    services: Vec<ServiceItem>,
    reviews: Vec<ReviewItem>,
}

impl Catalog {
    /// Parses the catalog compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded YAML is malformed.
    pub fn embedded() -> VetResult<Self> {
        Self::from_yaml_str(EMBEDDED_CATALOG)
    }

    /// Reads and parses a catalog override file.
    ///
    /// # Errors
    ///
    /// Returns `VetError::FileRead` if the file cannot be read, or a parse/validation error.
    pub fn from_path(path: &Path) -> VetResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| VetError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&contents)?;
        tracing::info!(
            "loaded catalog override {} ({} clinics)",
            path.display(),
            catalog.order.len()
        );
        Ok(catalog)
    }

    /// Loads the override at `path` when given, otherwise the embedded catalog.
    pub fn load(path: Option<&Path>) -> VetResult<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    /// Parses catalog YAML.
    ///
    /// # Errors
    ///
    /// Returns `VetError::CatalogYaml` (carrying the offending field path) for malformed input
    /// and `VetError::DuplicateClinic` when a clinic id appears twice.
    pub fn from_yaml_str(yaml: &str) -> VetResult<Self> {
        let de = serde_yaml::Deserializer::from_str(yaml);
        let file: CatalogFile =
            serde_path_to_error::deserialize(de).map_err(|e| VetError::CatalogYaml {
                path: e.path().to_string(),
                source: e.into_inner(),
            })?;

        let mut catalog = Catalog {
            services: file.services,
            reviews: file.reviews,
            ..Catalog::default()
        };

        for entry in file.clinics {
            if catalog.labels.contains_key(&entry.id) {
                return Err(VetError::DuplicateClinic(entry.id.to_string()));
            }
            catalog.order.push(entry.id.clone());
            catalog
                .labels
                .insert(entry.id.clone(), entry.label.to_string());
            catalog.doctors.insert(entry.id, entry.doctors);
        }

        Ok(catalog)
    }

    /// Doctors of a clinic in display order; empty for unknown ids.
    pub fn lookup(&self, clinic_id: &str) -> &[DoctorRecord] {
        self.doctors
            .get(clinic_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Human-readable address of a clinic; `None` for unknown ids.
    pub fn label(&self, clinic_id: &str) -> Option<&str> {
        self.labels.get(clinic_id).map(String::as_str)
    }

    /// Resolves a doctor by clinic and catalog index.
    pub fn doctor(&self, clinic_id: &str, index: usize) -> Option<&DoctorRecord> {
        self.lookup(clinic_id).get(index)
    }

    /// Clinic ids in selector order.
    pub fn clinic_ids(&self) -> &[ClinicId] {
        &self.order
    }

    pub fn services(&self) -> &[ServiceItem] {
        &self.services
    }

    pub fn reviews(&self) -> &[ReviewItem] {
        &self.reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        let ids: Vec<&str> = catalog.clinic_ids().iter().map(ClinicId::as_str).collect();
        assert_eq!(ids, ["emerald", "andropov", "lenskaya"]);
        assert_eq!(catalog.lookup("emerald").len(), 4);
        assert_eq!(catalog.lookup("andropov").len(), 3);
        assert_eq!(catalog.lookup("lenskaya").len(), 5);
        assert_eq!(catalog.label("andropov"), Some("Андропова, 15"));
        assert_eq!(catalog.services().len(), 6);
        assert_eq!(catalog.reviews().len(), 3);
        assert_eq!(catalog.reviews()[2].rating.value(), 4.5);
    }

    #[test]
    fn test_lookup_preserves_order() {
        let catalog = Catalog::embedded().unwrap();
        let surnames: Vec<&str> = catalog
            .lookup("lenskaya")
            .iter()
            .map(|d| d.surname.as_str())
            .collect();
        assert_eq!(
            surnames,
            ["Васильев", "Николаева", "Федоров", "Орлова", "Белов"]
        );
    }

    #[test]
    fn test_unknown_clinic_is_empty_not_an_error() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.lookup("nowhere").is_empty());
        assert!(catalog.lookup("").is_empty());
        assert_eq!(catalog.label("nowhere"), None);
        assert_eq!(catalog.doctor("emerald", 99), None);
    }

    #[test]
    fn test_full_name_order() {
        let catalog = Catalog::embedded().unwrap();
        let doctor = catalog.doctor("emerald", 0).unwrap();
        assert_eq!(doctor.full_name(), "Иванов Петр Сергеевич");
    }

    #[test]
    fn test_full_name_without_patronymic() {
        let yaml = r#"
clinics:
  - id: north
    label: North
    doctors:
      - surname: Smith
        given_name: Anna
        specialization: Surgeon
        experience: 3
        photo_url: a.jpg
"#;
        let catalog = Catalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.doctor("north", 0).unwrap().full_name(), "Smith Anna");
    }

    #[test]
    fn test_clinic_without_doctors_keeps_label() {
        let yaml = "clinics:\n  - id: empty\n    label: Empty street\n";
        let catalog = Catalog::from_yaml_str(yaml).unwrap();
        assert!(catalog.lookup("empty").is_empty());
        assert_eq!(catalog.label("empty"), Some("Empty street"));
    }

    #[test]
    fn test_duplicate_clinic_rejected() {
        let yaml = "clinics:\n  - id: a\n    label: A\n  - id: a\n    label: B\n";
        let err = Catalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, VetError::DuplicateClinic(id) if id == "a"));
    }

    #[test]
    fn test_bad_rating_reports_path() {
        let yaml = r#"
clinics: []
reviews:
  - initials: AB
    name: Anna
    role: Owner
    text: Fine
    rating: 7
"#;
        let err = Catalog::from_yaml_str(yaml).unwrap_err();
        match err {
            VetError::CatalogYaml { path, .. } => assert!(path.contains("reviews")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_clinic_id_rejected() {
        let yaml = "clinics:\n  - id: \"Bad Id\"\n    label: A\n";
        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(VetError::CatalogYaml { .. })
        ));
    }

    #[test]
    fn test_from_path_reads_override() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("catalog.yaml");
        std::fs::write(&path, "clinics:\n  - id: solo\n    label: Solo\n").unwrap();
        let catalog = Catalog::load(Some(&path)).unwrap();
        assert_eq!(catalog.clinic_ids().len(), 1);

        let missing = tmp.path().join("missing.yaml");
        assert!(matches!(
            Catalog::from_path(&missing),
            Err(VetError::FileRead { .. })
        ));
    }
}
