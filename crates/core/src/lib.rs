//! # Vet Core
//!
//! Core logic for the vet clinic site:
//! - Catalog of clinics, doctors, services and reviews (embedded YAML or override file)
//! - Clinic panel rendering with pluralised experience and explicit grid references
//! - Scroll navigator model for the doctor card strip
//! - Page bootstrap: selection state, typed events, header/footer fragments, page shell
//!
//! **No API concerns**: HTTP routing and the CLI belong in `api-rest` and `vet-cli`.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod fragments;
pub mod html;
pub mod page;
pub mod panel;
pub mod plural;
pub mod rating;
pub mod scroll;
pub mod sections;

pub use catalog::{Catalog, DoctorRecord, ReviewItem, ServiceItem};
pub use config::CoreConfig;
pub use error::{VetError, VetResult};
pub use events::{PageEvent, PageOutcome};
pub use fragments::{FragmentSource, Fragments, FsFragmentSource};
pub use page::{render_page, ClinicPage, MarkupHost, PanelHost, SimulatedHost};
pub use panel::{DoctorRef, GridRefs, PanelRender, PanelRenderer, SelectionState};
pub use plural::{experience_phrase, experience_word};
pub use rating::{Rating, StarCounts};
pub use scroll::{ButtonVisibility, ScrollDirection, ScrollNavigator};

pub use vet_types::{ClinicId, NonEmptyText};
