//! Typed page events.
//!
//! User actions reach the page as values; markup only carries the identifiers needed to
//! build them (`data-clinic-id`, `data-doctor-index`, `data-scroll-direction`).

use crate::panel::DoctorRef;
use crate::scroll::ScrollDirection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A clinic selector control was activated.
    SelectClinic(String),
    /// A scroll button was pressed.
    Scroll(ScrollDirection),
    /// A card's details trigger was activated.
    ShowDetails(DoctorRef),
}

impl PageEvent {
    /// Builds a details event from the raw attribute values of a trigger.
    ///
    /// Returns `None` when the index attribute is not a number.
    pub fn from_trigger_attrs(clinic_id: &str, doctor_index: &str) -> Option<Self> {
        let index = doctor_index.trim().parse::<usize>().ok()?;
        Some(PageEvent::ShowDetails(DoctorRef::new(clinic_id, index)))
    }
}

/// What handling an event did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// A new panel replaced the previous one.
    Rendered,
    /// The clinic was already selected; nothing changed.
    Unchanged,
    /// The strip moved (or would have, had it been mounted).
    Scrolled,
    /// Details fragment for the requested doctor.
    Details(String),
    /// The event referred to something that does not exist.
    Ignored,
}
