//! Clinic panel rendering.
//!
//! Builds the doctor card strip for one clinic and hands back explicit references to the
//! strip and its scroll buttons, so the scroll navigator is bound to what was just rendered
//! instead of re-discovering elements by class name.

use crate::catalog::{Catalog, DoctorRecord};
use crate::constants::{
    CLINIC_ID_ATTR, DOCTOR_INDEX_ATTR, NOT_FOUND_MESSAGE, PANEL_CONTAINER_ID, PANEL_HEADING_ID,
    SCROLL_EDGE_EPSILON, SCROLL_LEFT_BUTTON_ID, SCROLL_RIGHT_BUTTON_ID, SCROLL_STEP,
    SCROLL_STRIP_ID,
};
use crate::html::escape;
use crate::plural::experience_phrase;

/// Which clinic the page currently shows.
///
/// Owned by the page bootstrap and handed to the renderer by reference; there is no
/// process-wide selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current_clinic: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_clinic(&self) -> Option<&str> {
        self.current_clinic.as_deref()
    }

    /// True when `clinic_id` is already the rendered clinic.
    pub fn is_current(&self, clinic_id: &str) -> bool {
        self.current_clinic.as_deref() == Some(clinic_id)
    }

    fn select(&mut self, clinic_id: &str) {
        self.current_clinic = Some(clinic_id.to_owned());
    }
}

/// Structured payload of a card's "details" trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DoctorRef {
    pub clinic_id: String,
    /// Position of the doctor in the clinic's catalog list
    pub index: usize,
}

impl DoctorRef {
    pub fn new(clinic_id: impl Into<String>, index: usize) -> Self {
        Self {
            clinic_id: clinic_id.into(),
            index,
        }
    }

    /// Link target of the details trigger.
    pub fn details_path(&self) -> String {
        format!("/clinics/{}/doctors/{}", self.clinic_id, self.index)
    }
}

/// Ids of the elements the scroll navigator is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRefs {
    pub strip_id: &'static str,
    pub left_button_id: &'static str,
    pub right_button_id: &'static str,
    pub card_count: usize,
}

/// Output of one panel render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRender {
    pub clinic_id: String,
    /// Inner markup of the heading element; empty when the clinic has no label
    pub heading: String,
    /// Inner markup of the panel container
    pub body: String,
    /// Present only when at least one card was rendered
    pub grid: Option<GridRefs>,
    /// One trigger per card, in card order
    pub triggers: Vec<DoctorRef>,
}

impl PanelRender {
    pub fn is_placeholder(&self) -> bool {
        self.grid.is_none()
    }

    pub fn card_count(&self) -> usize {
        self.triggers.len()
    }

    /// Heading and container elements, ready to be dropped into a page.
    pub fn fragment(&self) -> String {
        format!(
            "<p id=\"{PANEL_HEADING_ID}\" class=\"lead\">{}</p>\n<div id=\"{PANEL_CONTAINER_ID}\">{}</div>",
            self.heading, self.body
        )
    }
}

/// Renders clinic panels from a catalog.
#[derive(Debug, Clone, Copy)]
pub struct PanelRenderer<'a> {
    catalog: &'a Catalog,
}

impl<'a> PanelRenderer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Renders the panel for `clinic_id` and records it as the current selection.
    ///
    /// An empty id leaves the selection untouched and yields the placeholder. A non-empty id
    /// without doctors yields the placeholder but still becomes the current selection, so
    /// selecting it again is a no-op like any other clinic.
    pub fn render(&self, clinic_id: &str, selection: &mut SelectionState) -> PanelRender {
        if clinic_id.is_empty() {
            return Self::placeholder(clinic_id, String::new());
        }

        selection.select(clinic_id);

        let heading = self
            .catalog
            .label(clinic_id)
            .map(|label| format!("Специалисты клиники: <strong>{}</strong>", escape(label)))
            .unwrap_or_default();

        let doctors = self.catalog.lookup(clinic_id);
        if doctors.is_empty() {
            tracing::debug!("no doctors for clinic {:?}; rendering placeholder", clinic_id);
            return Self::placeholder(clinic_id, heading);
        }

        let mut body = String::new();
        body.push_str(&format!(
            "<div class=\"doctors-scroll-container\" data-scroll-step=\"{SCROLL_STEP}\" data-scroll-epsilon=\"{SCROLL_EDGE_EPSILON}\">\n"
        ));
        body.push_str(&format!(
            "<div class=\"doctors-scroll-wrapper\" id=\"{SCROLL_STRIP_ID}\">\n<div class=\"doctors-grid\">\n"
        ));

        let mut triggers = Vec::with_capacity(doctors.len());
        for (index, doctor) in doctors.iter().enumerate() {
            let trigger = DoctorRef::new(clinic_id, index);
            body.push_str(&render_card(doctor, &trigger));
            triggers.push(trigger);
        }

        body.push_str("</div>\n</div>\n");
        body.push_str(&format!(
            "<button type=\"button\" class=\"scroll-btn scroll-left\" id=\"{SCROLL_LEFT_BUTTON_ID}\" data-scroll-direction=\"-1\"><i class=\"bi bi-chevron-left\"></i></button>\n"
        ));
        body.push_str(&format!(
            "<button type=\"button\" class=\"scroll-btn scroll-right\" id=\"{SCROLL_RIGHT_BUTTON_ID}\" data-scroll-direction=\"1\"><i class=\"bi bi-chevron-right\"></i></button>\n"
        ));
        body.push_str("</div>\n");

        tracing::debug!(
            "rendered clinic panel {:?} with {} cards",
            clinic_id,
            triggers.len()
        );

        PanelRender {
            clinic_id: clinic_id.to_owned(),
            heading,
            body,
            grid: Some(GridRefs {
                strip_id: SCROLL_STRIP_ID,
                left_button_id: SCROLL_LEFT_BUTTON_ID,
                right_button_id: SCROLL_RIGHT_BUTTON_ID,
                card_count: triggers.len(),
            }),
            triggers,
        }
    }

    /// Resolves a details trigger to the doctor it names.
    pub fn resolve(&self, trigger: &DoctorRef) -> Option<&'a DoctorRecord> {
        self.catalog.doctor(&trigger.clinic_id, trigger.index)
    }

    /// Renders the details fragment for a trigger; `None` when it no longer resolves.
    pub fn details(&self, trigger: &DoctorRef) -> Option<String> {
        self.resolve(trigger).map(render_details)
    }

    fn placeholder(clinic_id: &str, heading: String) -> PanelRender {
        PanelRender {
            clinic_id: clinic_id.to_owned(),
            heading,
            body: format!(
                "<div class=\"text-center text-muted\">\n<i class=\"bi bi-exclamation-circle display-4 mb-3\"></i>\n<p>{NOT_FOUND_MESSAGE}</p>\n</div>"
            ),
            grid: None,
            triggers: Vec::new(),
        }
    }
}

fn render_card(doctor: &DoctorRecord, trigger: &DoctorRef) -> String {
    let name = escape(&doctor.full_name());
    let mut card = String::new();
    card.push_str("<div class=\"doctor-card-wrapper\">\n");
    card.push_str("<div class=\"card h-100 border-0 shadow-sm doctor-card\">\n");
    card.push_str(&format!(
        "<img src=\"{}\" class=\"card-img-top\" alt=\"{}\">\n",
        escape(&doctor.photo_url),
        name
    ));
    card.push_str("<div class=\"card-body\">\n");
    card.push_str(&format!(
        "<h5 class=\"card-title text-green\">{}</h5>\n",
        name
    ));
    card.push_str(&format!(
        "<p class=\"card-text mb-1\"><strong>Специализация:</strong> {}</p>\n",
        escape(doctor.specialization.as_str())
    ));
    card.push_str(&format!(
        "<p class=\"card-text\"><strong>Стаж:</strong> {}</p>\n",
        experience_phrase(doctor.experience)
    ));
    card.push_str(&format!(
        "<p class=\"card-text small text-muted doctor-description\">{}</p>\n",
        escape(&doctor.description)
    ));
    card.push_str("</div>\n");
    card.push_str("<div class=\"card-footer bg-transparent border-0\">\n");
    card.push_str(&format!(
        "<a class=\"btn btn-outline-success w-100\" href=\"{}\" {CLINIC_ID_ATTR}=\"{}\" {DOCTOR_INDEX_ATTR}=\"{}\">Подробнее</a>\n",
        escape(&trigger.details_path()),
        escape(&trigger.clinic_id),
        trigger.index
    ));
    card.push_str("</div>\n</div>\n</div>\n");
    card
}

/// Details fragment for one doctor.
pub fn render_details(doctor: &DoctorRecord) -> String {
    let mut output = String::new();
    output.push_str("<article class=\"doctor-details\">\n");
    output.push_str(&format!(
        "<h5 class=\"doctor-details-title\">{}</h5>\n",
        escape(&doctor.full_name())
    ));
    output.push_str(&format!(
        "<p><strong>Специализация:</strong> {}</p>\n",
        escape(doctor.specialization.as_str())
    ));
    output.push_str(&format!(
        "<p><strong>Стаж:</strong> {}</p>\n",
        experience_phrase(doctor.experience)
    ));
    output.push_str(&format!(
        "<p><strong>О специалисте:</strong> {}</p>\n",
        escape(&doctor.description)
    ));
    output.push_str("</article>");
    output
}
