//! Services, reviews and clinic selector sections of the landing page.

use crate::catalog::{Catalog, ReviewItem, ServiceItem};
use crate::constants::CLINIC_ID_ATTR;
use crate::html::escape;
use crate::rating::render_stars;
use vet_types::ClinicId;

/// One clinic selector control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorControl {
    pub clinic_id: ClinicId,
    pub label: String,
}

/// Selector controls in catalog order.
pub fn selector_controls(catalog: &Catalog) -> Vec<SelectorControl> {
    catalog
        .clinic_ids()
        .iter()
        .map(|id| SelectorControl {
            clinic_id: id.clone(),
            label: catalog.label(id.as_str()).unwrap_or_default().to_owned(),
        })
        .collect()
}

pub fn render_selectors(controls: &[SelectorControl], current: Option<&str>) -> String {
    controls
        .iter()
        .map(|control| {
            let id = control.clinic_id.as_str();
            let active = if current == Some(id) { " active" } else { "" };
            format!(
                "<a class=\"list-group-item list-group-item-action clinic-selector{active}\" href=\"/?clinic={}\" {CLINIC_ID_ATTR}=\"{}\">{}</a>\n",
                escape(id),
                escape(id),
                escape(&control.label)
            )
        })
        .collect()
}

pub fn render_services(services: &[ServiceItem]) -> String {
    services
        .iter()
        .map(|service| {
            format!(
                r#"<div class="col-md-6 col-lg-4">
<div class="card service-card h-100 border-0 shadow-sm">
<div class="card-body text-center p-4">
<div class="bg-light-green rounded-circle d-inline-flex align-items-center justify-content-center mb-3" style="width: 80px; height: 80px;">
<i class="bi {} text-green fs-1"></i>
</div>
<h5 class="card-title fw-bold">{}</h5>
<p class="card-text text-muted">{}</p>
<span class="text-primary fw-bold">{}</span>
</div>
</div>
</div>
"#,
                escape(&service.icon),
                escape(service.title.as_str()),
                escape(&service.description),
                escape(&service.price)
            )
        })
        .collect()
}

pub fn render_reviews(reviews: &[ReviewItem]) -> String {
    reviews
        .iter()
        .map(|review| {
            format!(
                r#"<div class="col-lg-4">
<div class="review-card h-100">
<div class="d-flex align-items-center mb-3">
<div class="bg-primary rounded-circle d-flex align-items-center justify-content-center" style="width: 50px; height: 50px;">
<span class="text-white fw-bold">{}</span>
</div>
<div class="ms-3">
<h6 class="mb-0 fw-bold">{}</h6>
<small class="text-muted">{}</small>
</div>
</div>
<p class="mb-0">{}</p>
<div class="text-warning mt-2">{}</div>
</div>
</div>
"#,
                escape(&review.initials),
                escape(review.name.as_str()),
                escape(&review.role),
                escape(&review.text),
                render_stars(review.rating)
            )
        })
        .collect()
}
