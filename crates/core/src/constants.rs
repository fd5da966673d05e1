//! Constants used throughout the vet core crate.
//!
//! DOM ids, fragment paths and scroll geometry live here so the renderers, the page shell
//! and the browser script all agree on them.

/// Id of the element that receives the clinic panel markup.
pub const PANEL_CONTAINER_ID: &str = "clinic-doctors-container";

/// Id of the element showing the selected clinic's label.
pub const PANEL_HEADING_ID: &str = "selected-clinic-text";

/// Id of the horizontally scrollable doctor strip.
pub const SCROLL_STRIP_ID: &str = "doctors-scroll-wrapper";

/// Id of the "scroll left" button.
pub const SCROLL_LEFT_BUTTON_ID: &str = "doctors-scroll-left";

/// Id of the "scroll right" button.
pub const SCROLL_RIGHT_BUTTON_ID: &str = "doctors-scroll-right";

/// Attribute carrying a clinic identifier on selector controls and detail triggers.
pub const CLINIC_ID_ATTR: &str = "data-clinic-id";

/// Attribute carrying a doctor's catalog index on detail triggers.
pub const DOCTOR_INDEX_ATTR: &str = "data-doctor-index";

/// Placeholder id for the header fragment.
pub const HEADER_PLACEHOLDER_ID: &str = "header-placeholder";

/// Placeholder id for the footer fragment.
pub const FOOTER_PLACEHOLDER_ID: &str = "footer-placeholder";

/// Header fragment path, relative to the components directory.
pub const HEADER_FRAGMENT_PATH: &str = "header.html";

/// Footer fragment path, relative to the components directory.
pub const FOOTER_FRAGMENT_PATH: &str = "footer.html";

/// Default components directory name, searched relative to cwd and the manifest ancestors.
pub const COMPONENTS_DIR: &str = "components";

/// Horizontal distance covered by one scroll button press.
pub const SCROLL_STEP: f64 = 300.0;

/// Tolerance at the right edge before the right button is hidden.
pub const SCROLL_EDGE_EPSILON: f64 = 10.0;

/// Width one doctor card occupies in the strip, including the gap.
pub const CARD_STRIDE: f64 = 300.0;

/// Number of slots in a review star rating.
pub const RATING_SLOTS: u8 = 5;

/// Message shown when a clinic has no doctors or is unknown.
pub const NOT_FOUND_MESSAGE: &str = "Специалисты не найдены для выбранной клиники";

/// Default page title.
pub const DEFAULT_SITE_TITLE: &str = "Ветеринарная клиника Друг";
