//! Page bootstrap.
//!
//! [`ClinicPage`] owns the selection state and the scroll navigator for one page view. It
//! renders the initial clinic, routes [`PageEvent`]s, and re-binds the navigator to each
//! newly mounted panel. [`render_page`] assembles a complete document around it.

use crate::assets::{INDEX_TEMPLATE, SCROLL_JS_PATH};
use crate::catalog::Catalog;
use crate::config::CoreConfig;
use crate::constants::{FOOTER_PLACEHOLDER_ID, HEADER_PLACEHOLDER_ID};
use crate::events::{PageEvent, PageOutcome};
use crate::fragments::{load_fragments, FragmentSource, Fragments};
use crate::html::escape;
use crate::panel::{PanelRender, PanelRenderer, SelectionState};
use crate::scroll::{
    MountedGrid, NavButton, ScrollNavigator, ScrollStrip, SimulatedStrip, ToggleButton,
};
use crate::sections::{
    render_reviews, render_selectors, render_services, selector_controls, SelectorControl,
};

/// Where rendered panels are attached.
///
/// Mounting replaces the previous panel and returns handles to the new strip and buttons.
pub trait PanelHost {
    type Strip: ScrollStrip;
    type Button: NavButton;

    fn mount(&mut self, render: &PanelRender) -> MountedGrid<Self::Strip, Self::Button>;
}

/// Host for server-side rendering: keeps the markup, exposes no live elements.
#[derive(Debug, Clone, Default)]
pub struct MarkupHost {
    mounted: Option<String>,
}

impl MarkupHost {
    pub fn markup(&self) -> Option<&str> {
        self.mounted.as_deref()
    }
}

impl PanelHost for MarkupHost {
    type Strip = SimulatedStrip;
    type Button = ToggleButton;

    fn mount(&mut self, render: &PanelRender) -> MountedGrid<SimulatedStrip, ToggleButton> {
        self.mounted = Some(render.fragment());
        MountedGrid::empty()
    }
}

/// Host that lays out mounted grids in a viewport of fixed width.
#[derive(Debug, Clone)]
pub struct SimulatedHost {
    viewport_width: f64,
    mounts: usize,
}

impl SimulatedHost {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            mounts: 0,
        }
    }

    /// How many panels have been mounted so far.
    pub fn mounts(&self) -> usize {
        self.mounts
    }
}

impl PanelHost for SimulatedHost {
    type Strip = SimulatedStrip;
    type Button = ToggleButton;

    fn mount(&mut self, render: &PanelRender) -> MountedGrid<SimulatedStrip, ToggleButton> {
        self.mounts += 1;
        match &render.grid {
            Some(grid) => MountedGrid {
                strip: Some(SimulatedStrip::for_grid(grid, self.viewport_width)),
                left: Some(ToggleButton::default()),
                right: Some(ToggleButton::default()),
            },
            None => MountedGrid::empty(),
        }
    }
}

/// One page view: selector controls, the current clinic panel, and its navigator.
pub struct ClinicPage<'a, H: PanelHost> {
    renderer: PanelRenderer<'a>,
    selectors: Vec<SelectorControl>,
    host: H,
    selection: SelectionState,
    navigator: ScrollNavigator<H::Strip, H::Button>,
    panel: Option<PanelRender>,
}

impl<'a, H: PanelHost> ClinicPage<'a, H> {
    /// Binds the selector controls; nothing is rendered until [`ClinicPage::start`].
    pub fn new(catalog: &'a Catalog, host: H) -> Self {
        Self {
            renderer: PanelRenderer::new(catalog),
            selectors: selector_controls(catalog),
            host,
            selection: SelectionState::new(),
            navigator: ScrollNavigator::unbound(),
            panel: None,
        }
    }

    /// Renders the initial view: `initial` when given and non-empty, otherwise the first
    /// selector's clinic.
    ///
    /// Something is always mounted: with no clinic to show, the not-found placeholder is.
    pub fn start(&mut self, initial: Option<&str>) -> PageOutcome {
        let first = self.selectors.first().map(|s| s.clinic_id.to_string());
        let clinic_id = initial
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .or(first)
            .unwrap_or_default();
        if clinic_id.is_empty() {
            tracing::warn!("catalog has no clinics; rendering the not-found placeholder");
        }
        self.dispatch(PageEvent::SelectClinic(clinic_id))
    }

    pub fn dispatch(&mut self, event: PageEvent) -> PageOutcome {
        match event {
            PageEvent::SelectClinic(clinic_id) => self.select(&clinic_id),
            PageEvent::Scroll(direction) => {
                self.navigator.scroll(direction);
                PageOutcome::Scrolled
            }
            PageEvent::ShowDetails(trigger) => match self.renderer.details(&trigger) {
                Some(markup) => PageOutcome::Details(markup),
                None => {
                    tracing::debug!("details trigger {:?} does not resolve", trigger);
                    PageOutcome::Ignored
                }
            },
        }
    }

    fn select(&mut self, clinic_id: &str) -> PageOutcome {
        // An empty id only renders when nothing is mounted yet.
        let mounted_empty = clinic_id.is_empty() && self.panel.is_some();
        if mounted_empty || self.selection.is_current(clinic_id) {
            return PageOutcome::Unchanged;
        }
        let render = self.renderer.render(clinic_id, &mut self.selection);
        let mounted = self.host.mount(&render);
        self.navigator = ScrollNavigator::bind(mounted);
        self.panel = Some(render);
        PageOutcome::Rendered
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selectors(&self) -> &[SelectorControl] {
        &self.selectors
    }

    pub fn panel(&self) -> Option<&PanelRender> {
        self.panel.as_ref()
    }

    pub fn navigator(&self) -> &ScrollNavigator<H::Strip, H::Button> {
        &self.navigator
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

/// Everything the page shell needs.
#[derive(Debug, Clone, Default)]
pub struct PageParts {
    pub title: String,
    pub selectors: String,
    pub clinic_panel: String,
    pub services: String,
    pub reviews: String,
    pub fragments: Fragments,
}

/// Fills the page shell.
pub fn render_document(parts: &PageParts) -> String {
    fill_template(INDEX_TEMPLATE, |slot| match slot {
        "title" => Some(escape(&parts.title)),
        "header_placeholder_id" => Some(HEADER_PLACEHOLDER_ID.to_owned()),
        "footer_placeholder_id" => Some(FOOTER_PLACEHOLDER_ID.to_owned()),
        "header" => Some(parts.fragments.header.clone()),
        "footer" => Some(parts.fragments.footer.clone()),
        "selectors" => Some(parts.selectors.clone()),
        "clinic_panel" => Some(parts.clinic_panel.clone()),
        "services" => Some(parts.services.clone()),
        "reviews" => Some(parts.reviews.clone()),
        "scroll_script" => Some(SCROLL_JS_PATH.to_owned()),
        _ => None,
    })
}

/// Replaces `{{slot}}` markers in one pass; unknown slots are left as they are.
///
/// Inserted values are never rescanned, so slot markers inside fragments stay literal.
pub fn fill_template(template: &str, mut lookup: impl FnMut(&str) -> Option<String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let slot = after[..end].trim();
                match lookup(slot) {
                    Some(value) => output.push_str(&value),
                    None => output.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output
}

/// Renders the complete landing page.
///
/// Catalog sections are rendered before the header/footer are awaited, so a slow or failing
/// fragment never holds up the rest of the page.
pub async fn render_page<F: FragmentSource>(
    catalog: &Catalog,
    config: &CoreConfig,
    source: &F,
    initial_clinic: Option<&str>,
) -> String {
    let mut page = ClinicPage::new(catalog, MarkupHost::default());
    page.start(initial_clinic);

    let mut parts = PageParts {
        title: config.site_title().to_owned(),
        selectors: render_selectors(page.selectors(), page.selection().current_clinic()),
        clinic_panel: page.host().markup().unwrap_or_default().to_owned(),
        services: render_services(catalog.services()),
        reviews: render_reviews(catalog.reviews()),
        fragments: Fragments::default(),
    };

    parts.fragments = load_fragments(source).await;
    render_document(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NOT_FOUND_MESSAGE, PANEL_CONTAINER_ID, PANEL_HEADING_ID};
    use crate::panel::DoctorRef;
    use crate::scroll::ScrollDirection;
    use crate::VetError;
    use crate::VetResult;
    use std::future::Future;
    use std::path::PathBuf;

    struct StubSource {
        fail_header: bool,
    }

    impl FragmentSource for StubSource {
        fn load(&self, path: &str) -> impl Future<Output = VetResult<String>> + Send {
            let result = if self.fail_header && path == "header.html" {
                Err(VetError::FragmentLoad {
                    path: path.to_owned(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
                })
            } else {
                Ok(format!("<!-- {path} -->"))
            };
            async move { result }
        }
    }

    fn config() -> CoreConfig {
        CoreConfig::new(PathBuf::from("components"), None, "Друг".into()).unwrap()
    }

    #[test]
    fn test_start_renders_first_selector() {
        let catalog = Catalog::embedded().unwrap();
        let mut page = ClinicPage::new(&catalog, SimulatedHost::new(900.0));
        assert_eq!(page.start(None), PageOutcome::Rendered);
        assert_eq!(page.selection().current_clinic(), Some("emerald"));
        assert_eq!(page.panel().unwrap().card_count(), 4);
        assert_eq!(page.host().mounts(), 1);
    }

    #[test]
    fn test_reselecting_current_clinic_is_noop() {
        let catalog = Catalog::embedded().unwrap();
        let mut page = ClinicPage::new(&catalog, SimulatedHost::new(900.0));
        page.start(None);
        page.dispatch(PageEvent::Scroll(ScrollDirection::Right));

        let outcome = page.dispatch(PageEvent::SelectClinic("emerald".into()));
        assert_eq!(outcome, PageOutcome::Unchanged);
        assert_eq!(page.host().mounts(), 1);
        assert_eq!(page.selection().current_clinic(), Some("emerald"));
        // The strip kept its position: nothing was re-rendered.
        assert_eq!(page.navigator().strip().unwrap().scroll_left(), 300.0);
    }

    #[test]
    fn test_switching_clinic_rebinds_navigator() {
        let catalog = Catalog::embedded().unwrap();
        let mut page = ClinicPage::new(&catalog, SimulatedHost::new(900.0));
        page.start(None);
        page.dispatch(PageEvent::Scroll(ScrollDirection::Right));

        let outcome = page.dispatch(PageEvent::SelectClinic("lenskaya".into()));
        assert_eq!(outcome, PageOutcome::Rendered);
        assert_eq!(page.host().mounts(), 2);
        let strip = page.navigator().strip().unwrap();
        assert_eq!(strip.scroll_left(), 0.0);
        assert_eq!(strip.scroll_width(), 1500.0);
        let (left, right) = page.navigator().buttons();
        assert!(!left.unwrap().visible);
        assert!(right.unwrap().visible);
    }

    #[test]
    fn test_unknown_clinic_unbinds_navigator() {
        let catalog = Catalog::embedded().unwrap();
        let mut page = ClinicPage::new(&catalog, SimulatedHost::new(900.0));
        page.start(None);
        page.dispatch(PageEvent::SelectClinic("nowhere".into()));
        assert!(page.panel().unwrap().is_placeholder());
        assert!(!page.navigator().is_bound());
        assert_eq!(
            page.dispatch(PageEvent::Scroll(ScrollDirection::Left)),
            PageOutcome::Scrolled
        );
        assert_eq!(
            page.dispatch(PageEvent::SelectClinic("nowhere".into())),
            PageOutcome::Unchanged
        );
    }

    #[test]
    fn test_details_event() {
        let catalog = Catalog::embedded().unwrap();
        let mut page = ClinicPage::new(&catalog, MarkupHost::default());
        page.start(Some("lenskaya"));
        match page.dispatch(PageEvent::ShowDetails(DoctorRef::new("lenskaya", 4))) {
            PageOutcome::Details(markup) => assert!(markup.contains("Белов Андрей Игоревич")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(
            page.dispatch(PageEvent::ShowDetails(DoctorRef::new("lenskaya", 5))),
            PageOutcome::Ignored
        );
    }

    #[test]
    fn test_empty_catalog_start_mounts_placeholder() {
        let catalog = Catalog::default();
        let mut page = ClinicPage::new(&catalog, MarkupHost::default());
        assert_eq!(page.start(None), PageOutcome::Rendered);
        assert!(page.panel().unwrap().is_placeholder());
        assert_eq!(page.selection().current_clinic(), None);
        let markup = page.host().markup().unwrap();
        assert!(markup.contains(PANEL_CONTAINER_ID));
        assert!(markup.contains(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_empty_initial_clinic_falls_back_to_first_selector() {
        let catalog = Catalog::embedded().unwrap();
        let mut page = ClinicPage::new(&catalog, SimulatedHost::new(900.0));
        assert_eq!(page.start(Some("")), PageOutcome::Rendered);
        assert_eq!(page.selection().current_clinic(), Some("emerald"));
        assert!(page.navigator().is_bound());
    }

    #[test]
    fn test_empty_selection_after_mount_is_noop() {
        let catalog = Catalog::embedded().unwrap();
        let mut page = ClinicPage::new(&catalog, SimulatedHost::new(900.0));
        page.start(None);
        assert_eq!(
            page.dispatch(PageEvent::SelectClinic(String::new())),
            PageOutcome::Unchanged
        );
        assert_eq!(page.host().mounts(), 1);
        assert_eq!(page.selection().current_clinic(), Some("emerald"));
    }

    #[test]
    fn test_fill_template_single_pass() {
        let out = fill_template("a {{x}} b {{ y }} c {{unknown}} {{open", |slot| match slot {
            "x" => Some("{{y}}".into()),
            "y" => Some("Y".into()),
            _ => None,
        });
        assert_eq!(out, "a {{y}} b Y c {{unknown}} {{open");
    }

    #[tokio::test]
    async fn test_render_page_assembles_all_sections() {
        let catalog = Catalog::embedded().unwrap();
        let html = render_page(
            &catalog,
            &config(),
            &StubSource { fail_header: false },
            None,
        )
        .await;
        assert!(html.contains("<title>Друг</title>"));
        assert!(html.contains(&format!(
            "<div id=\"{HEADER_PLACEHOLDER_ID}\"><!-- header.html --></div>"
        )));
        assert!(html.contains(&format!(
            "<div id=\"{FOOTER_PLACEHOLDER_ID}\"><!-- footer.html --></div>"
        )));
        assert_eq!(html.matches("service-card").count(), 6);
        assert_eq!(html.matches("review-card").count(), 3);
        assert_eq!(html.matches("doctor-card-wrapper").count(), 4);
        assert!(html.contains("Изумрудная, 3</strong>"));
        assert!(html.contains(SCROLL_JS_PATH));
        assert!(!html.contains("{{"));
    }

    #[tokio::test]
    async fn test_render_page_with_empty_initial_clinic() {
        let catalog = Catalog::embedded().unwrap();
        let html = render_page(
            &catalog,
            &config(),
            &StubSource { fail_header: false },
            Some(""),
        )
        .await;
        assert!(html.contains(PANEL_CONTAINER_ID));
        assert!(html.contains(PANEL_HEADING_ID));
        assert_eq!(html.matches("doctor-card-wrapper").count(), 4);
        assert!(html.contains("clinic-selector active\" href=\"/?clinic=emerald\""));

        let empty = Catalog::default();
        let html = render_page(&empty, &config(), &StubSource { fail_header: false }, Some(""))
            .await;
        assert!(html.contains(PANEL_CONTAINER_ID));
        assert!(html.contains(PANEL_HEADING_ID));
        assert!(html.contains(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn test_render_page_with_failed_header() {
        let catalog = Catalog::embedded().unwrap();
        let html = render_page(
            &catalog,
            &config(),
            &StubSource { fail_header: true },
            Some("nowhere"),
        )
        .await;
        assert!(html.contains("<div id=\"header-placeholder\"></div>"));
        assert!(html.contains("<!-- footer.html -->"));
        assert!(html.contains(NOT_FOUND_MESSAGE));
        assert!(!html.contains(" active\""));
    }
}
