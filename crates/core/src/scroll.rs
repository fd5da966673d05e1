//! Scroll navigator for the doctor card strip.
//!
//! The navigator owns handles to the strip and its two buttons. Handles come from whatever
//! hosts the rendered panel (see [`crate::page::PanelHost`]); a missing handle turns the
//! corresponding operation into a no-op.

use crate::constants::{CARD_STRIDE, SCROLL_EDGE_EPSILON, SCROLL_STEP};
use crate::panel::GridRefs;

/// Direction of a scroll button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    /// `-1` for left, `+1` for right.
    pub fn sign(self) -> f64 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }

    /// Parses the `-1` / `1` values carried by `data-scroll-direction`.
    pub fn from_sign(value: i32) -> Option<Self> {
        match value {
            -1 => Some(ScrollDirection::Left),
            1 => Some(ScrollDirection::Right),
            _ => None,
        }
    }
}

/// A horizontally scrollable element.
pub trait ScrollStrip {
    /// Current horizontal scroll offset.
    fn scroll_left(&self) -> f64;
    /// Total width of the scrollable content.
    fn scroll_width(&self) -> f64;
    /// Visible width of the element.
    fn client_width(&self) -> f64;
    /// Smoothly shifts the offset by `delta`; the host clamps the result to its scroll range.
    fn scroll_by(&mut self, delta: f64);
}

/// A button whose visibility the navigator controls.
pub trait NavButton {
    fn set_visible(&mut self, visible: bool);
}

/// Which scroll buttons should be shown for a strip geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisibility {
    pub left: bool,
    pub right: bool,
}

impl ButtonVisibility {
    pub fn from_geometry(offset: f64, scroll_width: f64, client_width: f64) -> Self {
        let max_scroll = scroll_width - client_width;
        Self {
            left: offset > 0.0,
            right: offset < max_scroll - SCROLL_EDGE_EPSILON,
        }
    }
}

/// Handles produced when a panel is mounted.
#[derive(Debug)]
pub struct MountedGrid<S, B> {
    pub strip: Option<S>,
    pub left: Option<B>,
    pub right: Option<B>,
}

impl<S, B> MountedGrid<S, B> {
    pub fn empty() -> Self {
        Self {
            strip: None,
            left: None,
            right: None,
        }
    }
}

/// Moves the strip and keeps the buttons in sync with its position.
#[derive(Debug)]
pub struct ScrollNavigator<S, B> {
    strip: Option<S>,
    left: Option<B>,
    right: Option<B>,
}

impl<S: ScrollStrip, B: NavButton> ScrollNavigator<S, B> {
    /// Binds to freshly mounted handles and syncs the buttons once.
    pub fn bind(grid: MountedGrid<S, B>) -> Self {
        let mut navigator = Self {
            strip: grid.strip,
            left: grid.left,
            right: grid.right,
        };
        navigator.refresh_button_visibility();
        navigator
    }

    /// A navigator bound to nothing; every operation is a no-op.
    pub fn unbound() -> Self {
        Self {
            strip: None,
            left: None,
            right: None,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.strip.is_some()
    }

    /// Scrolls one step in `direction`, then handles the resulting scroll event.
    pub fn scroll(&mut self, direction: ScrollDirection) {
        let Some(strip) = self.strip.as_mut() else {
            return;
        };
        strip.scroll_by(direction.sign() * SCROLL_STEP);
        self.on_scroll();
    }

    /// Scroll event handler.
    pub fn on_scroll(&mut self) {
        self.refresh_button_visibility();
    }

    /// Recomputes button visibility from the strip's current geometry.
    pub fn refresh_button_visibility(&mut self) {
        let (Some(strip), Some(left), Some(right)) =
            (self.strip.as_ref(), self.left.as_mut(), self.right.as_mut())
        else {
            return;
        };
        let visibility = ButtonVisibility::from_geometry(
            strip.scroll_left(),
            strip.scroll_width(),
            strip.client_width(),
        );
        left.set_visible(visibility.left);
        right.set_visible(visibility.right);
    }

    pub fn strip(&self) -> Option<&S> {
        self.strip.as_ref()
    }

    pub fn buttons(&self) -> (Option<&B>, Option<&B>) {
        (self.left.as_ref(), self.right.as_ref())
    }
}

/// In-memory strip geometry that clamps like a browser scroll container.
///
/// Smooth scrolling settles immediately; the final offset is what matters.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedStrip {
    offset: f64,
    scroll_width: f64,
    client_width: f64,
}

impl SimulatedStrip {
    pub fn new(scroll_width: f64, client_width: f64) -> Self {
        Self {
            offset: 0.0,
            scroll_width,
            client_width,
        }
    }

    /// Strip sized for a rendered grid shown in a viewport of `client_width`.
    pub fn for_grid(grid: &GridRefs, client_width: f64) -> Self {
        Self::new(grid.card_count as f64 * CARD_STRIDE, client_width)
    }

    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_scroll());
    }
}

impl ScrollStrip for SimulatedStrip {
    fn scroll_left(&self) -> f64 {
        self.offset
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn client_width(&self) -> f64 {
        self.client_width
    }

    fn scroll_by(&mut self, delta: f64) {
        self.set_offset(self.offset + delta);
    }
}

/// Button that only records whether it is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleButton {
    pub visible: bool,
}

impl NavButton for ToggleButton {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(scroll_width: f64, client_width: f64) -> ScrollNavigator<SimulatedStrip, ToggleButton> {
        ScrollNavigator::bind(MountedGrid {
            strip: Some(SimulatedStrip::new(scroll_width, client_width)),
            left: Some(ToggleButton::default()),
            right: Some(ToggleButton::default()),
        })
    }

    fn visible(nav: &ScrollNavigator<SimulatedStrip, ToggleButton>) -> (bool, bool) {
        let (left, right) = nav.buttons();
        (left.unwrap().visible, right.unwrap().visible)
    }

    #[test]
    fn test_bind_refreshes_immediately() {
        let nav = navigator(1500.0, 900.0);
        assert_eq!(visible(&nav), (false, true));
    }

    #[test]
    fn test_interior_offset_shows_both() {
        let mut nav = navigator(1500.0, 900.0);
        nav.scroll(ScrollDirection::Right);
        assert_eq!(nav.strip().unwrap().scroll_left(), 300.0);
        assert_eq!(visible(&nav), (true, true));
    }

    #[test]
    fn test_max_offset_hides_right() {
        let mut nav = navigator(1500.0, 900.0);
        nav.scroll(ScrollDirection::Right);
        nav.scroll(ScrollDirection::Right);
        nav.scroll(ScrollDirection::Right);
        assert_eq!(nav.strip().unwrap().scroll_left(), 600.0);
        assert_eq!(visible(&nav), (true, false));
    }

    #[test]
    fn test_right_hidden_within_epsilon_of_end() {
        let v = ButtonVisibility::from_geometry(595.0, 1500.0, 900.0);
        assert!(v.left);
        assert!(!v.right);
        let v = ButtonVisibility::from_geometry(589.0, 1500.0, 900.0);
        assert!(v.right);
    }

    #[test]
    fn test_scroll_there_and_back_stays_in_range() {
        let mut nav = navigator(1200.0, 1000.0);
        nav.scroll(ScrollDirection::Right);
        nav.scroll(ScrollDirection::Left);
        let strip = nav.strip().unwrap();
        assert!(strip.scroll_left() >= 0.0);
        assert!(strip.scroll_left() <= strip.max_scroll());
        assert_eq!(strip.scroll_left(), 0.0);
        assert_eq!(visible(&nav), (false, true));
    }

    #[test]
    fn test_content_narrower_than_viewport_hides_both() {
        let nav = navigator(600.0, 900.0);
        assert_eq!(visible(&nav), (false, false));
    }

    #[test]
    fn test_missing_elements_are_noops() {
        let mut nav: ScrollNavigator<SimulatedStrip, ToggleButton> = ScrollNavigator::unbound();
        nav.scroll(ScrollDirection::Right);
        nav.refresh_button_visibility();
        assert!(!nav.is_bound());

        let mut nav = ScrollNavigator::bind(MountedGrid {
            strip: Some(SimulatedStrip::new(1500.0, 900.0)),
            left: Some(ToggleButton { visible: true }),
            right: None,
        });
        nav.scroll(ScrollDirection::Right);
        assert_eq!(nav.strip().unwrap().scroll_left(), 300.0);
        // Without both buttons visibility is left as it was.
        assert!(nav.buttons().0.unwrap().visible);
    }

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(ScrollDirection::from_sign(-1), Some(ScrollDirection::Left));
        assert_eq!(ScrollDirection::from_sign(1), Some(ScrollDirection::Right));
        assert_eq!(ScrollDirection::from_sign(0), None);
    }

    #[test]
    fn test_strip_for_grid_uses_card_stride() {
        let grid = GridRefs {
            strip_id: "s",
            left_button_id: "l",
            right_button_id: "r",
            card_count: 5,
        };
        let strip = SimulatedStrip::for_grid(&grid, 900.0);
        assert_eq!(strip.scroll_width(), 1500.0);
        assert_eq!(strip.max_scroll(), 600.0);
    }
}
