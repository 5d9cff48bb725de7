//! Presentational controls: menus, navbar styling and fade-in timing.
//!
//! Each control is independent. The wasm32 glue reads the open state from
//! here and mirrors it onto CSS classes.

use crate::prefs::Theme;

/// Open/closed state of a menu, sidebar or dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Clicks outside the control close it. Returns whether the state changed.
    pub fn on_outside_click(&mut self, inside: bool) -> bool {
        !inside && self.close()
    }

    /// The mobile menu has no meaning above the breakpoint.
    pub fn on_resize(&mut self, viewport_width: f64, breakpoint: f64) -> bool {
        viewport_width > breakpoint && self.close()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

/// Navbar background and shadow for a theme and scroll offset. Past
/// `threshold` the bar turns more opaque and gains a shadow.
pub fn navbar_style(theme: Theme, scroll_y: f64, threshold: f64) -> NavbarStyle {
    let scrolled = scroll_y > threshold;
    match (theme, scrolled) {
        (Theme::Dark, true) => NavbarStyle {
            background: "rgba(10, 10, 10, 0.95)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.3)",
        },
        (Theme::Light, true) => NavbarStyle {
            background: "rgba(255, 255, 255, 0.95)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.05)",
        },
        (Theme::Dark, false) => NavbarStyle {
            background: "rgba(10, 10, 10, 0.8)",
            box_shadow: "none",
        },
        (Theme::Light, false) => NavbarStyle {
            background: "rgba(255, 255, 255, 0.8)",
            box_shadow: "none",
        },
    }
}

/// Staggered `transition-delay` (seconds) for a skill tag.
pub fn fade_in_delay(category_index: usize, tag_index: usize) -> f64 {
    category_index as f64 * 0.1 + tag_index as f64 * 0.05
}

/// CSS value for [`fade_in_delay`], e.g. `"0.15s"`.
pub fn fade_in_delay_css(category_index: usize, tag_index: usize) -> String {
    let delay = fade_in_delay(category_index, tag_index);
    // Round away float noise (0.1 + 0.05 = 0.15000000000000002).
    format!("{}s", (delay * 1000.0).round() / 1000.0)
}
