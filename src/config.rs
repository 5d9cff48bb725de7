//! Site-wide constants: where the data lives and which host-document
//! elements the glue binds to.

pub struct SiteConfig {
    pub data_url: &'static str,
    pub print_url: &'static str,
    /// Viewport width above which the mobile menu is force-closed.
    pub menu_breakpoint_px: f64,
    pub resize_debounce_ms: i32,
    pub navbar_scroll_threshold_px: f64,
    /// Most recent job first.
    pub reverse_experience: bool,
}

impl SiteConfig {
    pub const DEFAULT: SiteConfig = SiteConfig {
        data_url: "./data.json",
        print_url: "print.html",
        menu_breakpoint_px: 768.0,
        resize_debounce_ms: 150,
        navbar_scroll_threshold_px: 50.0,
        reverse_experience: true,
    };
}

/// Selectors for the containers and controls of the host document.
pub mod selectors {
    pub const EXPERIENCE_LIST: &str = "experience-list";
    pub const SKILLS_GRID: &str = "skills-grid";
    pub const LANGUAGES_LIST: &str = "languages-list";
    pub const EDUCATION_LIST: &str = "education-list";
    pub const INTRO_BLOCK: &str = ".intro-block";
    pub const LEAD_TEXT: &str = ".lead-text";
    pub const EMAIL_LINK: &str = "email-link";
    pub const TELEGRAM_LINK: &str = "telegram-link";

    pub const NAVBAR: &str = ".navbar";
    pub const NAV_MENU: &str = ".nav-menu";
    pub const NAV_LINKS: &str = ".nav-menu a[href^=\"#\"]";
    pub const ANCHORS: &str = "a[href^=\"#\"]";
    pub const SECTIONS: &str = "section[id]";
    pub const MENU_TOGGLE: &str = ".menu-toggle";
    pub const THEME_TOGGLE: &str = ".theme-toggle";
    pub const SIDEBAR: &str = ".sidebar";
    pub const SIDEBAR_TOGGLE: &str = ".sidebar-toggle";
    pub const SIDEBAR_CLOSE: &str = ".sidebar-close";
    pub const SIDEBAR_OVERLAY: &str = ".sidebar-overlay";
    pub const LANG_SWITCHER: &str = ".lang-switcher";
    pub const LANG_TOGGLE: &str = ".lang-toggle";
    pub const LANG_MENU: &str = ".lang-menu";
    pub const LANG_OPTIONS: &str = ".lang-option[data-lang]";
    pub const LANG_FLAG: &str = ".lang-flag";
    pub const PRINT_BUTTON: &str = ".print-button";
    pub const I18N: &str = "[data-i18n]";
    pub const FADE_IN: &str = ".skill-category, .contact-link";
    pub const SKILL_CATEGORIES: &str = ".skill-category";
    pub const SKILL_TAGS: &str = ".skill-tag";
}
