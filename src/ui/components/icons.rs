//! SVG icon registry.
//!
//! Components refer to glyphs by semantic name through [`Icon`]; the path data
//! lives only here. Glyphs are rendered inline as SVG so they inherit
//! `currentColor` and can be sized with utility classes.

use std::fmt;

use leptos::prelude::*;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Semantic icon names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Generic unknown/question glyph.
    #[default]
    HelpCircle,
    /// People/patients.
    Users,
    /// Calendar/appointments.
    Calendar,
    /// Document/records.
    FileText,
    /// Building/clinics.
    Building,
    /// Bar chart/reports.
    BarChart,
    /// Magnifier/search.
    Search,
    /// Download/export.
    Download,
    /// Envelope/email.
    Mail,
    /// Tag/label.
    Tag,
    /// Trash can/delete.
    Trash,
    /// X/close.
    X,
    /// Hamburger menu.
    Menu,
    /// Stethoscope brand mark.
    Stethoscope,
    /// Arrow pointing right.
    ArrowRight,
    /// Check mark.
    Check,
}

impl Icon {
    /// Stable kebab-case name, used for `data-icon` attributes.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HelpCircle => "help-circle",
            Self::Users => "users",
            Self::Calendar => "calendar",
            Self::FileText => "file-text",
            Self::Building => "building",
            Self::BarChart => "bar-chart",
            Self::Search => "search",
            Self::Download => "download",
            Self::Mail => "mail",
            Self::Tag => "tag",
            Self::Trash => "trash",
            Self::X => "x",
            Self::Menu => "menu",
            Self::Stethoscope => "stethoscope",
            Self::ArrowRight => "arrow-right",
            Self::Check => "check",
        }
    }

    /// Inner SVG markup for a 24x24 viewBox.
    fn body(self) -> &'static str {
        match self {
            Self::HelpCircle => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#
            }
            Self::Users => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            Self::Calendar => {
                r#"<rect x="3" y="4" width="18" height="18" rx="2" ry="2"/><line x1="16" y1="2" x2="16" y2="6"/><line x1="8" y1="2" x2="8" y2="6"/><line x1="3" y1="10" x2="21" y2="10"/>"#
            }
            Self::FileText => {
                r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/><line x1="16" y1="13" x2="8" y2="13"/><line x1="16" y1="17" x2="8" y2="17"/>"#
            }
            Self::Building => {
                r#"<rect x="4" y="2" width="16" height="20" rx="2" ry="2"/><path d="M9 22v-4h6v4"/><path d="M8 6h.01"/><path d="M16 6h.01"/><path d="M8 10h.01"/><path d="M16 10h.01"/><path d="M8 14h.01"/><path d="M16 14h.01"/>"#
            }
            Self::BarChart => {
                r#"<line x1="12" y1="20" x2="12" y2="10"/><line x1="18" y1="20" x2="18" y2="4"/><line x1="6" y1="20" x2="6" y2="16"/>"#
            }
            Self::Search => r#"<circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/>"#,
            Self::Download => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" y1="15" x2="12" y2="3"/>"#
            }
            Self::Mail => {
                r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Self::Tag => {
                r#"<path d="M20.59 13.41 13.42 20.58a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z"/><line x1="7" y1="7" x2="7.01" y2="7"/>"#
            }
            Self::Trash => {
                r#"<polyline points="3 6 5 6 21 6"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>"#
            }
            Self::X => r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#,
            Self::Menu => {
                r#"<line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="18" x2="21" y2="18"/>"#
            }
            Self::Stethoscope => {
                r#"<path d="M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 6 6 6 6 0 0 0 6-6V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3"/><path d="M8 15v1a6 6 0 0 0 6 6 6 6 0 0 0 6-6v-4"/><circle cx="20" cy="10" r="2"/>"#
            }
            Self::ArrowRight => r#"<line x1="5" y1="12" x2="19" y2="12"/><polyline points="12 5 19 12 12 19"/>"#,
            Self::Check => r#"<polyline points="20 6 9 17 4 12"/>"#,
        }
    }

    /// Full `<svg>` markup. An empty `class` falls back to the common size.
    #[must_use]
    pub fn svg(self, class: &str) -> String {
        let class = if class.is_empty() { ICON_SIZE } else { class };
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{class}">{}</svg>"#,
            self.body()
        )
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inline icon glyph.
///
/// # Example
///
/// ```rust,ignore
/// view! { <IconGlyph icon=Icon::Users class="h-5 w-5 text-primary" /> }
/// ```
#[component]
pub fn IconGlyph(
    /// Which glyph to draw.
    #[prop(default = Icon::HelpCircle)]
    icon: Icon,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span
            class="inline-flex shrink-0 items-center justify-center"
            aria-hidden="true"
            data-icon=icon.name()
            inner_html=icon.svg(class)
        ></span>
    }
}
