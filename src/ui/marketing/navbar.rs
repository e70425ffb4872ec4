//! Site navigation bar with a collapsible mobile menu.

use std::fmt;

use leptos::prelude::*;
use serde::Deserialize;

use crate::ui::components::{ButtonSize, ButtonVariant, Icon, IconGlyph, button_classes};

/// DOM id of the navbar, the swap target of the menu toggle.
pub const NAVBAR_ID: &str = "site-nav";

/// Endpoint that re-renders the navbar in a given menu state.
pub const NAVBAR_PARTIAL: &str = "/partials/navbar";

/// Mobile menu state. The only state on the marketing pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// The one transition.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-page anchors shown in the navbar.
const NAV_LINKS: [(&str, &str); 3] = [
    ("Features", "#features"),
    ("Pricing", "#pricing"),
    ("Contact", "#contact"),
];

/// Top navigation bar.
///
/// The hamburger button asks the server for the navbar in the toggled state
/// and swaps it in place.
#[component]
pub fn Navbar(
    /// Product name next to the logo.
    #[prop(into)]
    brand: String,
    /// Mobile menu state for this render.
    #[prop(optional)]
    menu: MenuState,
) -> impl IntoView {
    let toggle_url = format!("{NAVBAR_PARTIAL}?menu={}", menu.toggle());
    let toggle_icon = if menu.is_open() { Icon::X } else { Icon::Menu };
    let toggle_label = if menu.is_open() { "Close menu" } else { "Open menu" };
    let login = button_classes(ButtonVariant::Ghost, ButtonSize::Md, "");
    let register = button_classes(ButtonVariant::Primary, ButtonSize::Md, "");

    view! {
        <header
            id=NAVBAR_ID
            class="sticky top-0 z-50 w-full border-b border-border bg-background/95 backdrop-blur"
            data-menu=menu.as_str()
        >
            <nav class="container mx-auto flex h-16 items-center justify-between px-4 max-w-6xl">
                <a href="/" class="flex items-center gap-2 font-semibold">
                    <IconGlyph icon=Icon::Stethoscope class="h-6 w-6 text-primary" />
                    <span class="text-lg">{brand}</span>
                </a>

                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=href class="text-sm text-muted-foreground hover:text-foreground transition-colors">
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="hidden md:flex items-center gap-3">
                    <a href="/login" class=login.clone()>"Log in"</a>
                    <a href="/register" class=register.clone()>"Get Started"</a>
                </div>

                <button
                    type="button"
                    class="md:hidden inline-flex h-10 w-10 items-center justify-center rounded-lg hover:bg-muted"
                    aria-label=toggle_label
                    aria-expanded=menu.is_open().to_string()
                    hx-get=toggle_url
                    hx-target=format!("#{NAVBAR_ID}")
                    hx-swap="outerHTML"
                >
                    <IconGlyph icon=toggle_icon class="h-5 w-5" />
                </button>
            </nav>

            {menu.is_open().then(|| view! {
                <div class="md:hidden border-t border-border px-4 py-4 space-y-3" data-mobile-menu="">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| {
                            view! { <a href=href class="block text-sm text-muted-foreground">{label}</a> }
                        })
                        .collect_view()}
                    <div class="flex flex-col gap-2 pt-2">
                        <a href="/login" class=login>"Log in"</a>
                        <a href="/register" class=register>"Get Started"</a>
                    </div>
                </div>
            })}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_to_string;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert_eq!(MenuState::Closed.toggle(), MenuState::Open);
        assert_eq!(MenuState::Open.toggle().toggle(), MenuState::Open);
    }

    #[test]
    fn test_menu_state_from_query_value() {
        let open: MenuState = serde_json::from_str(r#""open""#).unwrap();
        assert_eq!(open, MenuState::Open);
        assert!(serde_json::from_str::<MenuState>(r#""ajar""#).is_err());
    }

    #[test]
    fn test_closed_navbar_hides_mobile_menu() {
        let html = render_to_string(|| view! { <Navbar brand="MediFlow" /> });
        assert!(html.contains("MediFlow"));
        assert!(!html.contains("data-mobile-menu"));
        assert!(html.contains(r#"hx-get="/partials/navbar?menu=open""#));
    }

    #[test]
    fn test_open_navbar_shows_mobile_menu() {
        let html = render_to_string(|| view! { <Navbar brand="MediFlow" menu=MenuState::Open /> });
        assert!(html.contains("data-mobile-menu"));
        assert!(html.contains(r#"hx-get="/partials/navbar?menu=closed""#));
        assert!(html.contains(r#"aria-expanded="true""#));
    }
}
