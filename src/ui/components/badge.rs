//! Badge component for counts and short labels.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Filled primary badge.
    #[default]
    Default,
    /// Outline badge, used for marketing eyebrows.
    Outline,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-white",
            Self::Outline => "border border-border bg-transparent text-muted-foreground",
        }
    }
}

/// Badge component.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Badge variant=BadgeVariant::Outline>"Trusted by 500+ clinics"</Badge> }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {} {}",
        variant.classes(),
        class
    );

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
