//! Separator line.

use leptos::prelude::*;

/// Separator orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeparatorOrientation {
    /// Full-width rule.
    #[default]
    Horizontal,
    /// Short vertical divider between toolbar groups.
    Vertical,
}

/// Visual separator.
#[component]
pub fn Separator(
    /// Separator orientation.
    #[prop(default = SeparatorOrientation::Horizontal)]
    orientation: SeparatorOrientation,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let (sized, aria) = match orientation {
        SeparatorOrientation::Horizontal => ("h-px w-full", "horizontal"),
        SeparatorOrientation::Vertical => ("h-6 w-px", "vertical"),
    };

    let classes = format!("shrink-0 bg-border {sized} {class}");

    view! {
        <div role="separator" aria-orientation=aria class=classes />
    }
}
