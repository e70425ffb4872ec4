//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary call to action.
    #[default]
    Primary,
    /// Muted action on a panel background.
    Secondary,
    /// Borderless action, used inside toolbars.
    Ghost,
    /// Destructive action (delete).
    Destructive,
    /// Outline button, used for secondary CTAs.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white hover:bg-primary/90",
            Self::Secondary => "bg-muted text-foreground hover:bg-muted/80",
            Self::Ghost => "bg-transparent text-foreground hover:bg-muted",
            Self::Destructive => "bg-destructive text-white hover:bg-destructive/90",
            Self::Outline => "bg-transparent border border-border text-foreground hover:bg-muted",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button, used in the bulk actions toolbar.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large button, used by hero CTAs.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 gap-1.5 px-3 text-xs",
            Self::Md => "h-10 gap-2 px-4 text-sm",
            Self::Lg => "h-12 gap-2 px-6 text-base",
            Self::Icon => "h-8 w-8",
        }
    }
}

/// Full class list for a button, shared by [`Button`] and raw `<button>`
/// elements that need extra attributes (HTMX, ARIA).
#[must_use]
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    let base = "inline-flex items-center justify-center rounded-lg font-medium \
                transition-colors focus-visible:outline-none focus-visible:ring-2 \
                focus-visible:ring-primary focus-visible:ring-offset-2 \
                disabled:pointer-events-none disabled:opacity-50";

    format!("{} {} {} {}", base, variant.classes(), size.classes(), class)
}

/// ShadCN-style button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary hx_post="/api/empty/patients">
///         "Add Patient"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Endpoint posted to on click.
    #[prop(optional, into)]
    hx_post: Option<String>,
    /// HTMX swap strategy for the response.
    #[prop(default = "none")]
    hx_swap: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, class);
    let swap = hx_post.as_ref().map(|_| hx_swap);

    view! {
        <button
            type=button_type
            class=classes
            disabled=disabled
            hx-post=hx_post
            hx-swap=swap
        >
            {children()}
        </button>
    }
}
