//! Card container used by skeleton cards and marketing feature tiles.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card>
///         <CardContent>
///             <p>"Online booking"</p>
///         </CardContent>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!("rounded-xl border border-border bg-card shadow-sm {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Padded card body.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
