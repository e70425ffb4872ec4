//! Site footer.

use leptos::prelude::*;

use crate::ui::components::{Icon, IconGlyph, Separator};

const COLUMNS: [(&str, [(&str, &str); 3]); 3] = [
    (
        "Product",
        [
            ("Features", "#features"),
            ("Pricing", "#pricing"),
            ("Dashboard", "/dashboard"),
        ],
    ),
    (
        "Account",
        [
            ("Log in", "/login"),
            ("Register", "/register"),
            ("Home", "/"),
        ],
    ),
    (
        "Contact",
        [
            ("Support", "mailto:support@example.com"),
            ("Sales", "mailto:sales@example.com"),
            ("Status", "/health"),
        ],
    ),
];

/// Footer with link columns and copyright line.
#[component]
pub fn Footer(
    /// Product name.
    #[prop(into)]
    brand: String,
    /// Copyright year.
    year: i32,
) -> impl IntoView {
    let copyright = format!("© {year} {brand}. All rights reserved.");

    view! {
        <footer id="contact" class="border-t border-border bg-muted/30">
            <div class="container mx-auto max-w-6xl px-4 py-12">
                <div class="grid gap-8 md:grid-cols-4">
                    <div class="space-y-3">
                        <a href="/" class="flex items-center gap-2 font-semibold">
                            <IconGlyph icon=Icon::Stethoscope class="h-5 w-5 text-primary" />
                            <span>{brand}</span>
                        </a>
                        <p class="text-sm text-muted-foreground">
                            "Clinic management for teams that would rather be seeing patients."
                        </p>
                    </div>
                    {COLUMNS
                        .into_iter()
                        .map(|(heading, links)| {
                            view! {
                                <div class="space-y-3">
                                    <h4 class="text-sm font-semibold">{heading}</h4>
                                    <ul class="space-y-2">
                                        {links
                                            .into_iter()
                                            .map(|(label, href)| {
                                                view! {
                                                    <li>
                                                        <a href=href class="text-sm text-muted-foreground hover:text-foreground">
                                                            {label}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <Separator class="my-8" />
                <p class="text-xs text-muted-foreground text-center">{copyright}</p>
            </div>
        </footer>
    }
}
