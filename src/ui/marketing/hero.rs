//! Hero and call-to-action sections of the landing page.

use leptos::prelude::*;

use crate::ui::components::{
    Badge, BadgeVariant, ButtonSize, ButtonVariant, Card, CardContent, Icon, IconGlyph,
    button_classes,
};

/// Decorative dot grid behind the CTA block.
const CTA_PATTERN: &str = r#"<svg class="absolute inset-0 h-full w-full opacity-10" xmlns="http://www.w3.org/2000/svg" aria-hidden="true"><defs><pattern id="cta-dots" width="24" height="24" patternUnits="userSpaceOnUse"><circle cx="2" cy="2" r="1.5" fill="currentColor"/></pattern></defs><rect width="100%" height="100%" fill="url(#cta-dots)"/></svg>"#;

/// Feature tiles under the hero.
const FEATURES: [(Icon, &str, &str); 4] = [
    (
        Icon::Users,
        "Patient records",
        "Keep histories, documents and contact details in one place.",
    ),
    (
        Icon::Calendar,
        "Smart scheduling",
        "Book, reschedule and remind without the phone tag.",
    ),
    (
        Icon::Building,
        "Multi-clinic",
        "Run every location from a single dashboard.",
    ),
    (
        Icon::BarChart,
        "Reports",
        "See revenue, utilisation and no-show trends at a glance.",
    ),
];

/// Landing-page hero with headline and primary CTAs.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="container mx-auto max-w-6xl px-4 py-20 text-center md:py-28">
            <Badge variant=BadgeVariant::Outline class="mb-6">"Built for modern clinics"</Badge>
            <h1 class="mx-auto max-w-3xl text-4xl font-bold tracking-tight md:text-6xl">
                "Run your clinic, not your paperwork"
            </h1>
            <p class="mx-auto mt-6 max-w-2xl text-lg text-muted-foreground">
                "Scheduling, patient records and reporting in one calm workspace for your whole team."
            </p>
            <div class="mt-10 flex flex-col items-center justify-center gap-3 sm:flex-row">
                <a href="/register" class=button_classes(ButtonVariant::Primary, ButtonSize::Lg, "")>
                    "Start free trial"
                    <IconGlyph icon=Icon::ArrowRight />
                </a>
                <a href="/login" class=button_classes(ButtonVariant::Outline, ButtonSize::Lg, "")>
                    "Sign in"
                </a>
            </div>
        </section>

        <section id="features" class="container mx-auto max-w-6xl px-4 pb-20">
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, description)| {
                        view! {
                            <Card>
                                <CardContent class="space-y-3">
                                    <div class="flex h-10 w-10 items-center justify-center rounded-lg bg-primary/10">
                                        <IconGlyph icon=icon class="h-5 w-5 text-primary" />
                                    </div>
                                    <h3 class="font-semibold">{title}</h3>
                                    <p class="text-sm text-muted-foreground">{description}</p>
                                </CardContent>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Closing call to action above the footer.
#[component]
pub fn CtaSection() -> impl IntoView {
    let perks = ["14-day free trial", "No credit card required", "Cancel anytime"];

    view! {
        <section id="pricing" class="container mx-auto max-w-6xl px-4 pb-24">
            <div class="relative overflow-hidden rounded-3xl bg-primary px-6 py-16 text-center text-white md:px-16">
                <div inner_html=CTA_PATTERN></div>
                <div class="relative">
                    <h2 class="text-3xl font-bold md:text-4xl">"Ready to modernize your practice?"</h2>
                    <p class="mx-auto mt-4 max-w-xl text-white/80">
                        "Join the clinics that spend less time on admin and more time with patients."
                    </p>
                    <div class="mt-8 flex flex-col items-center justify-center gap-3 sm:flex-row">
                        <a href="/register" class=button_classes(ButtonVariant::Secondary, ButtonSize::Lg, "")>
                            "Get started now"
                        </a>
                        <a href="/login" class=button_classes(ButtonVariant::Ghost, ButtonSize::Lg, "text-white hover:bg-white/10")>
                            "I already have an account"
                        </a>
                    </div>
                    <ul class="mt-8 flex flex-wrap items-center justify-center gap-6 text-sm text-white/80">
                        {perks
                            .into_iter()
                            .map(|perk| {
                                view! {
                                    <li class="flex items-center gap-2">
                                        <IconGlyph icon=Icon::Check />
                                        {perk}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_to_string;

    #[test]
    fn test_hero_links_to_auth_routes() {
        let html = render_to_string(|| view! { <Hero /> });
        assert!(html.contains(r#"href="/register""#));
        assert!(html.contains(r#"href="/login""#));
        assert_eq!(html.matches(r#"data-icon="users""#).count(), 1);
    }

    #[test]
    fn test_cta_lists_perks() {
        let html = render_to_string(|| view! { <CtaSection /> });
        assert!(html.contains("No credit card required"));
        assert!(html.contains("cta-dots"));
    }
}
