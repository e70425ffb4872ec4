//! Full pages and HTMX fragments.

use leptos::prelude::*;

use crate::ui::bulk_actions::{BULK_BAR_ID, BulkActionSet, BulkActionsBar};
use crate::ui::components::{Card, CardContent};
use crate::ui::empty_state::{
    EmptyReports, EmptyScenario, EmptyStateVariant, ScenarioEmptyState, ScenarioHandlers,
};
use crate::ui::marketing::{CtaSection, Footer, Hero, MenuState, Navbar};
use crate::ui::skeleton::DashboardSkeleton;

/// HTML document wrapper shared by every page.
#[component]
fn Document(
    /// Text of the `<title>` element.
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Clinic management for modern practices"/>
                <title>{title}</title>

                // Local scripts only (no CDN)
                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <script type="module" src="/static/main.js"></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>
            <body class="min-h-screen bg-background text-foreground antialiased">
                {children()}
                // Toasts from HX-Trigger headers are rendered here by main.js
                <div id="toasts" class="fixed bottom-4 right-4 z-[60] space-y-2" aria-live="polite"></div>
            </body>
        </html>
    }
}

/// Public landing page.
#[component]
pub fn LandingPage(
    #[prop(into)] brand: String,
    year: i32,
) -> impl IntoView {
    let title = format!("{brand} - Clinic management software");

    view! {
        <Document title=title>
            <Navbar brand=brand.clone() menu=MenuState::Closed />
            <main>
                <Hero />
                <CtaSection />
            </main>
            <Footer brand=brand year=year />
        </Document>
    }
}

/// Dashboard shell.
///
/// Shows the dashboard skeleton until `/partials/dashboard` arrives, and the
/// bulk bar for `selected` items.
#[component]
pub fn DashboardPage(
    #[prop(into)] brand: String,
    selected: usize,
    actions: BulkActionSet,
) -> impl IntoView {
    let title = format!("Dashboard - {brand}");

    view! {
        <Document title=title>
            <Navbar brand=brand menu=MenuState::Closed />
            <main class="container mx-auto max-w-6xl px-4 py-8">
                <div hx-get="/partials/dashboard" hx-trigger="load" hx-swap="outerHTML">
                    <DashboardSkeleton />
                </div>
            </main>
            <div id=BULK_BAR_ID>
                <BulkActionsBar selected_count=selected actions=actions />
            </div>
        </Document>
    }
}

/// Dashboard body. This crate has no data source, so every panel shows its
/// empty state. Panels whose scenario has no registered handler show no
/// button.
#[component]
pub fn DashboardContent(handlers: ScenarioHandlers) -> impl IntoView {
    let on_schedule = handlers.get(EmptyScenario::Appointments);
    let on_add_clinic = handlers.get(EmptyScenario::Clinics);
    let on_add_patient = handlers.get(EmptyScenario::Patients);

    view! {
        <div class="space-y-8" id="dashboard-content">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-muted-foreground">"Today at a glance."</p>
            </div>
            <div class="grid gap-6 lg:grid-cols-3">
                <Card class="lg:col-span-2">
                    <CardContent>
                        <ScenarioEmptyState
                            scenario=EmptyScenario::Appointments
                            on_action=on_schedule
                        />
                    </CardContent>
                </Card>
                <Card>
                    <CardContent>
                        <ScenarioEmptyState
                            scenario=EmptyScenario::Clinics
                            on_action=on_add_clinic
                            variant=EmptyStateVariant::Compact
                        />
                    </CardContent>
                </Card>
            </div>
            <div class="grid gap-6 lg:grid-cols-2">
                <Card>
                    <CardContent>
                        <ScenarioEmptyState
                            scenario=EmptyScenario::Patients
                            on_action=on_add_patient
                        />
                    </CardContent>
                </Card>
                <Card>
                    <CardContent>
                        <EmptyReports />
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
