//! Loading skeletons.
//!
//! Each skeleton mirrors the layout of the content it stands in for. Repeated
//! parts are described first as a fixed-length sequence of placeholder
//! descriptors and then mapped to markup, so the shape can be checked without
//! rendering. Every descriptor list is rebuilt on each render.

use std::time::Duration;

use leptos::prelude::*;

use crate::ui::components::{Card, CardContent};

/// Delay added per table row so rows fade in one after another.
pub const ROW_STAGGER: Duration = Duration::from_millis(50);

/// Stat cards on the dashboard placeholder.
pub const DASHBOARD_STAT_CARDS: usize = 4;
/// Appointment rows on the dashboard placeholder.
pub const DASHBOARD_APPOINTMENTS: usize = 4;
/// Patient cards on the dashboard placeholder.
pub const DASHBOARD_PATIENT_CARDS: usize = 3;

/// Columns that are not text pairs: the checkbox and the trailing action.
const FIXED_TABLE_COLUMNS: usize = 2;

/// Base classes of a single pulsing block.
const BLOCK: &str = "animate-pulse rounded-md bg-muted";

/// Shape of a [`TableSkeleton`].
///
/// Callers should pass `columns >= 2`; anything lower yields zero text
/// columns rather than a negative count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    pub rows: usize,
    pub columns: usize,
}

impl Default for TableShape {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 5,
        }
    }
}

impl TableShape {
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Text-pair columns between the checkbox and the action block.
    #[must_use]
    pub fn content_columns(self) -> usize {
        self.columns.saturating_sub(FIXED_TABLE_COLUMNS)
    }

    /// One descriptor per data row.
    #[must_use]
    pub fn row_placeholders(self) -> Vec<RowPlaceholder> {
        (0..self.rows)
            .map(|index| RowPlaceholder {
                index,
                delay: stagger_delay(index),
                content_columns: self.content_columns(),
            })
            .collect()
    }
}

/// One table row placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPlaceholder {
    pub index: usize,
    /// Animation delay; visual only.
    pub delay: Duration,
    pub content_columns: usize,
}

/// Linear stagger: row 0 starts immediately.
#[must_use]
pub fn stagger_delay(index: usize) -> Duration {
    ROW_STAGGER * u32::try_from(index).unwrap_or(u32::MAX)
}

/// Counts of the repeated blocks in [`DashboardSkeleton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub stat_cards: usize,
    pub appointments: usize,
    pub patient_cards: usize,
}

impl DashboardLayout {
    /// The fixed dashboard arrangement.
    pub const FIXED: Self = Self {
        stat_cards: DASHBOARD_STAT_CARDS,
        appointments: DASHBOARD_APPOINTMENTS,
        patient_cards: DASHBOARD_PATIENT_CARDS,
    };

    /// Total repeated placeholder blocks.
    #[must_use]
    pub fn placeholder_count(self) -> usize {
        self.stat_cards + self.appointments + self.patient_cards
    }
}

fn block(extra: &str) -> String {
    format!("{BLOCK} {extra}")
}

/// Table placeholder: header row plus staggered data rows.
#[component]
pub fn TableSkeleton(
    /// Number of data rows; zero renders only the header.
    #[prop(default = 5)]
    rows: usize,
    /// Total columns including checkbox and action; should be at least 2.
    #[prop(default = 5)]
    columns: usize,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let shape = TableShape::new(rows, columns);
    let classes = format!("w-full overflow-hidden rounded-xl border border-border {class}");

    view! {
        <div class=classes role="status" aria-label="Loading table" data-skeleton="table">
            <div class="flex items-center gap-4 border-b border-border bg-muted/40 px-4 py-3">
                {(0..shape.columns)
                    .map(|_| {
                        view! { <div class=block("h-4 flex-1") data-skeleton="header-cell"></div> }
                    })
                    .collect_view()}
            </div>
            {shape
                .row_placeholders()
                .into_iter()
                .map(|row| view! { <TableRowSkeleton row=row /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn TableRowSkeleton(row: RowPlaceholder) -> impl IntoView {
    let style = format!("animation-delay: {}ms", row.delay.as_millis());

    view! {
        <div
            class="flex items-center gap-4 border-b border-border px-4 py-4 last:border-0"
            style=style
            data-skeleton="table-row"
        >
            <div class=block("h-4 w-4 rounded") data-skeleton="checkbox"></div>
            <div class=block("h-10 w-10 rounded-full") data-skeleton="avatar"></div>
            {(0..row.content_columns)
                .map(|_| {
                    view! {
                        <div class="flex flex-1 flex-col gap-2" data-skeleton="text-pair">
                            <div class=block("h-4 w-3/4")></div>
                            <div class=block("h-3 w-1/2")></div>
                        </div>
                    }
                })
                .collect_view()}
            <div class=block("h-8 w-8") data-skeleton="action"></div>
        </div>
    }
}

/// Placeholder for a dashboard stat card.
#[component]
pub fn StatCardSkeleton() -> impl IntoView {
    view! {
        <Card>
            <CardContent>
                <div data-skeleton="stat-card" class="space-y-3">
                    <div class="flex items-center justify-between">
                        <div class=block("h-4 w-24")></div>
                        <div class=block("h-10 w-10 rounded-lg")></div>
                    </div>
                    <div class=block("h-8 w-20")></div>
                    <div class=block("h-3 w-32")></div>
                </div>
            </CardContent>
        </Card>
    }
}

/// Placeholder for a patient card: avatar, name, contact lines and tags.
#[component]
pub fn PatientCardSkeleton() -> impl IntoView {
    view! {
        <Card>
            <CardContent>
                <div data-skeleton="patient-card" class="space-y-4">
                    <div class="flex items-center gap-3">
                        <div class=block("h-12 w-12 rounded-full")></div>
                        <div class="flex-1 space-y-2">
                            <div class=block("h-4 w-32")></div>
                            <div class=block("h-3 w-24")></div>
                        </div>
                    </div>
                    <div class="space-y-2">
                        <div class=block("h-3 w-full")></div>
                        <div class=block("h-3 w-2/3")></div>
                    </div>
                    <div class="flex gap-2">
                        <div class=block("h-6 w-16 rounded-full")></div>
                        <div class=block("h-6 w-20 rounded-full")></div>
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}

/// Placeholder for one appointment row: time tile, patient, status pill.
#[component]
pub fn AppointmentSkeleton() -> impl IntoView {
    view! {
        <div
            class="flex items-center gap-4 rounded-lg border border-border p-4"
            data-skeleton="appointment"
        >
            <div class=block("h-12 w-12 rounded-lg")></div>
            <div class="flex-1 space-y-2">
                <div class=block("h-4 w-40")></div>
                <div class=block("h-3 w-28")></div>
            </div>
            <div class=block("h-6 w-20 rounded-full")></div>
        </div>
    }
}

/// Placeholder for a page title, subtitle and primary button.
#[component]
pub fn PageHeaderSkeleton() -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-8" data-skeleton="page-header">
            <div class="space-y-2">
                <div class=block("h-8 w-48")></div>
                <div class=block("h-4 w-72")></div>
            </div>
            <div class=block("h-10 w-32 rounded-lg")></div>
        </div>
    }
}

/// Placeholder for the quick-view side panel.
#[component]
pub fn QuickViewSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-6 p-6" data-skeleton="quick-view">
            <div class="flex items-center gap-4">
                <div class=block("h-16 w-16 rounded-full")></div>
                <div class="flex-1 space-y-2">
                    <div class=block("h-5 w-40")></div>
                    <div class=block("h-4 w-28")></div>
                </div>
            </div>
            <div class="grid grid-cols-2 gap-4">
                {(0..4)
                    .map(|_| {
                        view! {
                            <div class="space-y-2">
                                <div class=block("h-3 w-16")></div>
                                <div class=block("h-4 w-24")></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="space-y-3">
                <div class=block("h-4 w-32")></div>
                <div class=block("h-20 w-full")></div>
            </div>
        </div>
    }
}

/// Single block with a looping sweep highlight (`animate-shimmer` in CSS).
#[component]
pub fn ShimmerLoader(
    /// Size and shape classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("relative overflow-hidden rounded-md bg-muted {class}");

    view! {
        <div class=classes aria-hidden="true" data-skeleton="shimmer">
            <div class="absolute inset-0 -translate-x-full animate-shimmer bg-gradient-to-r from-transparent via-white/40 to-transparent"></div>
        </div>
    }
}

/// Whole-dashboard placeholder. Takes no parameters.
#[component]
pub fn DashboardSkeleton() -> impl IntoView {
    let layout = DashboardLayout::FIXED;

    view! {
        <div class="space-y-8" role="status" aria-label="Loading dashboard" data-skeleton="dashboard">
            <PageHeaderSkeleton />
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                {(0..layout.stat_cards).map(|_| view! { <StatCardSkeleton /> }).collect_view()}
            </div>
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="space-y-3 lg:col-span-2">
                    {(0..layout.appointments).map(|_| view! { <AppointmentSkeleton /> }).collect_view()}
                </div>
                <div class="space-y-4">
                    {(0..layout.patient_cards).map(|_| view! { <PatientCardSkeleton /> }).collect_view()}
                </div>
            </div>
        </div>
    }
}
