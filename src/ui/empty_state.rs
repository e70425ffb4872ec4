//! Empty-state placeholders.
//!
//! [`EmptyState`] is the one renderer. The preconfigured variants
//! ([`EmptyPatients`], [`EmptySearch`], ...) are rows of the [`EmptyScenario`]
//! table fed through it, so copy and icons live in data rather than in
//! per-scenario markup.
//!
//! Action buttons post to `{endpoint}/{scenario}`; the server looks the
//! scenario up in a [`ScenarioHandlers`] registry and runs its handler.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use tracing::info;

use crate::error::AppError;
use crate::ui::components::{Button, ButtonVariant, Icon, IconGlyph};
use crate::ui::handler::ActionHandler;

/// Endpoint prefix empty-state action buttons post to.
pub const EMPTY_ACTION_ENDPOINT: &str = "/api/empty";

/// Density of an empty state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyStateVariant {
    /// Full-page placeholder: 80px icon tile, large heading.
    #[default]
    Default,
    /// Inline placeholder for cards and panels: 56px icon tile, medium heading.
    Compact,
}

impl EmptyStateVariant {
    /// Classes for the icon tile.
    #[must_use]
    pub fn icon_container_classes(self) -> &'static str {
        match self {
            Self::Default => "h-20 w-20 mb-6",
            Self::Compact => "h-14 w-14 mb-4",
        }
    }

    /// Classes for the glyph inside the tile.
    #[must_use]
    pub fn icon_classes(self) -> &'static str {
        match self {
            Self::Default => "h-10 w-10 text-muted-foreground",
            Self::Compact => "h-7 w-7 text-muted-foreground",
        }
    }

    /// Classes for the heading.
    #[must_use]
    pub fn title_classes(self) -> &'static str {
        match self {
            Self::Default => "text-xl font-semibold",
            Self::Compact => "text-base font-semibold",
        }
    }

    /// Outer padding.
    #[must_use]
    pub fn padding_classes(self) -> &'static str {
        match self {
            Self::Default => "py-16 px-6",
            Self::Compact => "py-8 px-4",
        }
    }
}

/// The single button an empty state may offer.
#[derive(Debug, Clone)]
pub struct EmptyAction {
    /// Button text.
    pub label: String,
    /// Run once per activation.
    pub handler: ActionHandler,
    /// Where the rendered button posts.
    pub endpoint: String,
}

impl EmptyAction {
    /// Build an action.
    pub fn new(
        label: impl Into<String>,
        handler: impl Into<ActionHandler>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            handler: handler.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Activate the action.
    pub fn activate(&self) {
        self.handler.run();
    }
}

/// Everything [`EmptyState`] needs for one render.
#[derive(Debug, Clone)]
pub struct EmptyStateConfig {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub action: Option<EmptyAction>,
    pub variant: EmptyStateVariant,
}

/// Known "nothing here yet" situations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyScenario {
    Patients,
    Appointments,
    Records,
    Clinics,
    Reports,
    Search,
}

impl EmptyScenario {
    /// Every scenario, in display order.
    pub const ALL: [Self; 6] = [
        Self::Patients,
        Self::Appointments,
        Self::Records,
        Self::Clinics,
        Self::Reports,
        Self::Search,
    ];

    /// Path segment naming the scenario.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patients => "patients",
            Self::Appointments => "appointments",
            Self::Records => "records",
            Self::Clinics => "clinics",
            Self::Reports => "reports",
            Self::Search => "search",
        }
    }

    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Patients => Icon::Users,
            Self::Appointments => Icon::Calendar,
            Self::Records => Icon::FileText,
            Self::Clinics => Icon::Building,
            Self::Reports => Icon::BarChart,
            Self::Search => Icon::Search,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Patients => "No patients yet",
            Self::Appointments => "No appointments scheduled",
            Self::Records => "No medical records",
            Self::Clinics => "No clinics found",
            Self::Reports => "No reports available",
            Self::Search => "No results found",
        }
    }

    /// Fixed description. Search interpolates its query instead, see
    /// [`search_description`].
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Patients => "Get started by adding your first patient to the system.",
            Self::Appointments => "Schedule your first appointment to get started.",
            Self::Records => "Medical records will appear here once created.",
            Self::Clinics => "Add your first clinic location to start managing.",
            Self::Reports => "Reports will be generated as you use the system.",
            Self::Search => "Try adjusting your search terms.",
        }
    }

    /// Label of the corrective action, if the scenario has one.
    ///
    /// Reports are generated, never added by hand; search has nothing to add.
    #[must_use]
    pub fn action_label(self) -> Option<&'static str> {
        match self {
            Self::Patients => Some("Add Patient"),
            Self::Appointments => Some("Schedule Appointment"),
            Self::Records => Some("Create Record"),
            Self::Clinics => Some("Add Clinic"),
            Self::Reports | Self::Search => None,
        }
    }

    /// Resolve the scenario into a render config whose action posts under
    /// `endpoint`.
    ///
    /// `on_action` is ignored for scenarios without an action.
    #[must_use]
    pub fn config(self, on_action: Option<ActionHandler>, endpoint: &str) -> EmptyStateConfig {
        let action = self.action_label().zip(on_action).map(|(label, handler)| {
            EmptyAction::new(label, handler, format!("{endpoint}/{}", self.as_str()))
        });

        EmptyStateConfig {
            icon: self.icon(),
            title: self.title().to_string(),
            description: self.description().to_string(),
            action,
            variant: EmptyStateVariant::Default,
        }
    }
}

impl fmt::Display for EmptyScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptyScenario {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| AppError::UnknownScenario(s.to_string()))
    }
}

/// Handlers behind the empty-state action buttons, keyed by scenario.
#[derive(Debug, Clone, Default)]
pub struct ScenarioHandlers(HashMap<EmptyScenario, ActionHandler>);

impl ScenarioHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `scenario`, replacing any earlier one.
    #[must_use]
    pub fn with(mut self, scenario: EmptyScenario, handler: impl Into<ActionHandler>) -> Self {
        self.0.insert(scenario, handler.into());
        self
    }

    #[must_use]
    pub fn get(&self, scenario: EmptyScenario) -> Option<ActionHandler> {
        self.0.get(&scenario).cloned()
    }

    /// Run the action `scenario` renders, once.
    ///
    /// Fails when the scenario has no action button or no handler is
    /// registered, i.e. whenever the rendered state would show no button.
    pub fn activate(&self, scenario: EmptyScenario) -> Result<(), AppError> {
        let action = scenario
            .config(self.get(scenario), EMPTY_ACTION_ENDPOINT)
            .action
            .ok_or(AppError::NoEmptyAction(scenario))?;

        info!(
            name: "empty.action.activated",
            scenario = %scenario,
            label = %action.label,
            "Empty-state action activated"
        );
        action.activate();
        Ok(())
    }
}

/// Description shown for a search with no hits.
///
/// The query is kept verbatim; escaping happens when it is rendered as text.
#[must_use]
pub fn search_description(query: &str) -> String {
    format!(
        "No results found for \"{query}\". {}",
        EmptyScenario::Search.description()
    )
}

/// Centered placeholder shown when a collection has no items.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <EmptyState
///         title="No invoices"
///         description="Invoices appear once a visit is billed."
///         variant=EmptyStateVariant::Compact
///     />
/// }
/// ```
#[component]
pub fn EmptyState(
    /// Heading.
    #[prop(into)]
    title: String,
    /// Explanatory line, rendered as plain text.
    #[prop(into)]
    description: String,
    /// Glyph in the icon tile.
    #[prop(default = Icon::HelpCircle)]
    icon: Icon,
    /// Optional corrective action. No action, no button.
    #[prop(optional_no_strip)]
    action: Option<EmptyAction>,
    /// Size scale.
    #[prop(optional)]
    variant: EmptyStateVariant,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!(
        "flex flex-col items-center justify-center text-center {} {}",
        variant.padding_classes(),
        class
    );
    let tile = format!(
        "flex items-center justify-center rounded-2xl bg-muted {}",
        variant.icon_container_classes()
    );
    let heading = format!("{} text-foreground mb-2", variant.title_classes());

    view! {
        <div class=classes role="status" data-empty-state="">
            <div class=tile>
                <IconGlyph icon=icon class=variant.icon_classes() />
            </div>
            <h3 class=heading>{title}</h3>
            <p class="max-w-sm text-sm text-muted-foreground mb-6">{description}</p>
            {action.map(|action| {
                view! {
                    <Button variant=ButtonVariant::Primary hx_post=action.endpoint>
                        {action.label}
                    </Button>
                }
            })}
        </div>
    }
}

/// Renders one row of the scenario table.
#[component]
pub fn ScenarioEmptyState(
    scenario: EmptyScenario,
    #[prop(optional_no_strip)] on_action: Option<ActionHandler>,
    #[prop(optional)] variant: EmptyStateVariant,
    #[prop(default = EMPTY_ACTION_ENDPOINT)] endpoint: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let config = scenario.config(on_action, endpoint);

    view! {
        <EmptyState
            title=config.title
            description=config.description
            icon=config.icon
            action=config.action
            variant=variant
            class=class
        />
    }
}

/// No patients in the directory.
#[component]
pub fn EmptyPatients(#[prop(into)] on_add: ActionHandler) -> impl IntoView {
    view! { <ScenarioEmptyState scenario=EmptyScenario::Patients on_action=Some(on_add) /> }
}

/// No appointments on the calendar.
#[component]
pub fn EmptyAppointments(#[prop(into)] on_add: ActionHandler) -> impl IntoView {
    view! { <ScenarioEmptyState scenario=EmptyScenario::Appointments on_action=Some(on_add) /> }
}

/// No medical records for the current filter.
#[component]
pub fn EmptyRecords(#[prop(into)] on_add: ActionHandler) -> impl IntoView {
    view! { <ScenarioEmptyState scenario=EmptyScenario::Records on_action=Some(on_add) /> }
}

/// No clinic locations configured.
#[component]
pub fn EmptyClinics(#[prop(into)] on_add: ActionHandler) -> impl IntoView {
    view! { <ScenarioEmptyState scenario=EmptyScenario::Clinics on_action=Some(on_add) /> }
}

/// Reports are generated by usage; nothing to add manually.
#[component]
pub fn EmptyReports() -> impl IntoView {
    view! { <ScenarioEmptyState scenario=EmptyScenario::Reports /> }
}

/// A search that matched nothing.
#[component]
pub fn EmptySearch(
    /// The user's query, shown verbatim.
    #[prop(into)]
    query: String,
) -> impl IntoView {
    let scenario = EmptyScenario::Search;

    view! {
        <EmptyState
            title=scenario.title()
            description=search_description(&query)
            icon=scenario.icon()
        />
    }
}
