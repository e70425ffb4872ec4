//! Floating toolbar for actions on a multi-row selection.
//!
//! The bar is fully controlled: the caller owns the selection count and the
//! handlers. Which buttons appear is decided by [`ActionCapabilities`], derived
//! from the handlers actually supplied, so the visible-control contract can be
//! checked without rendering anything.
//!
//! Controls post to `{endpoint}/{action}` via HTMX. The page owns a wrapper
//! element with id [`BULK_BAR_ID`]; responses replace its contents, so an
//! empty response removes the bar.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::notify::{Notifier, ToastOptions};
use crate::ui::components::{
    Badge, BadgeVariant, ButtonSize, ButtonVariant, Icon, IconGlyph, Separator,
    SeparatorOrientation, button_classes,
};
use crate::ui::handler::ActionHandler;

/// DOM id of the page-owned wrapper the bar is swapped into.
pub const BULK_BAR_ID: &str = "bulk-actions";

/// Default endpoint prefix the controls post to.
pub const BULK_ENDPOINT: &str = "/api/bulk";

/// Fixed description attached to the export toast.
pub const EXPORT_DESCRIPTION: &str = "Your export will be ready shortly.";

/// An operation on the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Export,
    Email,
    Tag,
    Delete,
    Clear,
}

impl BulkAction {
    /// Display order in the toolbar. Clear always comes last.
    pub const ALL: [Self; 5] = [
        Self::Export,
        Self::Email,
        Self::Tag,
        Self::Delete,
        Self::Clear,
    ];

    /// Path segment and `data-bulk-action` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Email => "email",
            Self::Tag => "tag",
            Self::Delete => "delete",
            Self::Clear => "clear",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Export => "Export",
            Self::Email => "Email",
            Self::Tag => "Tag",
            Self::Delete => "Delete",
            Self::Clear => "Clear selection",
        }
    }

    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Export => Icon::Download,
            Self::Email => Icon::Mail,
            Self::Tag => Icon::Tag,
            Self::Delete => Icon::Trash,
            Self::Clear => Icon::X,
        }
    }

    fn variant(self) -> ButtonVariant {
        match self {
            Self::Delete => ButtonVariant::Destructive,
            _ => ButtonVariant::Ghost,
        }
    }

    /// Toast raised after this action, if the bar raises one at all.
    ///
    /// Delete and Clear leave feedback to the caller.
    #[must_use]
    pub fn notification(self, count: usize) -> Option<(String, ToastOptions)> {
        match self {
            Self::Export => Some((
                format!("Exporting {count} records"),
                ToastOptions::with_description(EXPORT_DESCRIPTION),
            )),
            Self::Email => Some((
                format!("Email sent to {count} recipients"),
                ToastOptions::default(),
            )),
            Self::Tag => Some((
                format!("Tags applied to {count} records"),
                ToastOptions::default(),
            )),
            Self::Delete | Self::Clear => None,
        }
    }

    /// Whether activating clears the selection on the caller's side.
    #[must_use]
    pub fn resets_selection(self) -> bool {
        matches!(self, Self::Delete | Self::Clear)
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BulkAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| AppError::UnknownAction(s.to_string()))
    }
}

/// Set of actions whose handlers were supplied. Clear is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionCapabilities(u8);

impl ActionCapabilities {
    fn bit(action: BulkAction) -> u8 {
        match action {
            BulkAction::Export => 1,
            BulkAction::Email => 1 << 1,
            BulkAction::Tag => 1 << 2,
            BulkAction::Delete => 1 << 3,
            BulkAction::Clear => 1 << 4,
        }
    }

    /// Only the mandatory Clear action.
    #[must_use]
    pub fn clear_only() -> Self {
        Self(Self::bit(BulkAction::Clear))
    }

    #[must_use]
    pub fn with(self, action: BulkAction) -> Self {
        Self(self.0 | Self::bit(action))
    }

    #[must_use]
    pub fn contains(self, action: BulkAction) -> bool {
        self.0 & Self::bit(action) != 0
    }

    /// Controls to render, in toolbar order.
    #[must_use]
    pub fn controls(self) -> Vec<BulkAction> {
        BulkAction::ALL
            .into_iter()
            .filter(|action| self.contains(*action))
            .collect()
    }
}

/// Handlers supplied by the caller. Only `on_clear` is required.
#[derive(Debug, Clone)]
pub struct BulkActionSet {
    on_clear: ActionHandler,
    on_delete: Option<ActionHandler>,
    on_export: Option<ActionHandler>,
    on_email: Option<ActionHandler>,
    on_tag: Option<ActionHandler>,
}

impl BulkActionSet {
    pub fn new(on_clear: impl Into<ActionHandler>) -> Self {
        Self {
            on_clear: on_clear.into(),
            on_delete: None,
            on_export: None,
            on_email: None,
            on_tag: None,
        }
    }

    #[must_use]
    pub fn on_delete(mut self, handler: impl Into<ActionHandler>) -> Self {
        self.on_delete = Some(handler.into());
        self
    }

    #[must_use]
    pub fn on_export(mut self, handler: impl Into<ActionHandler>) -> Self {
        self.on_export = Some(handler.into());
        self
    }

    #[must_use]
    pub fn on_email(mut self, handler: impl Into<ActionHandler>) -> Self {
        self.on_email = Some(handler.into());
        self
    }

    #[must_use]
    pub fn on_tag(mut self, handler: impl Into<ActionHandler>) -> Self {
        self.on_tag = Some(handler.into());
        self
    }

    fn handler(&self, action: BulkAction) -> Option<&ActionHandler> {
        match action {
            BulkAction::Clear => Some(&self.on_clear),
            BulkAction::Delete => self.on_delete.as_ref(),
            BulkAction::Export => self.on_export.as_ref(),
            BulkAction::Email => self.on_email.as_ref(),
            BulkAction::Tag => self.on_tag.as_ref(),
        }
    }

    /// Which controls the bar shows.
    #[must_use]
    pub fn capabilities(&self) -> ActionCapabilities {
        BulkAction::ALL
            .into_iter()
            .filter(|action| self.handler(*action).is_some())
            .fold(ActionCapabilities::default(), ActionCapabilities::with)
    }

    /// Run `action` for a selection of `count` items.
    ///
    /// Export, Email and Tag always raise their toast, even when no handler was
    /// supplied. Delete and Clear only run their handler.
    pub fn activate(&self, action: BulkAction, count: usize, notifier: &dyn Notifier) {
        info!(
            name: "bulk.action.activated",
            action = %action,
            count,
            handled = self.handler(action).is_some(),
            "Bulk action activated"
        );

        if let Some(handler) = self.handler(action) {
            handler.run();
        }

        if let Some((message, options)) = action.notification(count) {
            notifier.success(&message, options);
        }
    }
}

/// Visibility of the bar, keyed only on the selection count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkBarState {
    Hidden,
    Visible(NonZeroUsize),
}

impl BulkBarState {
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        NonZeroUsize::new(count).map_or(Self::Hidden, Self::Visible)
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible(_))
    }
}

/// "1 item selected" / "N items selected".
#[must_use]
pub fn selection_label(count: usize) -> String {
    if count == 1 {
        "1 item selected".to_string()
    } else {
        format!("{count} items selected")
    }
}

#[derive(Serialize)]
struct HxVals {
    count: usize,
}

/// Floating toolbar for the current selection.
///
/// Renders nothing while `selected_count` is zero. Each control posts
/// `count` to `{endpoint}/{action}`; the server runs
/// [`BulkActionSet::activate`] and answers with the re-rendered bar.
///
/// # Example
///
/// ```rust,ignore
/// let actions = BulkActionSet::new(|| {}).on_export(|| {}).on_delete(|| {});
/// view! {
///     <div id=BULK_BAR_ID>
///         <BulkActionsBar selected_count=3 actions=actions />
///     </div>
/// }
/// ```
#[component]
pub fn BulkActionsBar(
    /// Selected rows, owned by the caller.
    selected_count: usize,
    /// Supplied handlers; absent ones hide their control.
    actions: BulkActionSet,
    /// HTMX endpoint prefix for server-side dispatch.
    #[prop(default = BULK_ENDPOINT)]
    endpoint: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let BulkBarState::Visible(count) = BulkBarState::from_count(selected_count) else {
        return ().into_any();
    };
    let count = count.get();

    let classes = format!(
        "fixed bottom-6 left-1/2 z-50 -translate-x-1/2 flex items-center gap-3 \
         rounded-xl border border-border bg-card px-4 py-2 shadow-lg {class}"
    );
    let controls = actions.capabilities().controls();
    let (primary, trailing): (Vec<_>, Vec<_>) = controls
        .into_iter()
        .partition(|action| *action != BulkAction::Clear);

    let hx_vals = serde_json::to_string(&HxVals { count }).ok();
    let hx_target = format!("#{BULK_BAR_ID}");

    let button = move |action: BulkAction| {
        let size = if action == BulkAction::Clear {
            ButtonSize::Icon
        } else {
            ButtonSize::Sm
        };

        view! {
            <button
                type="button"
                class=button_classes(action.variant(), size, "")
                aria-label=action.label()
                data-bulk-action=action.as_str()
                hx-post=format!("{endpoint}/{}", action.as_str())
                hx-vals=hx_vals.clone()
                hx-target=hx_target.clone()
                hx-swap="innerHTML"
            >
                <IconGlyph icon=action.icon() />
                {(action != BulkAction::Clear).then(|| view! { <span>{action.label()}</span> })}
            </button>
        }
    };

    let primary_buttons = primary.into_iter().map(button.clone()).collect_view();
    let trailing_buttons = trailing.into_iter().map(button).collect_view();

    view! {
        <div class=classes role="toolbar" aria-label="Bulk actions" data-bulk-bar="">
            <Badge variant=BadgeVariant::Default>{count.to_string()}</Badge>
            <span class="text-sm font-medium" data-selection-label="">{selection_label(count)}</span>
            <Separator orientation=SeparatorOrientation::Vertical />
            <div class="flex items-center gap-1">{primary_buttons}</div>
            <Separator orientation=SeparatorOrientation::Vertical />
            {trailing_buttons}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::notify::ToastQueue;
    use crate::ui::handler::testing::counting;
    use crate::ui::render_to_string;

    fn render_bar(count: usize, actions: BulkActionSet) -> String {
        render_to_string(move || {
            view! {
                <BulkActionsBar selected_count=count actions=actions />
            }
        })
    }

    #[test]
    fn test_state_from_count() {
        assert_eq!(BulkBarState::from_count(0), BulkBarState::Hidden);
        assert!(BulkBarState::from_count(1).is_visible());
        assert!(BulkBarState::from_count(42).is_visible());
    }

    #[test]
    fn test_selection_label_pluralization() {
        assert_eq!(selection_label(1), "1 item selected");
        assert_eq!(selection_label(0), "0 items selected");
        assert_eq!(selection_label(2), "2 items selected");
        assert_eq!(selection_label(100), "100 items selected");
    }

    #[test]
    fn test_capabilities_follow_supplied_handlers() {
        let only_clear = BulkActionSet::new(ActionHandler::noop());
        assert_eq!(only_clear.capabilities(), ActionCapabilities::clear_only());
        assert_eq!(only_clear.capabilities().controls(), vec![BulkAction::Clear]);

        let some = BulkActionSet::new(ActionHandler::noop())
            .on_tag(ActionHandler::noop())
            .on_export(ActionHandler::noop());
        assert_eq!(
            some.capabilities().controls(),
            vec![BulkAction::Export, BulkAction::Tag, BulkAction::Clear]
        );
    }

    #[test]
    fn test_parse_actions() {
        for action in BulkAction::ALL {
            assert_eq!(action.as_str().parse::<BulkAction>().unwrap(), action);
        }
        assert!(matches!(
            "archive".parse::<BulkAction>(),
            Err(AppError::UnknownAction(name)) if name == "archive"
        ));
    }

    #[test]
    fn test_export_notifies_with_count() {
        let (handler, calls) = counting();
        let actions = BulkActionSet::new(ActionHandler::noop()).on_export(handler);
        let queue = ToastQueue::new();

        actions.activate(BulkAction::Export, 7, &queue);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let toasts = queue.drain();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].message.contains('7'));
        assert_eq!(toasts[0].description.as_deref(), Some(EXPORT_DESCRIPTION));
    }

    #[test]
    fn test_email_and_tag_notify_without_handler() {
        let actions = BulkActionSet::new(ActionHandler::noop());
        let queue = ToastQueue::new();

        actions.activate(BulkAction::Email, 3, &queue);
        actions.activate(BulkAction::Tag, 4, &queue);

        let messages: Vec<String> = queue.drain().into_iter().map(|t| t.message).collect();
        assert_eq!(
            messages,
            vec!["Email sent to 3 recipients", "Tags applied to 4 records"]
        );
    }

    #[test]
    fn test_delete_and_clear_are_silent() {
        let (clear, cleared) = counting();
        let (delete, deleted) = counting();
        let actions = BulkActionSet::new(clear).on_delete(delete);
        let queue = ToastQueue::new();

        actions.activate(BulkAction::Delete, 2, &queue);
        actions.activate(BulkAction::Clear, 2, &queue);

        assert_eq!(deleted.load(Ordering::SeqCst), 1);
        assert_eq!(cleared.load(Ordering::SeqCst), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_hidden_at_zero() {
        let html = render_bar(0, BulkActionSet::new(ActionHandler::noop()).on_delete(ActionHandler::noop()));
        assert!(!html.contains('<'), "expected no markup, got {html:?}");
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_one_control_per_handler_plus_clear() {
        let actions = BulkActionSet::new(ActionHandler::noop())
            .on_export(ActionHandler::noop())
            .on_delete(ActionHandler::noop());
        let html = render_bar(1, actions);

        assert_eq!(html.matches("data-bulk-action=").count(), 3);
        assert!(html.contains(r#"data-bulk-action="export""#));
        assert!(html.contains(r#"data-bulk-action="delete""#));
        assert!(html.contains(r#"data-bulk-action="clear""#));
        assert!(!html.contains(r#"data-bulk-action="email""#));
        assert!(html.contains("1 item selected"));
    }

    #[test]
    fn test_all_handlers_render_five_controls() {
        let actions = BulkActionSet::new(ActionHandler::noop())
            .on_export(ActionHandler::noop())
            .on_email(ActionHandler::noop())
            .on_tag(ActionHandler::noop())
            .on_delete(ActionHandler::noop());
        let html = render_bar(12, actions);

        assert_eq!(html.matches("data-bulk-action=").count(), 5);
        assert!(html.contains("12 items selected"));
    }

    #[test]
    fn test_controls_post_to_endpoint() {
        let actions = BulkActionSet::new(ActionHandler::noop()).on_tag(ActionHandler::noop());
        let html = render_bar(4, actions);

        assert!(html.contains(r#"hx-post="/api/bulk/tag""#));
        assert!(html.contains(r#"hx-post="/api/bulk/clear""#));
        assert!(html.contains("hx-vals="));
        assert!(html.contains(r##"hx-target="#bulk-actions""##));
        assert!(html.contains(r#"hx-swap="innerHTML""#));
        // The wrapper belongs to the page, not the bar.
        assert!(!html.contains(r#"id="bulk-actions""#));
    }

    #[test]
    fn test_rendering_runs_no_handler() {
        let (handler, calls) = counting();
        let html = render_bar(2, BulkActionSet::new(ActionHandler::noop()).on_export(handler));

        assert!(html.contains(r#"data-bulk-action="export""#));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_custom_endpoint() {
        let html = render_to_string(|| {
            view! {
                <BulkActionsBar
                    selected_count=1
                    actions=BulkActionSet::new(ActionHandler::noop())
                    endpoint="/clinic/7/bulk"
                />
            }
        });
        assert!(html.contains(r#"hx-post="/clinic/7/bulk/clear""#));
    }
}
