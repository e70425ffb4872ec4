//! ShadCN-style building blocks shared by the widgets and page chrome.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants, plus [`button_classes`] for raw buttons
//! - [`Card`], [`CardContent`]: Card container
//! - [`Badge`]: Count/label pill
//! - [`Separator`]: Visual separator line
//! - [`Icon`], [`IconGlyph`]: Semantic icon registry

mod badge;
mod button;
mod card;
mod icons;
mod separator;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant, button_classes};
pub use card::{Card, CardContent};
pub use icons::{Icon, IconGlyph};
pub use separator::{Separator, SeparatorOrientation};
