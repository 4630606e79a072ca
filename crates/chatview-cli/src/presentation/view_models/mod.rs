pub mod common;
pub mod config;
pub mod event;
pub mod post;
pub mod result;
pub mod system;

use std::fmt;

pub use crate::presentation::formatters::DisplayOptions;
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigViewModel, ServerConfigViewModel};
pub use event::{
    BlockSource, ConversationBlockViewModel, EventCardViewModel, EventListViewModel,
    MetricsViewModel,
};
pub use post::{PostResultViewModel, PostedEventViewModel};
pub use result::CommandResultViewModel;
pub use system::GuidanceViewModel;

/// Bridge from a view model to its text view for a given density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode, options: DisplayOptions)
    -> Box<dyn fmt::Display + 'a>;
}
