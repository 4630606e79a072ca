// Views contain complex formatting logic that works with ViewModels
// They bridge the gap between ViewModels and the final output

pub mod config;
pub mod event;
pub mod post;
pub mod system;

pub use event::{EventCardView, EventListView, LIST_TITLE};
