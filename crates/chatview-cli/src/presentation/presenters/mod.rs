pub mod config;
pub mod event;
pub mod post;
pub mod system;

pub use config::{present_config, present_config_init};
pub use event::{present_event_card, present_event_cards, present_event_list};
pub use post::present_post_result;
pub use system::present_guidance;
