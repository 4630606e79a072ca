use std::path::Path;

use crate::presentation::view_models::{CommandResultViewModel, GuidanceViewModel};

pub fn present_guidance(
    config_path: &Path,
    api_url: &str,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        config_path: config_path.display().to_string(),
        config_exists: config_path.exists(),
        api_url: api_url.to_string(),
    })
}
