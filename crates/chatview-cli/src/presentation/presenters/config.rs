use chatview_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, ServerConfigViewModel, StatusBadge,
};

pub fn present_config(
    config_path: &Path,
    config: &Config,
    db_path: &Path,
) -> CommandResultViewModel<ConfigViewModel> {
    let exists = config_path.exists();
    let view_model = config_view_model(config_path, exists, config, db_path);
    let result = CommandResultViewModel::new(view_model);

    if exists {
        result
    } else {
        result.with_suggestion(
            Guidance::new("Write a config file to edit").with_command("chatview config init"),
        )
    }
}

pub fn present_config_init(
    config_path: &Path,
    config: &Config,
    db_path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigViewModel> {
    let badge = if overwritten {
        StatusBadge::warning("Config overwritten with defaults")
    } else {
        StatusBadge::success("Config created")
    };

    CommandResultViewModel::new(config_view_model(config_path, true, config, db_path))
        .with_badge(badge)
}

fn config_view_model(
    config_path: &Path,
    exists: bool,
    config: &Config,
    db_path: &Path,
) -> ConfigViewModel {
    ConfigViewModel {
        config_path: config_path.display().to_string(),
        exists,
        api_url: config.api_url.clone(),
        trace_url: config.trace_url.clone(),
        server: ServerConfigViewModel {
            host: config.server.host.clone(),
            port: config.server.port,
            db_path: db_path.display().to_string(),
        },
    }
}
