use std::fmt;

use crate::presentation::view_models::GuidanceViewModel;

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "chatview - LLM chat event viewer\n")?;

        if !self.data.config_exists {
            writeln!(f, "No config file at {} (defaults in use).", self.data.config_path)?;
            writeln!(f, "  chatview config init              # Write one to edit\n")?;
        }

        writeln!(f, "Reading events from {}\n", self.data.api_url)?;
        writeln!(f, "Quick commands:")?;
        writeln!(f, "  chatview events                   # Print the event list")?;
        writeln!(f, "  chatview watch                    # Live view with ticking times")?;
        writeln!(f, "  chatview serve                    # Run a local events API")?;
        writeln!(f, "  chatview post event.json          # Send an event to the API\n")?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  chatview --help")
    }
}
