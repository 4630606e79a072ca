use is_terminal::IsTerminal;

const MAX_RULE_WIDTH: usize = 60;
const FALLBACK_RULE_WIDTH: usize = 40;

/// Terminal-dependent display settings for text views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub enable_color: bool,
    /// Print absolute times in UTC instead of the local zone.
    pub utc: bool,
    pub rule_width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            utc: false,
            rule_width: FALLBACK_RULE_WIDTH,
        }
    }
}

impl DisplayOptions {
    /// Colors only on a terminal without `NO_COLOR`; rule sized to the terminal.
    pub fn detect() -> Self {
        let enable_color =
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        let rule_width = terminal_size::terminal_size()
            .map(|(width, _)| (width.0 as usize).min(MAX_RULE_WIDTH))
            .unwrap_or(FALLBACK_RULE_WIDTH);

        Self {
            enable_color,
            utc: false,
            rule_width,
        }
    }

    /// Deterministic settings for tests and pipes.
    pub fn plain() -> Self {
        Self {
            enable_color: false,
            ..Self::default()
        }
    }

    pub fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }
}
