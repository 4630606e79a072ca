//! # Presentation Layer
//!
//! Everything between a fetched `Vec<ChatEvent>` and the terminal. It follows
//! an adaptation of **MVVM (Model-View-ViewModel)**, with stateful components
//! for the interactive `watch` screen.
//!
//! ## 🏗️ Data Flow
//!
//! ### Console output (`events`, `post`, `config`)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json --> stdout
//!                                                                          ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ### Interactive TUI (`watch`)
//!
//! ```text
//! [ EventSource ] --fetch--> [ Presenter ] --> [ EventCardViewModel ]s
//!                                                     |
//!                                                     v
//!                              [ CardListComponent ] (keyed by id, owns one
//!                                     |                RelativeTimeDisplay per card)
//!                                     v
//!                                 [ ui::draw ]  <-- redraw on key, fetch, or tick
//! ```
//!
//! ---
//!
//! ## 🌟 Golden Rules
//!
//! ### 1. Raw data in ViewModels 🧪
//! ViewModels carry raw values (`created_at`, `age_secs`, token counts), never
//! pre-formatted phrases. `--format json` is an API; clients get numbers.
//! "5 minutes ago" is produced by `formatters::time` inside a View.
//!
//! ### 2. ViewMode is density 🔍
//! * **Minimal:** event ids only (for pipes).
//! * **Compact:** one line per event.
//! * **Standard:** full cards (default).
//! * **Verbose:** full cards plus ids, session, raw timestamp and block labels.
//!
//! `--format json` ignores `ViewMode` and always dumps the whole envelope.
//!
//! ### 3. Components own UI state 🎮
//! Scroll offset and mounted relative-time displays live in the component,
//! never in a ViewModel. The renderer routes keys; components return an
//! `Action` when something outside them has to happen (quit, refetch).
//!
//! ---
//!
//! ## 📂 Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | **`view_models/`** |
//! | Derive a value from a `ChatEvent` | **`presenters/`** |
//! | Decide when to show a tip | **`presenters/`** |
//! | Change card layout or colours | **`views/`** (console) or **`renderers/tui/components/`** |
//! | Format a timestamp or a number | **`formatters/`** |
//! | Handle a key in `watch` | **`renderers/tui/app.rs`** or the owning component |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use formatters::DisplayOptions;
pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer, WatchOptions};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
