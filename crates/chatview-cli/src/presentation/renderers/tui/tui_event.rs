use chatview_types::ChatEvent;

/// Messages from background tasks to the render loop. Keys and ticks arrive
/// on their own channels.
#[derive(Debug)]
pub enum TuiEvent {
    Fetched(Result<Vec<ChatEvent>, String>),
}
