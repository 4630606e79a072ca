//! Event ingest and listing routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chatview_types::{ChatEvent, NewChatEvent};

use crate::state::AppState;

/// Store failures surface as 500 with the error text; counters the store cannot
/// hold are the client's fault and get 422.
pub struct StoreError(chatview_index::Error);

impl From<chatview_index::Error> for StoreError {
    fn from(err: chatview_index::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        if let chatview_index::Error::CounterOutOfRange { .. } = self.0 {
            tracing::warn!(error = %self.0, "rejected event");
            return (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string()).into_response();
        }
        tracing::error!(error = %self.0, "event store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// `GET /api/v1/events`: every stored event, newest first.
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatEvent>>, StoreError> {
    let events = state.db().list_events()?;
    tracing::info!(count = events.len(), "listed events");
    Ok(Json(events))
}

/// `POST /api/v1` and `POST /api/v1/events`: store one event.
pub async fn create_event(
    State(state): State<AppState>,
    Json(mut body): Json<NewChatEvent>,
) -> Result<(StatusCode, Json<ChatEvent>), StoreError> {
    body.ensure_session_id();
    let stored = state.db().insert_event(body)?;
    tracing::info!(id = stored.id, model = %stored.model, "stored event");
    Ok((StatusCode::CREATED, Json(stored)))
}
