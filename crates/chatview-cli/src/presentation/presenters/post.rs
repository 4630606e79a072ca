use chatview_types::{ChatEvent, NewChatEvent};

use crate::presentation::view_models::{
    CommandResultViewModel, PostResultViewModel, PostedEventViewModel, StatusBadge,
};

/// `sent` pairs each submitted payload with what the server echoed back.
pub fn present_post_result(
    endpoint: &str,
    sent: Vec<(NewChatEvent, Option<ChatEvent>)>,
) -> CommandResultViewModel<PostResultViewModel> {
    let posted: Vec<PostedEventViewModel> = sent
        .into_iter()
        .map(|(payload, stored)| match stored {
            Some(event) => PostedEventViewModel {
                id: Some(event.id),
                model: event.model,
                session_id: event.session_id,
                created_at: Some(event.created_at),
            },
            None => PostedEventViewModel {
                id: None,
                model: payload.model,
                session_id: payload.session_id.unwrap_or_default(),
                created_at: None,
            },
        })
        .collect();

    let label = match posted.len() {
        1 => "Posted 1 event".to_string(),
        n => format!("Posted {} events", n),
    };
    let badge = if posted.iter().all(|p| p.id.is_some()) {
        StatusBadge::success(label)
    } else {
        StatusBadge::info(format!("{} (server did not return ids)", label))
    };

    CommandResultViewModel::new(PostResultViewModel {
        endpoint: endpoint.to_string(),
        posted,
    })
    .with_badge(badge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;

    fn payload(model: &str) -> NewChatEvent {
        serde_json::from_value(serde_json::json!({
            "session_id": "s", "messages": [], "model": model
        }))
        .unwrap()
    }

    #[test]
    fn test_echoed_events_report_ids() {
        let stored = payload("m").into_event(7, "2024-06-01T12:00:00.000Z".to_string());
        let result = present_post_result("http://api", vec![(payload("m"), Some(stored))]);

        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Success);
        assert_eq!(badge.label, "Posted 1 event");
        assert_eq!(result.content.posted[0].id, Some(7));
    }

    #[test]
    fn test_missing_echo_downgrades_badge() {
        let result = present_post_result(
            "http://api",
            vec![(payload("a"), None), (payload("b"), None)],
        );

        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Info);
        assert_eq!(badge.label, "Posted 2 events (server did not return ids)");
        assert_eq!(result.content.posted[1].session_id, "s");
    }
}
