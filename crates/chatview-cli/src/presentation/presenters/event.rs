use chatview_runtime::trace_link;
use chatview_types::ChatEvent;
use chrono::{DateTime, Utc};

use crate::presentation::view_models::{
    BlockSource, CommandResultViewModel, ConversationBlockViewModel, EventCardViewModel,
    EventListViewModel, Guidance, MetricsViewModel,
};

pub fn present_event_list(
    events: Vec<ChatEvent>,
    trace_base: &str,
    now: DateTime<Utc>,
) -> CommandResultViewModel<EventListViewModel> {
    let cards = present_event_cards(events, trace_base, now);
    let is_empty = cards.is_empty();

    let mut result = CommandResultViewModel::new(EventListViewModel {
        rendered_at: now,
        total_count: cards.len(),
        events: cards,
    });

    if is_empty {
        result = result
            .with_suggestion(
                Guidance::new("Send an event to the API").with_command("chatview post event.json"),
            )
            .with_suggestion(
                Guidance::new("Or run a local API to collect events")
                    .with_command("chatview serve"),
            );
    }

    result
}

/// One card per event, in input order.
pub fn present_event_cards(
    events: Vec<ChatEvent>,
    trace_base: &str,
    now: DateTime<Utc>,
) -> Vec<EventCardViewModel> {
    events
        .into_iter()
        .map(|event| present_event_card(event, trace_base, now))
        .collect()
}

pub fn present_event_card(
    event: ChatEvent,
    trace_base: &str,
    now: DateTime<Utc>,
) -> EventCardViewModel {
    let created_at_utc = event.created_at_utc();
    let age_secs = created_at_utc.map(|at| now.signed_duration_since(at).num_seconds());
    let usage = event.usage();

    let conversation = event
        .messages
        .into_iter()
        .map(|message| ConversationBlockViewModel {
            source: BlockSource::Message,
            label: message.role,
            text: message.content,
        })
        .chain(
            event
                .response
                .into_iter()
                .map(|segment| ConversationBlockViewModel {
                    source: BlockSource::Response,
                    label: segment.kind,
                    text: segment.text,
                }),
        )
        .collect();

    EventCardViewModel {
        id: event.id,
        model: event.model,
        trace_link: trace_link(trace_base, &event.trace_id),
        trace_id: event.trace_id,
        session_id: event.session_id,
        created_at: event.created_at,
        created_at_utc,
        age_secs,
        conversation,
        stop_reason: event.stop_reason,
        metrics: MetricsViewModel {
            input_tokens: usage.input,
            output_tokens: usage.output,
            cache_read_input_tokens: usage.cache_read,
        },
    }
}
