use crate::events::Event;
use crate::AppState;
use axum::{
    extract::State,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tokio_stream::StreamExt;
use tracing::debug;

fn to_sse(event: &Event) -> Option<SseEvent> {
    let json = serde_json::to_string(event).ok()?;
    Some(SseEvent::default().event(event.event_type()).data(json))
}

pub(crate) async fn sse_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let stream = BroadcastStream::new(state.event_hub.subscribe()).filter_map(
        |result: Result<Event, BroadcastStreamRecvError>| match result {
            Ok(event) => to_sse(&event).map(Ok),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                debug!("SSE subscriber lagged, {} events skipped", skipped);
                None
            }
        },
    );

    Sse::new(stream).keep_alive(KeepAlive::default())
}
