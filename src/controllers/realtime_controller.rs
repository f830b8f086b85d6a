use std::{convert::Infallible, time::Duration};

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::Stream;
use tokio::sync::broadcast::error::RecvError;

use crate::{models::CartEvent, AppState};

// GET /events
pub async fn sse_events(State(state): State<AppState>) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.cart.notifier().subscribe();

    let stream = futures_util::stream::unfold(rx, |mut rx| async move {
        let evt = match rx.recv().await {
            Ok(CartEvent::Updated) => Event::default().event("cartUpdated").data("1"),
            Ok(CartEvent::Notice(notice)) => {
                let data = serde_json::to_string(&notice).unwrap_or_else(|_| "{}".to_string());
                Event::default().event("notice").data(data)
            }
            Err(RecvError::Lagged(_)) => Event::default().event("ping").data("lagged"),
            Err(RecvError::Closed) => return None,
        };

        Some((Ok(evt), rx))
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(20))
            .text("keep-alive"),
    )
}
