//! Slice fetch handler
//!
//! Runs source fetches in the background and merges results into the
//! entity store, then pushes fresh props into the chart picker.

use std::sync::Arc;

use iced::Task;
use slate_core::{FetchRequest, Slice};

use crate::ui::app::BoardApp;
use crate::ui::message::Message;

/// Start a background fetch
pub fn start(app: &mut BoardApp, request: FetchRequest) -> Task<Message> {
    log::info!(
        "fetch: user={} term={:?} sort={}",
        request.user_id,
        request.search_term,
        request.sort_key
    );
    app.entities.begin_fetch();
    app.sync_slice_adder();

    let source = Arc::clone(&app.source);
    Task::perform(
        async move {
            // Catalog reads block on file IO
            tokio::task::spawn_blocking(move || source.fetch(&request).map_err(|e| e.to_string()))
                .await
                .unwrap_or_else(|e| Err(format!("fetch task failed: {}", e)))
        },
        Message::SlicesFetched,
    )
}

/// Merge a finished fetch
pub fn complete(app: &mut BoardApp, result: Result<Vec<Slice>, String>) -> Task<Message> {
    match result {
        Ok(slices) => {
            app.status = format!("Loaded {} charts", slices.len());
            let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;
            app.entities.fetch_succeeded(slices, now_ms);
        }
        Err(e) => {
            app.entities.fetch_failed(&e);
            app.status = "Chart fetch failed".to_string();
        }
    }
    app.sync_slice_adder();
    Task::none()
}
