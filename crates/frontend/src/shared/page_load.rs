//! Загрузка данных страницы с отбрасыванием устаревших ответов.

use chrono::Datelike;
use contracts::shared::page_state::{LoadGeneration, LoadState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::fmt::Display;
use std::future::Future;

/// Starts `fetch` once for the current owner and returns its load state.
///
/// When the owner is cleaned up (the user navigated away) before the fetch
/// settles, the response is dropped instead of being written.
pub fn use_load<T, E, Fut>(what: &'static str, fetch: impl FnOnce() -> Fut) -> RwSignal<LoadState<T>>
where
    T: Send + Sync + 'static,
    E: Display,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let state = RwSignal::new(LoadState::Loading);
    let generation = LoadGeneration::new();
    let ticket = generation.begin();

    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });

    let request = fetch();
    spawn_local(async move {
        let result = request.await;
        if !generation.is_current(ticket) {
            log::debug!("Dropping stale {} response", what);
            return;
        }
        state.set(LoadState::from_result(result));
    });

    state
}

/// Year preselected in the filters when a page mounts.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
