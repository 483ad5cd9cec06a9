use crate::routes::routes::Route;
use leptos::ev;
use leptos::prelude::*;
use web_sys::window;

/// Состояние оболочки приложения: текущая страница и боковая панель.
///
/// Provided once at the root; pages keep their own filter and table state.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Route>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(current_route()),
            sidebar_open: RwSignal::new(false),
        }
    }

    /// Follows `location.hash`; the listener is removed with the owner.
    pub fn init_router_integration(&self) {
        let this = *self;
        this.active.set(current_route());

        let handle = window_event_listener(ev::hashchange, move |_| {
            let route = current_route();
            log::debug!("hashchange -> {}", route.hash());
            this.active.set(route);
            this.sidebar_open.set(false);
        });
        on_cleanup(move || handle.remove());
    }

    pub fn open_sidebar(&self) {
        self.sidebar_open.set(true);
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_route() -> Route {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}
