use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <header data-zone="header" class="header">
            <button
                class="icon-btn header__menu"
                aria-label="Open menu"
                on:click=move |_| ctx.open_sidebar()
            >
                {icon("menu")}
            </button>
            <h1 class="header__title">{move || ctx.active.get().label()}</h1>
        </header>
    }
}
