use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Выезжающая панель слева и затемнение под ней.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let is_open = move || ctx.sidebar_open.get();

    view! {
        <aside data-zone="left" class="left" class:left--open=is_open>
            {children()}
        </aside>
        <Show when=is_open>
            <div class="left__overlay" on:click=move |_| ctx.close_sidebar()></div>
        </Show>
    }
}
