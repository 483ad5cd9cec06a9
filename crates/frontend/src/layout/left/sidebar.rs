use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::Route;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="app-sidebar__brand">
            {icon("brand")}
            <span class="app-sidebar__brand-name">"SalesPro"</span>
        </div>
        <div class="app-sidebar__content">
            <nav>
                {Route::ALL.into_iter().map(|route| view! {
                    <a
                        href=route.hash()
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == route
                        on:click=move |_| ctx.close_sidebar()
                    >
                        {icon(route.icon())}
                        <span>{route.label()}</span>
                    </a>
                }).collect_view()}
            </nav>
            <div class="app-sidebar__footer">
                <ThemeToggle />
            </div>
        </div>
    }
}
