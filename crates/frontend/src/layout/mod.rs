pub mod global_context;
pub mod header;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +---------+--------------------------------+
/// | Sidebar |  Header (menu button, title)   |
/// | (drawer)+--------------------------------+
/// |         |  Page                          |
/// +---------+--------------------------------+
/// ```
///
/// The sidebar is a drawer over the content; `center` is re-run whenever the
/// active route changes.
#[component]
pub fn Shell<L, H, C>(left: L, header: H, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    H: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send + Sync,
{
    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>

            <div class="app-body">
                {header()}
                <main class="app-main">
                    {center}
                </main>
            </div>
        </div>
    }
}
