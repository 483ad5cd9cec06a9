use contracts::shared::pipeline::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;
use thaw::*;

/// PaginationControls component - reusable pagination controls
///
/// "Rows:" selector, "Page n of m (k records)" and Previous / Next.
#[component]
pub fn PaginationControls(
    /// Current page (1-based, already clamped)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [5, 10, 15, 25, 50])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());

    view! {
        <div class="pagination-controls">
            <div class="pagination-controls__size">
                <label for="recordsPerPage">"Rows:"</label>
                <select
                    id="recordsPerPage"
                    class="page-size-select"
                    on:change=move |ev| {
                        let val = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                        on_page_size_change.run(val);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Page {} of {} ({} records)",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        let page = current_page.get_untracked();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=Signal::derive(move || current_page.get() <= 1)
                >
                    "Previous"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        let page = current_page.get_untracked();
                        if page < total_pages.get_untracked() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=Signal::derive(move || current_page.get() >= total_pages.get())
                >
                    "Next"
                </Button>
            </Flex>
        </div>
    }
}
