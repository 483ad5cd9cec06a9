use crate::shared::components::multi_select::MultiSelect;
use contracts::shared::pipeline::{FilterOptions, FilterState};
use leptos::prelude::*;
use thaw::*;

/// FilterPanel component - client / salesman / year filters of a records page
///
/// Emits the whole next [`FilterState`]; the page decides what a change resets.
#[component]
pub fn FilterPanel(
    #[prop(into)] filter: Signal<FilterState>,
    #[prop(into)] options: Signal<FilterOptions>,
    on_change: Callback<FilterState>,
) -> impl IntoView {
    let update = move |f: &dyn Fn(&mut FilterState)| {
        let mut next = filter.get_untracked();
        f(&mut next);
        on_change.run(next);
    };

    let active_filters_count = Signal::derive(move || filter.with(|f| f.active_count()));

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <span class="filter-panel__title">"Filters"</span>
                {move || {
                    let count = active_filters_count.get();
                    if count > 0 {
                        view! {
                            <span class="badge badge--primary">{count}</span>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>
            <div class="filter-panel-content filter-panel__grid">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Client"</Label>
                    <MultiSelect
                        label="Client"
                        options=Signal::derive(move || options.with(|o| o.clients.clone()))
                        selected=Signal::derive(move || filter.with(|f| f.clients.clone()))
                        on_toggle=Callback::new(move |client: String| {
                            update(&|f| f.toggle_client(&client))
                        })
                    />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Salesman"</Label>
                    <MultiSelect
                        label="Salesman"
                        options=Signal::derive(move || options.with(|o| o.salesmen.clone()))
                        selected=Signal::derive(move || filter.with(|f| f.salesmen.clone()))
                        on_toggle=Callback::new(move |salesman: String| {
                            update(&|f| f.toggle_salesman(&salesman))
                        })
                    />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Year"</Label>
                    <select
                        id="yearFilter"
                        class="filter-panel__select"
                        on:change=move |ev| {
                            let year = event_target_value(&ev);
                            update(&|f| f.set_year(year.clone()))
                        }
                        prop:value=move || filter.with(|f| f.year.clone().unwrap_or_default())
                    >
                        <option value="">"All Years"</option>
                        {move || {
                            options.with(|o| o.years.clone()).into_iter().map(|year| {
                                let value = year.clone();
                                let attr_value = year.clone();
                                view! {
                                    <option
                                        value=attr_value
                                        selected=move || filter.with(|f| f.year.as_deref() == Some(value.as_str()))
                                    >
                                        {year}
                                    </option>
                                }
                            }).collect_view()
                        }}
                    </select>
                </Flex>
            </div>
        </div>
    }
}
