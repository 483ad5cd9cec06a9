use crate::domain::a001_sales_order::api::fetch_so_records;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::printable_view::PrintableView;
use crate::shared::components::stat_card::{StatAccent, StatCard};
use crate::shared::icons::icon;
use crate::shared::page_load::{current_year, use_load};
use contracts::shared::format::{format_count, format_currency};
use contracts::shared::page_state::GroupedListState;
use contracts::shared::pipeline::{
    filter_records, group_records, paginate, sort_records, summarize, FilterState, GroupDimension,
    GroupField,
};
use contracts::shared::report::{grouped_report_title, GroupColumn, PrintableReport};
use leptos::prelude::*;
use thaw::*;

const EMPTY_MESSAGE: &str = "No data available for the current filters.";

/// Sales to Date: итоги по продавцу или клиенту
#[component]
pub fn SalesToDateReport() -> impl IntoView {
    let load = use_load("sales to date", fetch_so_records);
    let state = RwSignal::new(GroupedListState::<GroupField>::new(FilterState::for_year(
        current_year(),
    )));
    let (is_printing, set_is_printing) = signal(false);

    let records = Memo::new(move |_| {
        load.with(|s| s.ready().map(|r| r.records.clone()).unwrap_or_default())
    });
    let options = Memo::new(move |_| {
        load.with(|s| s.ready().map(|r| r.options.clone()).unwrap_or_default())
    });
    let filter = Memo::new(move |_| state.with(|s| s.list.filter.clone()));
    let group_by = Memo::new(move |_| state.with(|s| s.group_by));
    let sort = Memo::new(move |_| state.with(|s| s.list.sort));

    let filtered = Memo::new(move |_| {
        let filter = filter.get();
        records.with(|rows| filter_records(rows, &filter))
    });
    let summary = Memo::new(move |_| filtered.with(|rows| summarize(rows)));
    // без явной сортировки остаётся порядок агрегации: по сумме, по убыванию
    let grouped = Memo::new(move |_| {
        let dimension = group_by.get();
        let sort = sort.get();
        filtered.with(|rows| {
            let groups = group_records(rows, dimension);
            match sort {
                Some(sort) => sort_records(&groups, &sort),
                None => groups,
            }
        })
    });
    let page = Memo::new(move |_| {
        let (page, page_size) = state.with(|s| (s.list.page, s.list.page_size));
        grouped.with(|rows| paginate(rows, page_size, page).to_owned_page())
    });

    let group_button = move |dimension: GroupDimension| {
        view! {
            <Button
                size=ButtonSize::Small
                appearance=move || {
                    if group_by.get() == dimension {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    }
                }
                on_click=move |_| state.update(|s| s.set_group_by(dimension))
            >
                {dimension.label()}
            </Button>
        }
    };

    let content = move || {
        view! {
            <div class="page__header">
                <h1 class="page__title">"Sales to Date"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| set_is_printing.set(true)
                >
                    {icon("printer")}
                    " Print View"
                </Button>
            </div>

            <FilterPanel
                filter=filter
                options=options
                on_change=Callback::new(move |next: FilterState| {
                    state.update(|s| s.list.set_filter(next))
                })
            />

            <div class="stat-grid stat-grid--two">
                <StatCard
                    label="Total Sales"
                    icon_name="currency"
                    value=Signal::derive(move || format_currency(summary.get().total_sales))
                    accent=StatAccent::Primary
                />
                <StatCard
                    label="Total Orders"
                    icon_name="sales"
                    value=Signal::derive(move || format_count(summary.get().total_orders))
                    accent=StatAccent::Secondary
                />
            </div>

            <div class="page__card">
                <div class="group-toolbar">
                    <span class="group-toolbar__label">"Group by:"</span>
                    <Flex gap=FlexGap::Small>
                        {group_button(GroupDimension::Salesman)}
                        {group_button(GroupDimension::Client)}
                    </Flex>
                </div>

                // колонки зависят от измерения, таблица пересоздаётся целиком
                {move || {
                    let dimension = group_by.get();
                    view! {
                        <DataTable
                            columns=GroupColumn::all(dimension).to_vec()
                            rows=Signal::derive(move || page.with(|p| p.items.clone()))
                            sort=sort
                            on_sort=Callback::new(move |key: GroupField| {
                                state.update(|s| s.list.request_sort(key))
                            })
                            empty_message=EMPTY_MESSAGE
                        />
                    }
                }}

                <Show when=move || page.with(|p| p.total_count > 0)>
                    <PaginationControls
                        current_page=Signal::derive(move || page.with(|p| p.page))
                        total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || page.with(|p| p.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.list.page_size))
                        on_page_change=Callback::new(move |p: usize| {
                            state.update(|s| s.list.set_page(p))
                        })
                        on_page_size_change=Callback::new(move |size: usize| {
                            state.update(|s| {
                                s.list.set_page_size(size);
                            })
                        })
                    />
                </Show>
            </div>

            {move || {
                is_printing.get().then(|| {
                    let dimension = group_by.get_untracked();
                    let report = grouped.with_untracked(|rows| {
                        PrintableReport::build(
                            grouped_report_title(dimension),
                            &filter.get_untracked(),
                            &GroupColumn::all(dimension),
                            rows,
                        )
                        .with_summary(&summary.get_untracked())
                    });
                    view! {
                        <PrintableView
                            report=report
                            on_close=Callback::new(move |_| set_is_printing.set(false))
                        />
                    }
                })
            }}
        }
    };

    view! {
        <div class="page">
            {move || {
                if load.with(|s| s.is_loading()) {
                    return view! { <div class="page__status">"Loading Sales Data..."</div> }.into_any();
                }
                if let Some(err) = load.with(|s| s.error().map(str::to_string)) {
                    return view! { <div class="warning-box warning-box--error">{err}</div> }.into_any();
                }
                content().into_any()
            }}
        </div>
    }
}
