use crate::domain::a001_sales_order::api::fetch_so_records;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::printable_view::PrintableView;
use crate::shared::icons::icon;
use crate::shared::page_load::{current_year, use_load};
use contracts::domain::a001_sales_order::SoField;
use contracts::shared::page_state::ListState;
use contracts::shared::pipeline::{filter_records, paginate, sort_records, FilterState, SortState};
use contracts::shared::report::{PrintableReport, SoColumn};
use leptos::prelude::*;
use thaw::*;

const TITLE: &str = "Sales Order Records";
const EMPTY_MESSAGE: &str = "No records match the current filters.";

/// Страница «SO Records»: фильтры, сортировка по колонкам, пагинация.
#[component]
pub fn SoRecordsList() -> impl IntoView {
    let load = use_load("SO records", fetch_so_records);
    let list = RwSignal::new(ListState::new(
        FilterState::for_year(current_year()),
        Some(SortState::descending(SoField::DateSoApproved)),
    ));
    let (is_printing, set_is_printing) = signal(false);

    let records = Memo::new(move |_| {
        load.with(|s| s.ready().map(|r| r.records.clone()).unwrap_or_default())
    });
    let options = Memo::new(move |_| {
        load.with(|s| s.ready().map(|r| r.options.clone()).unwrap_or_default())
    });
    let filter = Memo::new(move |_| list.with(|l| l.filter.clone()));
    let sort = Memo::new(move |_| list.with(|l| l.sort));

    // filter -> sort, every row; the printable view uses all of them
    let sorted = Memo::new(move |_| {
        let filter = filter.get();
        let sort = sort.get();
        records.with(|rows| {
            let filtered = filter_records(rows, &filter);
            match sort {
                Some(sort) => sort_records(&filtered, &sort),
                None => filtered,
            }
        })
    });
    let page = Memo::new(move |_| {
        let (page, page_size) = list.with(|l| (l.page, l.page_size));
        sorted.with(|rows| paginate(rows, page_size, page).to_owned_page())
    });

    let content = move || {
        view! {
            <div class="page__header">
                <h1 class="page__title">{TITLE}</h1>
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
                on_change=Callback::new(move |next: FilterState| list.update(|l| l.set_filter(next)))
            />

            <div class="page__card">
                <DataTable
                    columns=SoColumn::ALL.to_vec()
                    rows=Signal::derive(move || page.with(|p| p.items.clone()))
                    sort=sort
                    on_sort=Callback::new(move |key: SoField| list.update(|l| l.request_sort(key)))
                    empty_message=EMPTY_MESSAGE
                />

                <Show when=move || page.with(|p| p.total_count > 0)>
                    <PaginationControls
                        current_page=Signal::derive(move || page.with(|p| p.page))
                        total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || page.with(|p| p.total_count))
                        page_size=Signal::derive(move || list.with(|l| l.page_size))
                        on_page_change=Callback::new(move |p: usize| list.update(|l| l.set_page(p)))
                        on_page_size_change=Callback::new(move |size: usize| {
                            list.update(|l| {
                                l.set_page_size(size);
                            })
                        })
                    />
                </Show>
            </div>

            {move || {
                is_printing.get().then(|| {
                    let report = sorted.with_untracked(|rows| {
                        PrintableReport::build(TITLE, &filter.get_untracked(), &SoColumn::ALL, rows)
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
                    return view! { <div class="page__status">"Loading SO Records..."</div> }.into_any();
                }
                if let Some(err) = load.with(|s| s.error().map(str::to_string)) {
                    return view! { <div class="warning-box warning-box--error">{err}</div> }.into_any();
                }
                content().into_any()
            }}
        </div>
    }
}
