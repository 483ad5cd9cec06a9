use crate::shared::icons::icon;
use contracts::shared::report::{PrintableReport, ReportCell, NO_FILTERS_MESSAGE, NO_ROWS_MESSAGE};
use leptos::prelude::*;

fn cell_view(cell: ReportCell) -> AnyView {
    match cell.badge {
        Some(badge) => view! {
            <td class="printable__cell printable__cell--status">
                <span class=badge>{cell.text}</span>
            </td>
        }
        .into_any(),
        None => view! {
            <td class="printable__cell" class:text-right=cell.kind.is_numeric()>{cell.text}</td>
        }
        .into_any(),
    }
}

/// Модальное окно печатной формы
///
/// Everything outside `.printable` is hidden by the print stylesheet, so the
/// browser dialog prints only the report.
#[component]
pub fn PrintableView(report: PrintableReport, on_close: Callback<()>) -> impl IntoView {
    let PrintableReport {
        title,
        filters,
        summary,
        headers,
        rows,
    } = report;
    let column_count = headers.len().max(1);

    let print = move |_| {
        if let Err(e) = window().print() {
            log::error!("window.print failed: {:?}", e);
        }
    };

    view! {
        <div
            class="modal-overlay"
            role="dialog"
            aria-modal="true"
            on:click=move |_| on_close.run(())
        >
            <div class="printable" on:click=|ev| ev.stop_propagation()>
                <header class="printable__header no-print">
                    <h2 class="printable__title">{title.clone()}</h2>
                    <div class="printable__actions">
                        <button class="icon-btn" title="Print" on:click=print>
                            {icon("printer")}
                        </button>
                        <button class="icon-btn" title="Close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                </header>

                <div class="printable__body">
                    <h1 class="printable__print-title">{title}</h1>

                    <section class="printable__filters">
                        <h3>"Applied Filters"</h3>
                        {if filters.is_empty() {
                            view! { <p class="printable__muted">{NO_FILTERS_MESSAGE}</p> }.into_any()
                        } else {
                            view! {
                                <div class="printable__chips">
                                    {filters.into_iter().map(|chip| view! {
                                        <div class="filter-tag">
                                            <span class="filter-tag__key">{format!("{}: ", chip.label)}</span>
                                            {chip.value}
                                        </div>
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }}
                    </section>

                    {(!summary.is_empty()).then(|| view! {
                        <section class="printable__summary">
                            {summary.into_iter().map(|card| view! {
                                <div class="printable__summary-card">
                                    <h3>{card.label}</h3>
                                    <p>{card.value}</p>
                                </div>
                            }).collect_view()}
                        </section>
                    })}

                    <table class="printable__table">
                        <thead>
                            <tr>
                                {headers.into_iter().map(|h| view! {
                                    <th class:text-right=h.numeric>{h.label}</th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan=column_count class="printable__empty">{NO_ROWS_MESSAGE}</td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|row| view! {
                                    <tr>{row.into_iter().map(cell_view).collect_view()}</tr>
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
