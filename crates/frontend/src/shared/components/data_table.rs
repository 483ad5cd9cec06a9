use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::pipeline::SortState;
use contracts::shared::report::TableColumn;
use leptos::prelude::*;
use thaw::*;

fn cell_class(numeric: bool) -> &'static str {
    if numeric {
        "table__cell table__cell--numeric"
    } else {
        "table__cell"
    }
}

/// Таблица по описанию колонок. Клик по сортируемому заголовку зовёт `on_sort`.
#[component]
pub fn DataTable<C>(
    columns: Vec<C>,
    /// Rows of the current page, already filtered and sorted
    #[prop(into)]
    rows: Signal<Vec<C::Row>>,
    #[prop(into)] sort: Signal<Option<SortState<C::SortKey>>>,
    on_sort: Callback<C::SortKey>,
    empty_message: &'static str,
) -> impl IntoView
where
    C: TableColumn + Send + Sync + 'static,
    C::Row: Clone + Send + Sync + 'static,
    C::SortKey: Send + Sync + 'static,
{
    let column_count = columns.len().max(1);
    let columns = StoredValue::new(columns);

    let header_cells = columns
        .get_value()
        .into_iter()
        .map(|col| {
            let header = col.header();
            let class = cell_class(col.kind().is_numeric());
            match col.sort_key() {
                Some(key) => view! {
                    <TableHeaderCell>
                        <div
                            class=format!("{} table__sortable-header", class)
                            on:click=move |_| on_sort.run(key)
                        >
                            {header}
                            " "
                            <span class=move || get_sort_class(sort.get(), key)>
                                {move || get_sort_indicator(sort.get(), key)}
                            </span>
                        </div>
                    </TableHeaderCell>
                }
                .into_any(),
                None => view! {
                    <TableHeaderCell>
                        <div class=class>{header}</div>
                    </TableHeaderCell>
                }
                .into_any(),
            }
        })
        .collect_view();

    let body = move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! {
                <TableRow>
                    <TableCell attr:colspan=column_count>
                        <div class="table__empty">{empty_message}</div>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }
        columns.with_value(|cols| {
            rows.iter()
                .map(|row| {
                    let cells = cols
                        .iter()
                        .map(|col| {
                            let text = col.render(row);
                            let class = cell_class(col.kind().is_numeric());
                            match col.badge(row) {
                                Some(badge) => view! {
                                    <TableCell>
                                        <div class=class><span class=badge>{text}</span></div>
                                    </TableCell>
                                }
                                .into_any(),
                                None => view! {
                                    <TableCell>
                                        <div class=class>{text}</div>
                                    </TableCell>
                                }
                                .into_any(),
                            }
                        })
                        .collect_view();
                    view! { <TableRow>{cells}</TableRow> }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="table-wrapper">
            <Table>
                <TableHeader>
                    <TableRow>{header_cells}</TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
        </div>
    }
}
