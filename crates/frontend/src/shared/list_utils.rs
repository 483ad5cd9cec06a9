/// Утилиты для заголовков сортируемых таблиц
use contracts::shared::pipeline::SortState;

/// ▲ / ▼ for the active column, nothing for the rest
pub fn get_sort_indicator<F: Copy + PartialEq>(sort: Option<SortState<F>>, key: F) -> &'static str {
    sort.and_then(|s| s.indicator_for(key)).unwrap_or("")
}

/// CSS класс индикатора сортировки
pub fn get_sort_class<F: Copy + PartialEq>(sort: Option<SortState<F>>, key: F) -> &'static str {
    match sort {
        Some(s) if s.key == key => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}
