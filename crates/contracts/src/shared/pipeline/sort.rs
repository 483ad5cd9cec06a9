use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::a001_sales_order::{SalesOrder, SoField, SoFieldValue};

/// Направление сортировки; новая колонка всегда начинает с возрастания.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header arrow for the active column.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Единственный активный ключ сортировки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<F> {
    pub key: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn ascending(key: F) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: F) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Header click: the active column flips ascending -> descending,
    /// anything else starts ascending.
    pub fn toggled(current: Option<Self>, key: F) -> Self {
        match current {
            Some(state) if state.key == key && state.direction == SortDirection::Ascending => {
                Self::descending(key)
            }
            _ => Self::ascending(key),
        }
    }

    /// Arrow to show next to `key`'s header, if it is the active column.
    pub fn indicator_for(&self, key: F) -> Option<&'static str> {
        (self.key == key).then(|| self.direction.indicator())
    }
}

/// Comparable value of one field of a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl SortValue<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Типы строк, которые умеет сортировать таблица.
pub trait Sortable {
    type Field: Copy + PartialEq;

    /// `None` is a missing value; such rows always go to the tail.
    fn sort_value(&self, field: Self::Field) -> Option<SortValue<'_>>;
}

impl Sortable for SalesOrder {
    type Field = SoField;

    fn sort_value(&self, field: SoField) -> Option<SortValue<'_>> {
        self.field(field).map(|value| match value {
            SoFieldValue::Number(n) => SortValue::Number(n),
            SoFieldValue::Text(s) => SortValue::Text(s),
        })
    }
}

fn compare_rows<T: Sortable>(a: &T, b: &T, sort: &SortState<T::Field>) -> Ordering {
    match (a.sort_value(sort.key), b.sort_value(sort.key)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ord = x.compare(&y);
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}

/// Sorted copy of `items`. Equal keys keep their input order.
pub fn sort_records<T: Sortable + Clone>(items: &[T], sort: &SortState<T::Field>) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_rows(a, b, sort));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pipeline::fixtures::{ids, order, priced};

    #[test]
    fn test_descending_numbers_keep_nulls_last() {
        let records = vec![
            priced(1, "X", Some(50.0)),
            priced(2, "X", None),
            priced(3, "X", Some(10.0)),
        ];
        let desc = sort_records(&records, &SortState::descending(SoField::TotalPrice));
        assert_eq!(ids(&desc), vec![1, 3, 2]);

        let asc = sort_records(&records, &SortState::ascending(SoField::TotalPrice));
        assert_eq!(ids(&asc), vec![3, 1, 2]);
    }

    #[test]
    fn test_reversing_direction_reverses_present_values() {
        let records = vec![
            priced(1, "X", Some(5.0)),
            priced(2, "X", None),
            priced(3, "X", Some(300.0)),
            priced(4, "X", Some(-2.0)),
            priced(5, "X", None),
            priced(6, "X", Some(40.0)),
        ];
        let asc = sort_records(&records, &SortState::ascending(SoField::TotalPrice));
        let desc = sort_records(&records, &SortState::descending(SoField::TotalPrice));

        let present = |v: &[SalesOrder]| -> Vec<i64> {
            v.iter().filter(|o| o.total_price.is_some()).map(|o| o.id).collect()
        };
        let mut reversed = present(&asc);
        reversed.reverse();
        assert_eq!(present(&desc), reversed);

        assert_eq!(ids(&asc[4..]), vec![2, 5]);
        assert_eq!(ids(&desc[4..]), vec![2, 5]);
    }

    #[test]
    fn test_numbers_compare_numerically_text_lexicographically() {
        let records = vec![
            priced(1, "X", Some(9.0)),
            priced(2, "X", Some(100.0)),
            priced(3, "X", Some(20.0)),
        ];
        let asc = sort_records(&records, &SortState::ascending(SoField::TotalPrice));
        assert_eq!(ids(&asc), vec![1, 3, 2]);

        let dates = vec![
            order(1, "A", "X", "2024-10-01"),
            order(2, "A", "X", "2023-12-31"),
            order(3, "A", "X", "2024-02-15"),
        ];
        let desc = sort_records(&dates, &SortState::descending(SoField::DateSoApproved));
        assert_eq!(ids(&desc), vec![1, 3, 2]);
    }

    #[test]
    fn test_null_text_fields_trail_in_both_directions() {
        let json = r#"[
            {"id": 1, "date_so_approved": "2024-03-01", "client": "Beta"},
            {"id": 2, "date_so_approved": null, "client": null},
            {"id": 3, "date_so_approved": "2024-01-10", "client": "Acme"},
            {"id": 4, "client": "   "}
        ]"#;
        let records: Vec<SalesOrder> = serde_json::from_str(json).unwrap();

        for key in [SoField::DateSoApproved, SoField::Client] {
            let asc = sort_records(&records, &SortState::ascending(key));
            assert_eq!(ids(&asc), vec![3, 1, 2, 4], "{:?} ascending", key);

            let desc = sort_records(&records, &SortState::descending(key));
            assert_eq!(ids(&desc), vec![1, 3, 2, 4], "{:?} descending", key);
        }
    }

    #[test]
    fn test_toggle_policy() {
        let first = SortState::toggled(None, SoField::Client);
        assert_eq!(first, SortState::ascending(SoField::Client));

        let second = SortState::toggled(Some(first), SoField::Client);
        assert_eq!(second, SortState::descending(SoField::Client));

        let third = SortState::toggled(Some(second), SoField::Client);
        assert_eq!(third, SortState::ascending(SoField::Client));

        let other = SortState::toggled(Some(second), SoField::Salesman);
        assert_eq!(other, SortState::ascending(SoField::Salesman));
    }

    #[test]
    fn test_indicator() {
        let state = SortState::descending(SoField::Quantity);
        assert_eq!(state.indicator_for(SoField::Quantity), Some("▼"));
        assert_eq!(state.indicator_for(SoField::Uom), None);
    }
}
