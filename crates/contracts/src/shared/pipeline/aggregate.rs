use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::sort::{SortValue, Sortable};
use crate::domain::a001_sales_order::SalesOrder;

/// Измерение группировки для отчёта «Sales to Date».
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupDimension {
    #[default]
    Salesman,
    Client,
}

impl GroupDimension {
    pub fn label(&self) -> &'static str {
        match self {
            GroupDimension::Salesman => "Salesman",
            GroupDimension::Client => "Client",
        }
    }

    pub fn key_of<'a>(&self, order: &'a SalesOrder) -> &'a str {
        match self {
            GroupDimension::Salesman => &order.salesman,
            GroupDimension::Client => &order.client,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedRow {
    pub name: String,
    pub total_sales: f64,
    pub order_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    Name,
    TotalSales,
    OrderCount,
}

impl Sortable for GroupedRow {
    type Field = GroupField;

    fn sort_value(&self, field: GroupField) -> Option<SortValue<'_>> {
        Some(match field {
            GroupField::Name => SortValue::Text(&self.name),
            GroupField::TotalSales => SortValue::Number(self.total_sales),
            GroupField::OrderCount => SortValue::Number(self.order_count as f64),
        })
    }
}

/// Neumaier compensated summation.
#[derive(Debug, Clone, Copy, Default)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    fn value(&self) -> f64 {
        self.sum + self.compensation
    }
}

/// One row per distinct value of `dimension`, highest total first.
pub fn group_records(records: &[SalesOrder], dimension: GroupDimension) -> Vec<GroupedRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, CompensatedSum, usize)> = Vec::new();

    for order in records {
        let key = dimension.key_of(order);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((key, CompensatedSum::default(), 0));
            groups.len() - 1
        });
        let (_, sum, count) = &mut groups[slot];
        sum.add(order.total_amount());
        *count += 1;
    }

    let mut rows: Vec<GroupedRow> = groups
        .into_iter()
        .map(|(name, sum, count)| GroupedRow {
            name: name.to_string(),
            total_sales: sum.value(),
            order_count: count,
        })
        .collect();
    rows.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
    rows
}

/// Итоги по отфильтрованным заказам (карточки над таблицей).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_sales: f64,
    pub total_orders: usize,
}

pub fn summarize(records: &[SalesOrder]) -> SalesSummary {
    let mut sum = CompensatedSum::default();
    for order in records {
        sum.add(order.total_amount());
    }
    SalesSummary {
        total_sales: sum.value(),
        total_orders: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pipeline::filter::{filter_records, FilterState};
    use crate::shared::pipeline::fixtures::{order, priced};

    #[test]
    fn test_group_by_salesman_sums_and_counts() {
        let records = vec![
            priced(1, "X", Some(100.0)),
            priced(2, "Y", Some(50.0)),
            priced(3, "X", Some(200.0)),
            priced(4, "Z", Some(700.0)),
            priced(5, "X", Some(300.0)),
        ];
        let rows = group_records(&records, GroupDimension::Salesman);
        assert_eq!(
            rows[0],
            GroupedRow {
                name: "Z".into(),
                total_sales: 700.0,
                order_count: 1
            }
        );
        assert_eq!(
            rows[1],
            GroupedRow {
                name: "X".into(),
                total_sales: 600.0,
                order_count: 3
            }
        );
        assert_eq!(rows[2].name, "Y");
    }

    #[test]
    fn test_group_totals_match_filtered_input() {
        let mut records = vec![
            order(1, "A", "X", "2024-01-01"),
            order(2, "B", "Y", "2024-02-01"),
            order(3, "A", "Y", "2023-03-01"),
            order(4, "C", "X", "2024-04-01"),
        ];
        records[1].total_price = Some(12.75);
        records[3].total_price = None;

        let filtered = filter_records(&records, &FilterState::for_year(2024));
        for dimension in [GroupDimension::Salesman, GroupDimension::Client] {
            let rows = group_records(&filtered, dimension);
            let count: usize = rows.iter().map(|r| r.order_count).sum();
            let total: f64 = rows.iter().map(|r| r.total_sales).sum();
            assert_eq!(count, filtered.len());
            assert!((total - summarize(&filtered).total_sales).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_input_gives_no_groups() {
        assert!(group_records(&[], GroupDimension::Client).is_empty());
        assert_eq!(summarize(&[]), SalesSummary::default());
    }

    #[test]
    fn test_compensated_sum_is_stable() {
        let records: Vec<_> = (0..10_000)
            .map(|i| priced(i, "X", Some(0.1)))
            .collect();
        let summary = summarize(&records);
        assert_eq!(summary.total_orders, 10_000);
        assert!((summary.total_sales - 1000.0).abs() < 1e-9);
    }
}
