use serde::{Deserialize, Serialize};

use crate::shared::format::{format_count, format_currency};
use crate::shared::serde_utils;

/// Продажи по одному имени (продавец или клиент)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSales {
    #[serde(default, deserialize_with = "serde_utils::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_utils::f64_or_zero")]
    pub sales: f64,
}

/// Month label as the backend sends it ("2024-03" or "March")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    #[serde(default, deserialize_with = "serde_utils::string_or_empty")]
    pub month: String,
    #[serde(default, deserialize_with = "serde_utils::f64_or_zero")]
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientsPerSalesman {
    #[serde(default, deserialize_with = "serde_utils::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_utils::u64_or_zero")]
    pub clients: u64,
}

/// Ответ `get_dashboard_data`: всё посчитано на бэкенде
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default, deserialize_with = "serde_utils::f64_or_zero")]
    pub total_sales: f64,
    #[serde(default, deserialize_with = "serde_utils::u64_or_zero")]
    pub total_orders: u64,
    /// Sorted by the backend, best first
    #[serde(default)]
    pub sales_by_salesman: Vec<NamedSales>,
    #[serde(default)]
    pub sales_by_client: Vec<NamedSales>,
    #[serde(default)]
    pub monthly_sales: Vec<MonthlySales>,
    #[serde(default)]
    pub clients_per_salesman: Vec<ClientsPerSalesman>,
    #[serde(default)]
    pub top_salesmen: Vec<NamedSales>,
}

/// Placeholder for an empty "top" card
pub const NOT_AVAILABLE: &str = "N/A";

impl DashboardData {
    pub fn top_salesman_name(&self) -> &str {
        first_name(&self.sales_by_salesman)
    }

    pub fn top_client_name(&self) -> &str {
        first_name(&self.sales_by_client)
    }
}

fn first_name(items: &[NamedSales]) -> &str {
    items
        .first()
        .map(|item| item.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

/// One bar of a horizontal bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub name: String,
    pub value: f64,
    /// Formatted value printed inside the bar
    pub label: String,
    /// Bar width in percent of the largest value, 0..=100
    pub percent: f64,
}

/// Scales every value against the maximum; all bars are 0% when the max is not positive.
pub fn bar_chart<'a, I>(items: I) -> Vec<BarDatum>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let items: Vec<(&str, f64)> = items.into_iter().collect();
    let max = items.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    items
        .into_iter()
        .map(|(name, value)| BarDatum {
            name: name.to_string(),
            value,
            label: format_currency(value),
            percent: if max > 0.0 {
                (value / max * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            },
        })
        .collect()
}

/// Bars for a named-sales list
pub fn sales_bars(items: &[NamedSales]) -> Vec<BarDatum> {
    bar_chart(items.iter().map(|i| (i.name.as_str(), i.sales)))
}

/// Monthly sales in backend order
pub fn monthly_bars(items: &[MonthlySales]) -> Vec<BarDatum> {
    bar_chart(items.iter().map(|i| (i.month.as_str(), i.sales)))
}

/// Clients per salesman, labelled with plain counts
pub fn client_count_bars(items: &[ClientsPerSalesman]) -> Vec<BarDatum> {
    bar_chart(items.iter().map(|i| (i.name.as_str(), i.clients as f64)))
        .into_iter()
        .map(|bar| BarDatum {
            label: format_count(bar.value as usize),
            ..bar
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_lenient_payload() {
        let json = r#"{
            "totalSales": "15,250.75",
            "totalOrders": "42",
            "salesBySalesman": [{"name": "Juan", "sales": 9000}, {"name": "Ana", "sales": "6250.75"}],
            "salesByClient": [],
            "monthlySales": [{"month": "2024-01", "sales": 100.5}],
            "clientsPerSalesman": [{"name": "Juan", "clients": "3"}]
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.total_sales, 15250.75);
        assert_eq!(data.total_orders, 42);
        assert_eq!(data.sales_by_salesman[1].sales, 6250.75);
        assert_eq!(data.clients_per_salesman[0].clients, 3);
        assert!(data.top_salesmen.is_empty());
    }

    #[test]
    fn test_top_names_fall_back_to_na() {
        let mut data = DashboardData::default();
        assert_eq!(data.top_salesman_name(), "N/A");
        data.sales_by_client.push(NamedSales {
            name: "ACME".into(),
            sales: 1.0,
        });
        assert_eq!(data.top_client_name(), "ACME");
    }

    #[test]
    fn test_bars_scale_against_max() {
        let items = vec![
            NamedSales {
                name: "A".into(),
                sales: 200.0,
            },
            NamedSales {
                name: "B".into(),
                sales: 50.0,
            },
        ];
        let bars = sales_bars(&items);
        assert_eq!(bars[0].percent, 100.0);
        assert_eq!(bars[1].percent, 25.0);
        assert_eq!(bars[1].label, "₱50.00");

        let zero = bar_chart([("Z", 0.0)]);
        assert_eq!(zero[0].percent, 0.0);
        assert!(bar_chart(Vec::new()).is_empty());
    }

    #[test]
    fn test_client_count_bars_use_counts() {
        let items = vec![
            ClientsPerSalesman {
                name: "Juan".into(),
                clients: 1200,
            },
            ClientsPerSalesman {
                name: "Ana".into(),
                clients: 300,
            },
        ];
        let bars = client_count_bars(&items);
        assert_eq!(bars[0].label, "1,200");
        assert_eq!(bars[1].percent, 25.0);
    }
}
