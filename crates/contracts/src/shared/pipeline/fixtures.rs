use crate::domain::a001_sales_order::{SalesOrder, SoStatus};

pub(crate) fn order(id: i64, client: &str, salesman: &str, date: &str) -> SalesOrder {
    SalesOrder {
        id,
        so_number: format!("SO-{id}"),
        date_so_approved: date.to_string(),
        salesman: salesman.to_string(),
        client: client.to_string(),
        product_type: String::new(),
        item_description: String::new(),
        quantity: Some(1.0),
        uom: "pcs".to_string(),
        gross_price: Some(10.0),
        total_price: Some(10.0),
        delivery_date: None,
        remarks: None,
        status: SoStatus::Pending,
    }
}

pub(crate) fn priced(id: i64, salesman: &str, total: Option<f64>) -> SalesOrder {
    SalesOrder {
        total_price: total,
        ..order(id, "Client", salesman, "2024-01-15")
    }
}

pub(crate) fn ids(records: &[SalesOrder]) -> Vec<i64> {
    records.iter().map(|o| o.id).collect()
}
