use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::shared::serde_utils::parse_decimal;

/// Тело запроса `add_so`. Идентификатор, номер SO и итог назначает бэкенд.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSalesOrder {
    pub salesman: String,
    pub date_so_approved: String,
    pub client: String,
    pub product_type: String,
    pub item_description: String,
    pub quantity: f64,
    pub uom: String,
    pub gross_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{0} cannot be negative")]
    Negative(&'static str),
    #[error("{field} must be a date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { field: &'static str, value: String },
}

/// Input widget used for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
    Number,
}

impl InputKind {
    pub fn as_html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Date => "date",
            InputKind::Number => "number",
        }
    }
}

/// Поля формы добавления заказа в порядке отображения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Salesman,
    DateSoApproved,
    Client,
    ProductType,
    ItemDescription,
    Quantity,
    Uom,
    GrossPrice,
    DeliveryDate,
    Remarks,
}

impl FormField {
    pub const ALL: [FormField; 10] = [
        FormField::Salesman,
        FormField::DateSoApproved,
        FormField::Client,
        FormField::ProductType,
        FormField::ItemDescription,
        FormField::Quantity,
        FormField::Uom,
        FormField::GrossPrice,
        FormField::DeliveryDate,
        FormField::Remarks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Salesman => "salesman",
            FormField::DateSoApproved => "date_so_approved",
            FormField::Client => "client",
            FormField::ProductType => "product_type",
            FormField::ItemDescription => "item_description",
            FormField::Quantity => "quantity",
            FormField::Uom => "uom",
            FormField::GrossPrice => "gross_price",
            FormField::DeliveryDate => "delivery_date",
            FormField::Remarks => "remarks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Salesman => "Salesman",
            FormField::DateSoApproved => "Date S.O. Approved",
            FormField::Client => "Client",
            FormField::ProductType => "Product Type",
            FormField::ItemDescription => "Item Description",
            FormField::Quantity => "Quantity",
            FormField::Uom => "UOM",
            FormField::GrossPrice => "Gross Price",
            FormField::DeliveryDate => "Delivery Date",
            FormField::Remarks => "Remarks",
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            FormField::DateSoApproved | FormField::DeliveryDate => InputKind::Date,
            FormField::Quantity | FormField::GrossPrice => InputKind::Number,
            _ => InputKind::Text,
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, FormField::DeliveryDate | FormField::Remarks)
    }

    /// Spans both grid columns.
    pub fn wide(&self) -> bool {
        matches!(self, FormField::ItemDescription | FormField::Remarks)
    }
}

/// Raw text state of the add-order form, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesOrderForm {
    pub salesman: String,
    pub date_so_approved: String,
    pub client: String,
    pub product_type: String,
    pub item_description: String,
    pub quantity: String,
    pub uom: String,
    pub gross_price: String,
    pub delivery_date: String,
    pub remarks: String,
}

impl SalesOrderForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Salesman => &self.salesman,
            FormField::DateSoApproved => &self.date_so_approved,
            FormField::Client => &self.client,
            FormField::ProductType => &self.product_type,
            FormField::ItemDescription => &self.item_description,
            FormField::Quantity => &self.quantity,
            FormField::Uom => &self.uom,
            FormField::GrossPrice => &self.gross_price,
            FormField::DeliveryDate => &self.delivery_date,
            FormField::Remarks => &self.remarks,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Salesman => &mut self.salesman,
            FormField::DateSoApproved => &mut self.date_so_approved,
            FormField::Client => &mut self.client,
            FormField::ProductType => &mut self.product_type,
            FormField::ItemDescription => &mut self.item_description,
            FormField::Quantity => &mut self.quantity,
            FormField::Uom => &mut self.uom,
            FormField::GrossPrice => &mut self.gross_price,
            FormField::DeliveryDate => &mut self.delivery_date,
            FormField::Remarks => &mut self.remarks,
        };
        *slot = value;
    }

    /// Checks required fields, numbers and dates; returns the request body.
    pub fn validate(&self) -> Result<NewSalesOrder, ValidationError> {
        for field in FormField::ALL {
            if field.required() && self.get(field).trim().is_empty() {
                return Err(ValidationError::Missing(field.label()));
            }
        }

        Ok(NewSalesOrder {
            salesman: self.salesman.trim().to_string(),
            date_so_approved: required_date(FormField::DateSoApproved, &self.date_so_approved)?,
            client: self.client.trim().to_string(),
            product_type: self.product_type.trim().to_string(),
            item_description: self.item_description.trim().to_string(),
            quantity: non_negative(FormField::Quantity, &self.quantity)?,
            uom: self.uom.trim().to_string(),
            gross_price: non_negative(FormField::GrossPrice, &self.gross_price)?,
            delivery_date: optional_date(FormField::DeliveryDate, &self.delivery_date)?,
            remarks: Some(self.remarks.trim().to_string()).filter(|s| !s.is_empty()),
        })
    }
}

fn non_negative(field: FormField, raw: &str) -> Result<f64, ValidationError> {
    let value = parse_decimal(raw).ok_or_else(|| ValidationError::InvalidNumber {
        field: field.label(),
        value: raw.trim().to_string(),
    })?;
    if value < 0.0 {
        return Err(ValidationError::Negative(field.label()));
    }
    Ok(value)
}

fn required_date(field: FormField, raw: &str) -> Result<String, ValidationError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| ValidationError::InvalidDate {
            field: field.label(),
            value: raw.to_string(),
        })
}

fn optional_date(field: FormField, raw: &str) -> Result<Option<String>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    required_date(field, raw).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SalesOrderForm {
        SalesOrderForm {
            salesman: "Reyes".into(),
            date_so_approved: "2024-05-02".into(),
            client: "Acme".into(),
            product_type: "Steel".into(),
            item_description: "Rebar 10mm".into(),
            quantity: "12".into(),
            uom: "pcs".into(),
            gross_price: "1,250.50".into(),
            delivery_date: String::new(),
            remarks: "  ".into(),
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let order = filled().validate().unwrap();
        assert_eq!(order.quantity, 12.0);
        assert_eq!(order.gross_price, 1250.5);
        assert_eq!(order.delivery_date, None);
        assert_eq!(order.remarks, None);

        let body = serde_json::to_value(&order).unwrap();
        assert_eq!(body["salesman"], "Reyes");
        assert!(body.get("delivery_date").is_none());
        assert!(body.get("remarks").is_none());
    }

    #[test]
    fn test_missing_required_field() {
        let mut form = filled();
        form.set(FormField::Client, "   ".into());
        assert_eq!(form.validate(), Err(ValidationError::Missing("Client")));
    }

    #[test]
    fn test_rejects_bad_numbers_and_dates() {
        let mut form = filled();
        form.set(FormField::Quantity, "-3".into());
        assert_eq!(form.validate(), Err(ValidationError::Negative("Quantity")));

        let mut form = filled();
        form.set(FormField::GrossPrice, "abc".into());
        assert!(matches!(
            form.validate(),
            Err(ValidationError::InvalidNumber { field: "Gross Price", .. })
        ));

        let mut form = filled();
        form.set(FormField::DeliveryDate, "next week".into());
        assert!(matches!(
            form.validate(),
            Err(ValidationError::InvalidDate { field: "Delivery Date", .. })
        ));
    }

    #[test]
    fn test_field_metadata() {
        let required: Vec<_> = FormField::ALL.iter().filter(|f| f.required()).collect();
        assert_eq!(required.len(), 8);
        assert_eq!(FormField::Quantity.kind().as_html_type(), "number");
        assert!(FormField::Remarks.wide());
        assert!(!FormField::Salesman.wide());
    }
}
