use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::serde_utils;

// ============================================================================
// Status
// ============================================================================

/// Состояние заказа. Влияет только на цвет бейджа, переходы не проверяются.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SoStatus {
    #[default]
    Pending,
    Delivered,
    Cancelled,
}

impl SoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoStatus::Pending => "Pending",
            SoStatus::Delivered => "Delivered",
            SoStatus::Cancelled => "Cancelled",
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            SoStatus::Delivered => "badge badge--success",
            SoStatus::Pending => "badge badge--warning",
            SoStatus::Cancelled => "badge badge--danger",
        }
    }
}

impl fmt::Display for SoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(SoStatus::Pending),
            "delivered" => Ok(SoStatus::Delivered),
            "cancelled" | "canceled" => Ok(SoStatus::Cancelled),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

impl<'de> Deserialize<'de> for SoStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Unknown or empty statuses fall back to Pending instead of failing the whole fetch.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Одна строка заказа из удалённого хранилища. На клиенте не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    #[serde(deserialize_with = "serde_utils::lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "serde_utils::string_or_empty")]
    pub so_number: String,
    /// ISO-like date string ("2024-03-15"), the record's year anchor.
    #[serde(default, deserialize_with = "serde_utils::string_or_empty")]
    pub date_so_approved: String,
    #[serde(default, deserialize_with = "serde_utils::string_or_empty")]
    pub salesman: String,
    #[serde(default, deserialize_with = "serde_utils::string_or_empty")]
    pub client: String,
    #[serde(default, deserialize_with = "serde_utils::string_or_empty")]
    pub product_type: String,
    #[serde(default, deserialize_with = "serde_utils::string_or_empty")]
    pub item_description: String,
    #[serde(default, deserialize_with = "serde_utils::opt_f64")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::string_or_empty")]
    pub uom: String,
    #[serde(default, deserialize_with = "serde_utils::opt_f64")]
    pub gross_price: Option<f64>,
    /// Net amount computed by the backend; authoritative for sales totals.
    #[serde(default, deserialize_with = "serde_utils::opt_f64")]
    pub total_price: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::opt_string")]
    pub delivery_date: Option<String>,
    #[serde(default, deserialize_with = "serde_utils::opt_string")]
    pub remarks: Option<String>,
    #[serde(default)]
    pub status: SoStatus,
}

impl SalesOrder {
    /// Amount that counts toward sales totals; a missing price adds nothing.
    pub fn total_amount(&self) -> f64 {
        self.total_price.unwrap_or(0.0)
    }

    /// quantity × gross_price, before any discount the backend applied.
    pub fn total_gross_amount(&self) -> Option<f64> {
        Some(self.quantity? * self.gross_price?)
    }

    pub fn approved_year(&self) -> Option<String> {
        crate::shared::format::extract_year(&self.date_so_approved)
    }

    pub fn delivery_year(&self) -> Option<String> {
        self.delivery_date
            .as_deref()
            .and_then(crate::shared::format::extract_year)
    }

    /// `None` for a missing value: null numbers, absent dates and blank text.
    pub fn field(&self, field: SoField) -> Option<SoFieldValue<'_>> {
        use SoFieldValue::{Number, Text};
        match field {
            SoField::Id => Some(Number(self.id as f64)),
            SoField::SoNumber => text(&self.so_number),
            SoField::DateSoApproved => text(&self.date_so_approved),
            SoField::Salesman => text(&self.salesman),
            SoField::Client => text(&self.client),
            SoField::ProductType => text(&self.product_type),
            SoField::ItemDescription => text(&self.item_description),
            SoField::Quantity => self.quantity.map(Number),
            SoField::Uom => text(&self.uom),
            SoField::GrossPrice => self.gross_price.map(Number),
            SoField::TotalPrice => self.total_price.map(Number),
            SoField::DeliveryDate => self.delivery_date.as_deref().and_then(text),
            SoField::Remarks => self.remarks.as_deref().and_then(text),
            SoField::Status => Some(Text(self.status.as_str())),
        }
    }
}

// null в JSON приходит как "", для сортировки это отсутствующее значение
fn text(value: &str) -> Option<SoFieldValue<'_>> {
    Some(value)
        .filter(|s| !s.trim().is_empty())
        .map(SoFieldValue::Text)
}

/// Value of a single field, borrowed from the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoFieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

// ============================================================================
// Fields
// ============================================================================

/// Поля заказа, по которым можно сортировать таблицу.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoField {
    Id,
    SoNumber,
    DateSoApproved,
    Salesman,
    Client,
    ProductType,
    ItemDescription,
    Quantity,
    Uom,
    GrossPrice,
    TotalPrice,
    DeliveryDate,
    Remarks,
    Status,
}

impl SoField {
    pub const ALL: [SoField; 14] = [
        SoField::Id,
        SoField::SoNumber,
        SoField::DateSoApproved,
        SoField::Salesman,
        SoField::Client,
        SoField::ProductType,
        SoField::ItemDescription,
        SoField::Quantity,
        SoField::Uom,
        SoField::GrossPrice,
        SoField::TotalPrice,
        SoField::DeliveryDate,
        SoField::Remarks,
        SoField::Status,
    ];

    /// Column name in the record store JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoField::Id => "id",
            SoField::SoNumber => "so_number",
            SoField::DateSoApproved => "date_so_approved",
            SoField::Salesman => "salesman",
            SoField::Client => "client",
            SoField::ProductType => "product_type",
            SoField::ItemDescription => "item_description",
            SoField::Quantity => "quantity",
            SoField::Uom => "uom",
            SoField::GrossPrice => "gross_price",
            SoField::TotalPrice => "total_price",
            SoField::DeliveryDate => "delivery_date",
            SoField::Remarks => "remarks",
            SoField::Status => "status",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SoField::Id | SoField::Quantity | SoField::GrossPrice | SoField::TotalPrice
        )
    }
}

impl FromStr for SoField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown sales order field '{}'", s))
    }
}
