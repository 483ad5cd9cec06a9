//! Колонки таблиц и модель печатной формы.
//!
//! Tables on screen and the printable view share one column definition, so a
//! cell renders the same way in both places.

use crate::domain::a001_sales_order::{SalesOrder, SoField};
use crate::shared::format::{format_count, format_currency, format_quantity, month_of};
use crate::shared::pipeline::{
    FilterState, GroupDimension, GroupField, GroupedRow, SalesSummary,
};

pub const NO_FILTERS_MESSAGE: &str = "No filters applied.";
pub const NO_ROWS_MESSAGE: &str = "No records found.";

// ============================================================================
// Columns
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Number,
    Currency,
    Status,
}

impl CellKind {
    /// Numeric cells are right-aligned.
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellKind::Number | CellKind::Currency)
    }
}

/// Одна колонка таблицы над строками типа `Row`.
pub trait TableColumn: Copy {
    type Row;
    type SortKey: Copy + PartialEq;

    fn header(&self) -> String;
    fn kind(&self) -> CellKind;
    fn render(&self, row: &Self::Row) -> String;

    /// `None` for derived columns that cannot be sorted.
    fn sort_key(&self) -> Option<Self::SortKey> {
        None
    }

    /// CSS classes of the status badge, for [`CellKind::Status`] cells.
    fn badge(&self, _row: &Self::Row) -> Option<&'static str> {
        None
    }
}

fn currency_or_blank(value: Option<f64>) -> String {
    value.map(format_currency).unwrap_or_default()
}

/// Колонки таблицы «SO Records» в порядке отображения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoColumn {
    Salesman,
    DateSoApproved,
    Client,
    ProductType,
    ItemDescription,
    Quantity,
    Uom,
    GrossPrice,
    TotalPrice,
    Status,
    Remarks,
    DeliveryDate,
    ApprovedMonth,
    DeliveryYear,
    TotalGrossAmount,
}

impl SoColumn {
    pub const ALL: [SoColumn; 15] = [
        SoColumn::Salesman,
        SoColumn::DateSoApproved,
        SoColumn::Client,
        SoColumn::ProductType,
        SoColumn::ItemDescription,
        SoColumn::Quantity,
        SoColumn::Uom,
        SoColumn::GrossPrice,
        SoColumn::TotalPrice,
        SoColumn::Status,
        SoColumn::Remarks,
        SoColumn::DeliveryDate,
        SoColumn::ApprovedMonth,
        SoColumn::DeliveryYear,
        SoColumn::TotalGrossAmount,
    ];
}

impl TableColumn for SoColumn {
    type Row = SalesOrder;
    type SortKey = SoField;

    fn header(&self) -> String {
        match self {
            SoColumn::Salesman => "SALESMAN",
            SoColumn::DateSoApproved => "DATE S.O. APPROVED",
            SoColumn::Client => "CLIENT",
            SoColumn::ProductType => "PRODUCT TYPE",
            SoColumn::ItemDescription => "ITEM DESCRIPTION",
            SoColumn::Quantity => "QUANTITY",
            SoColumn::Uom => "UOM",
            SoColumn::GrossPrice => "GROSS PRICE",
            SoColumn::TotalPrice => "TOTAL NET AMOUNT",
            SoColumn::Status => "STATUS",
            SoColumn::Remarks => "REMARKS",
            SoColumn::DeliveryDate => "DELIVERY DATE",
            SoColumn::ApprovedMonth => "DATE S.O. APPROVED (MONTH)",
            SoColumn::DeliveryYear => "DELIVER YEAR",
            SoColumn::TotalGrossAmount => "TOTAL GROSS AMOUNT",
        }
        .to_string()
    }

    fn kind(&self) -> CellKind {
        match self {
            SoColumn::Quantity => CellKind::Number,
            SoColumn::GrossPrice | SoColumn::TotalPrice | SoColumn::TotalGrossAmount => {
                CellKind::Currency
            }
            SoColumn::Status => CellKind::Status,
            _ => CellKind::Text,
        }
    }

    fn render(&self, row: &SalesOrder) -> String {
        match self {
            SoColumn::Salesman => row.salesman.clone(),
            SoColumn::DateSoApproved => row.date_so_approved.clone(),
            SoColumn::Client => row.client.clone(),
            SoColumn::ProductType => row.product_type.clone(),
            SoColumn::ItemDescription => row.item_description.clone(),
            SoColumn::Quantity => row.quantity.map(format_quantity).unwrap_or_default(),
            SoColumn::Uom => row.uom.clone(),
            SoColumn::GrossPrice => currency_or_blank(row.gross_price),
            SoColumn::TotalPrice => currency_or_blank(row.total_price),
            SoColumn::Status => row.status.to_string(),
            SoColumn::Remarks => row.remarks.clone().unwrap_or_default(),
            SoColumn::DeliveryDate => row.delivery_date.clone().unwrap_or_default(),
            SoColumn::ApprovedMonth => month_of(&row.date_so_approved)
                .unwrap_or_default()
                .to_string(),
            SoColumn::DeliveryYear => row.delivery_year().unwrap_or_default(),
            SoColumn::TotalGrossAmount => currency_or_blank(row.total_gross_amount()),
        }
    }

    fn sort_key(&self) -> Option<SoField> {
        match self {
            SoColumn::Salesman => Some(SoField::Salesman),
            SoColumn::DateSoApproved => Some(SoField::DateSoApproved),
            SoColumn::Client => Some(SoField::Client),
            SoColumn::ProductType => Some(SoField::ProductType),
            SoColumn::ItemDescription => Some(SoField::ItemDescription),
            SoColumn::Quantity => Some(SoField::Quantity),
            SoColumn::Uom => Some(SoField::Uom),
            SoColumn::GrossPrice => Some(SoField::GrossPrice),
            SoColumn::TotalPrice => Some(SoField::TotalPrice),
            SoColumn::Status => Some(SoField::Status),
            SoColumn::Remarks => Some(SoField::Remarks),
            SoColumn::DeliveryDate => Some(SoField::DeliveryDate),
            SoColumn::ApprovedMonth | SoColumn::DeliveryYear | SoColumn::TotalGrossAmount => None,
        }
    }

    fn badge(&self, row: &SalesOrder) -> Option<&'static str> {
        matches!(self, SoColumn::Status).then(|| row.status.badge_class())
    }
}

/// Колонки сгруппированного отчёта «Sales to Date».
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupColumn {
    Name(GroupDimension),
    TotalSales,
    OrderCount,
}

impl GroupColumn {
    pub fn all(dimension: GroupDimension) -> [GroupColumn; 3] {
        [
            GroupColumn::Name(dimension),
            GroupColumn::TotalSales,
            GroupColumn::OrderCount,
        ]
    }
}

impl TableColumn for GroupColumn {
    type Row = GroupedRow;
    type SortKey = GroupField;

    fn header(&self) -> String {
        match self {
            GroupColumn::Name(dimension) => dimension.label().to_string(),
            GroupColumn::TotalSales => "Total Sales".to_string(),
            GroupColumn::OrderCount => "Total Orders".to_string(),
        }
    }

    fn kind(&self) -> CellKind {
        match self {
            GroupColumn::Name(_) => CellKind::Text,
            GroupColumn::TotalSales => CellKind::Currency,
            GroupColumn::OrderCount => CellKind::Number,
        }
    }

    fn render(&self, row: &GroupedRow) -> String {
        match self {
            GroupColumn::Name(_) => row.name.clone(),
            GroupColumn::TotalSales => format_currency(row.total_sales),
            GroupColumn::OrderCount => format_count(row.order_count),
        }
    }

    fn sort_key(&self) -> Option<GroupField> {
        Some(match self {
            GroupColumn::Name(_) => GroupField::Name,
            GroupColumn::TotalSales => GroupField::TotalSales,
            GroupColumn::OrderCount => GroupField::OrderCount,
        })
    }
}

// ============================================================================
// Printable report
// ============================================================================

/// Active filter shown above the printed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub label: &'static str,
    pub value: String,
}

impl FilterChip {
    /// Chips for every restricting dimension, in clients/salesmen/year order.
    pub fn from_filter(filter: &FilterState) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        if !filter.clients.is_empty() {
            chips.push(FilterChip {
                label: "clients",
                value: join(&filter.clients),
            });
        }
        if !filter.salesmen.is_empty() {
            chips.push(FilterChip {
                label: "salesmen",
                value: join(&filter.salesmen),
            });
        }
        if let Some(year) = filter.year_filter() {
            chips.push(FilterChip {
                label: "year",
                value: year.to_string(),
            });
        }
        chips
    }

    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

fn join<'a>(values: impl IntoIterator<Item = &'a String>) -> String {
    values
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: String,
    pub value: String,
}

impl SummaryCard {
    /// "Total Sales" and "Total Orders" cards.
    pub fn from_summary(summary: &SalesSummary) -> Vec<SummaryCard> {
        vec![
            SummaryCard {
                label: "Total Sales".to_string(),
                value: format_currency(summary.total_sales),
            },
            SummaryCard {
                label: "Total Orders".to_string(),
                value: format_count(summary.total_orders),
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub label: String,
    pub numeric: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCell {
    pub text: String,
    pub kind: CellKind,
    pub badge: Option<&'static str>,
}

/// Готовая к печати форма: только текст, без вычислений при отрисовке.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintableReport {
    pub title: String,
    pub filters: Vec<FilterChip>,
    pub summary: Vec<SummaryCard>,
    pub headers: Vec<ReportHeader>,
    pub rows: Vec<Vec<ReportCell>>,
}

impl PrintableReport {
    /// Renders every row, not just the visible page.
    pub fn build<C: TableColumn>(
        title: impl Into<String>,
        filter: &FilterState,
        columns: &[C],
        rows: &[C::Row],
    ) -> Self {
        let headers = columns
            .iter()
            .map(|c| ReportHeader {
                label: c.header(),
                numeric: c.kind().is_numeric(),
            })
            .collect();
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| ReportCell {
                        text: c.render(row),
                        kind: c.kind(),
                        badge: c.badge(row),
                    })
                    .collect()
            })
            .collect();
        Self {
            title: title.into(),
            filters: FilterChip::from_filter(filter),
            summary: Vec::new(),
            headers,
            rows,
        }
    }

    pub fn with_summary(mut self, summary: &SalesSummary) -> Self {
        self.summary = SummaryCard::from_summary(summary);
        self
    }
}

/// Title of the grouped report: "Sales to Date - Grouped by salesman".
pub fn grouped_report_title(dimension: GroupDimension) -> String {
    format!(
        "Sales to Date - Grouped by {}",
        dimension.label().to_lowercase()
    )
}
