use contracts::domain::a001_sales_order::NewSalesOrder;
use contracts::shared::api::{ApiAction, ApiError, SoRecords, SoRecordsPayload};

use crate::shared::api_utils::{get_action, post_action};

/// Все заказы вместе с вариантами фильтров
pub async fn fetch_so_records() -> Result<SoRecords, ApiError> {
    let payload: SoRecordsPayload = get_action(ApiAction::GetSoRecords).await?;
    let records = payload.normalize();
    log::debug!("Loaded {} SO records", records.records.len());
    Ok(records)
}

/// Создать заказ; после успеха страницы перезагружают данные целиком
pub async fn add_sales_order(order: &NewSalesOrder) -> Result<(), ApiError> {
    post_action(ApiAction::AddSo, order).await
}
