use contracts::dashboards::d400_sales_dashboard::DashboardData;
use contracts::shared::api::{ApiAction, ApiError};

use crate::shared::api_utils::get_action;

/// Готовые итоги дашборда, считаются на бэкенде
pub async fn fetch_dashboard_data() -> Result<DashboardData, ApiError> {
    get_action(ApiAction::GetDashboardData).await
}
