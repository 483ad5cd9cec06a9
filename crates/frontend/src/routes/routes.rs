use crate::dashboards::d400_sales_dashboard::ui::SalesDashboard;
use crate::dashboards::d401_sales_to_date::ui::SalesToDateReport;
use crate::domain::a001_sales_order::ui::{AddSalesOrderForm, SoRecordsList};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Страницы приложения. Навигация только через `location.hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    SoRecords,
    SalesToDate,
    AddSo,
}

/// Hash -> page. An empty hash is the dashboard; anything unknown falls back to it too.
const ROUTE_TABLE: [(&str, Route); 5] = [
    ("", Route::Dashboard),
    ("#dashboard", Route::Dashboard),
    ("#so-records", Route::SoRecords),
    ("#sales-to-date", Route::SalesToDate),
    ("#add-so", Route::AddSo),
];

impl Route {
    /// Sidebar order.
    pub const ALL: [Route; 4] = [
        Route::Dashboard,
        Route::SoRecords,
        Route::SalesToDate,
        Route::AddSo,
    ];

    pub fn from_hash(hash: &str) -> Route {
        ROUTE_TABLE
            .iter()
            .find(|(key, _)| *key == hash)
            .map(|(_, route)| *route)
            .unwrap_or_default()
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Route::Dashboard => "#dashboard",
            Route::SoRecords => "#so-records",
            Route::SalesToDate => "#sales-to-date",
            Route::AddSo => "#add-so",
        }
    }

    /// Nav label, also the header title.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::SoRecords => "SO Records",
            Route::SalesToDate => "Sales to Date",
            Route::AddSo => "Add SO Approved",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::SoRecords => "records",
            Route::SalesToDate => "calendar",
            Route::AddSo => "plus-circle",
        }
    }

    /// Page constructor. A fresh page (and fresh page state) on every switch.
    pub fn page(&self) -> fn() -> AnyView {
        match self {
            Route::Dashboard => || view! { <SalesDashboard /> }.into_any(),
            Route::SoRecords => || view! { <SoRecordsList /> }.into_any(),
            Route::SalesToDate => || view! { <SalesToDateReport /> }.into_any(),
            Route::AddSo => || view! { <AddSalesOrderForm /> }.into_any(),
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            header=|| view! { <Header /> }.into_any()
            center=move || (ctx.active.get().page())()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#dashboard"), Route::Dashboard);
        assert_eq!(Route::from_hash("#so-records"), Route::SoRecords);
        assert_eq!(Route::from_hash("#sales-to-date"), Route::SalesToDate);
        assert_eq!(Route::from_hash("#add-so"), Route::AddSo);
    }

    #[test]
    fn test_unknown_hash_falls_back_to_dashboard() {
        assert_eq!(Route::from_hash("#reports"), Route::Dashboard);
        assert_eq!(Route::from_hash("#SO-RECORDS"), Route::Dashboard);
        assert_eq!(Route::from_hash("#unknown").label(), "Dashboard");
    }

    #[test]
    fn test_every_route_round_trips_through_its_hash() {
        for route in Route::ALL {
            assert_eq!(Route::from_hash(route.hash()), route);
        }
        assert_eq!(Route::AddSo.label(), "Add SO Approved");
    }
}
