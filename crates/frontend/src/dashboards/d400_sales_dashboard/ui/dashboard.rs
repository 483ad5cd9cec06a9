use crate::dashboards::d400_sales_dashboard::api::fetch_dashboard_data;
use crate::shared::components::bar_chart::BarChart;
use crate::shared::components::stat_card::{StatAccent, StatCard};
use crate::shared::page_load::use_load;
use contracts::dashboards::d400_sales_dashboard::{
    client_count_bars, monthly_bars, sales_bars, DashboardData,
};
use contracts::shared::format::{format_count, format_currency};
use leptos::prelude::*;

fn dashboard_view(data: DashboardData) -> AnyView {
    let total_sales = format_currency(data.total_sales);
    let total_orders = format_count(data.total_orders as usize);
    let top_salesman = data.top_salesman_name().to_string();
    let top_client = data.top_client_name().to_string();

    // необязательные графики, бэкенд может их не прислать
    let monthly = (!data.monthly_sales.is_empty()).then(|| {
        view! { <BarChart title="Monthly Sales" bars=monthly_bars(&data.monthly_sales) /> }
    });
    let clients = (!data.clients_per_salesman.is_empty()).then(|| {
        view! {
            <BarChart title="Clients per Salesman" bars=client_count_bars(&data.clients_per_salesman) />
        }
    });
    let top = (!data.top_salesmen.is_empty()).then(|| {
        view! { <BarChart title="Top Salesmen" bars=sales_bars(&data.top_salesmen) /> }
    });

    view! {
        <div class="stat-grid">
            <StatCard label="Total Sales" icon_name="currency" value=total_sales accent=StatAccent::Primary />
            <StatCard label="Total Orders" icon_name="sales" value=total_orders accent=StatAccent::Secondary />
            <StatCard label="Top Salesman" icon_name="user" value=top_salesman accent=StatAccent::Warning />
            <StatCard label="Top Client" icon_name="user" value=top_client accent=StatAccent::Danger />
        </div>

        <div class="chart-grid">
            <BarChart title="Sales by Salesman" bars=sales_bars(&data.sales_by_salesman) />
            <BarChart title="Sales by Client" bars=sales_bars(&data.sales_by_client) />
            {monthly}
            {clients}
            {top}
        </div>
    }
    .into_any()
}

/// Дашборд: итоговые карточки и графики продаж
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let load = use_load("dashboard", fetch_dashboard_data);

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
            </div>
            {move || {
                if load.with(|s| s.is_loading()) {
                    return view! { <div class="page__status"><div class="spinner"></div></div> }.into_any();
                }
                if let Some(err) = load.with(|s| s.error().map(str::to_string)) {
                    return view! { <div class="warning-box warning-box--error">{err}</div> }.into_any();
                }
                match load.with(|s| s.ready().cloned()) {
                    Some(data) => dashboard_view(data),
                    None => view! { <div class="page__status">"No data available."</div> }.into_any(),
                }
            }}
        </div>
    }
}
