use contracts::dashboards::d400_sales_dashboard::BarDatum;
use leptos::prelude::*;

/// Horizontal bar chart; widths are precomputed in [`BarDatum::percent`].
#[component]
pub fn BarChart(title: &'static str, bars: Vec<BarDatum>) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <div class="bar-chart">
                {bars.into_iter().map(|bar| {
                    let width = format!("{:.2}%", bar.percent);
                    view! {
                        <div class="bar-chart__row">
                            <span class="bar-chart__name" title=bar.name.clone()>{bar.name.clone()}</span>
                            <div class="bar-chart__track">
                                <div class="bar-chart__bar" style:width=width>
                                    <span class="bar-chart__label">{bar.label}</span>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
