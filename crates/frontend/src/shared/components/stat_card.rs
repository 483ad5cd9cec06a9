use crate::shared::icons::icon;
use leptos::prelude::*;

/// Цвет иконки карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatAccent {
    #[default]
    Primary,
    Secondary,
    Warning,
    Danger,
}

impl StatAccent {
    fn class(&self) -> &'static str {
        match self {
            StatAccent::Primary => "stat-card stat-card--primary",
            StatAccent::Secondary => "stat-card stat-card--secondary",
            StatAccent::Warning => "stat-card stat-card--warning",
            StatAccent::Danger => "stat-card stat-card--danger",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    accent: StatAccent,
) -> impl IntoView {
    view! {
        <div class=accent.class()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value" title=move || value.get()>
                    {move || value.get()}
                </div>
            </div>
        </div>
    }
}
