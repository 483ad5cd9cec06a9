use crate::domain::a001_sales_order::api::add_sales_order;
use contracts::domain::a001_sales_order::{FormField, InputKind, SalesOrderForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сколько висит баннер с результатом, мс
const BANNER_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq)]
enum Banner {
    Success,
    Error(String),
}

impl Banner {
    fn class(&self) -> &'static str {
        match self {
            Banner::Success => "banner banner--success",
            Banner::Error(_) => "banner banner--error",
        }
    }

    fn text(&self) -> String {
        match self {
            Banner::Success => "Sales order added successfully!".to_string(),
            Banner::Error(e) => format!("Failed to add sales order: {}", e),
        }
    }
}

fn field_class(field: FormField) -> &'static str {
    if field.wide() {
        "form-group form-group--wide"
    } else {
        "form-group"
    }
}

/// Форма «Add SO Approved»
#[component]
pub fn AddSalesOrderForm() -> impl IntoView {
    let form = RwSignal::new(SalesOrderForm::default());
    let (is_saving, set_is_saving) = signal(false);
    let banner = RwSignal::new(Option::<Banner>::None);
    // каждый новый баннер отменяет таймер предыдущего
    let banner_seq = StoredValue::new(0u32);

    let show_banner = move |next: Banner| {
        let Some(seq) = banner_seq.try_update_value(|s| {
            *s += 1;
            *s
        }) else {
            return;
        };
        banner.try_set(Some(next));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
            if banner_seq.try_get_value() == Some(seq) {
                banner.try_set(None);
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_saving.get_untracked() {
            return;
        }

        let order = match form.with_untracked(|f| f.validate()) {
            Ok(order) => order,
            Err(e) => {
                show_banner(Banner::Error(e.to_string()));
                return;
            }
        };

        set_is_saving.set(true);
        spawn_local(async move {
            match add_sales_order(&order).await {
                Ok(()) => {
                    log::info!("Sales order for {} saved", order.client);
                    form.try_set(SalesOrderForm::default());
                    show_banner(Banner::Success);
                }
                Err(e) => show_banner(Banner::Error(e.to_string())),
            }
            set_is_saving.try_set(false);
        });
    };

    let fields = FormField::ALL
        .into_iter()
        .map(|field| {
            let id = field.name();
            view! {
                <div class=field_class(field)>
                    <label for=id>
                        {field.label()}
                        {field.required().then(|| view! { <span class="form-group__required">" *"</span> })}
                    </label>
                    <input
                        type=field.kind().as_html_type()
                        id=id
                        name=id
                        step=(field.kind() == InputKind::Number).then_some("any")
                        min=(field.kind() == InputKind::Number).then_some("0")
                        required=field.required()
                        prop:value=move || form.with(|f| f.get(field).to_string())
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                        disabled=move || is_saving.get()
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Add SO Approved"</h1>
            </div>

            {move || banner.get().map(|b| view! { <div class=b.class()>{b.text()}</div> })}

            <div class="page__card">
                <form class="so-form" on:submit=on_submit>
                    <div class="so-form__grid">{fields}</div>
                    <div class="so-form__actions">
                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_saving.get()
                        >
                            {move || if is_saving.get() { "Saving..." } else { "Add Sales Order" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_texts() {
        assert_eq!(Banner::Success.text(), "Sales order added successfully!");
        assert_eq!(
            Banner::Error("HTTP 500".into()).text(),
            "Failed to add sales order: HTTP 500"
        );
        assert_eq!(Banner::Success.class(), "banner banner--success");
    }

    #[test]
    fn test_wide_fields_span_the_grid() {
        assert_eq!(field_class(FormField::Remarks), "form-group form-group--wide");
        assert_eq!(field_class(FormField::Salesman), "form-group");
    }
}
