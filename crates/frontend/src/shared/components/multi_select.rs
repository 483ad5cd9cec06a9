use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use std::collections::BTreeSet;
use wasm_bindgen::JsCast;

/// Button caption: "All Clients", the single choice, or "3 Clients Selected".
pub fn multi_select_caption(label: &str, selected: &BTreeSet<String>) -> String {
    match selected.len() {
        0 => format!("All {}s", label),
        1 => selected.iter().next().cloned().unwrap_or_default(),
        n => format!("{} {}s Selected", n, label),
    }
}

/// Выпадающий список с чекбоксами. Пустой выбор означает «все».
#[component]
pub fn MultiSelect(
    /// Singular noun for the caption, e.g. "Client"
    label: &'static str,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<BTreeSet<String>>,
    /// Called with the option that was checked or unchecked
    on_toggle: Callback<String>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let container = NodeRef::<leptos::html::Div>::new();

    // Закрываем по клику вне списка
    let handle = window_event_listener(ev::mousedown, move |ev: ev::MouseEvent| {
        if !is_open.get_untracked() {
            return;
        }
        let inside = match (container.get_untracked(), ev.target()) {
            (Some(el), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .map(|node| el.contains(Some(node)))
                .unwrap_or(false),
            _ => false,
        };
        if !inside {
            set_is_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="multi-select" node_ref=container>
            <button
                type="button"
                class="multi-select__button"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span class="multi-select__caption">
                    {move || selected.with(|s| multi_select_caption(label, s))}
                </span>
                <span
                    class="multi-select__chevron"
                    class:multi-select__chevron--open=move || is_open.get()
                >
                    {icon("chevron-down")}
                </span>
            </button>
            <Show when=move || is_open.get()>
                <ul class="multi-select__menu">
                    <For
                        each=move || options.get()
                        key=|option| option.clone()
                        children=move |option: String| {
                            let for_check = option.clone();
                            let for_toggle = option.clone();
                            view! {
                                <li>
                                    <label class="multi-select__option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected.with(|s| s.contains(&for_check))
                                            on:change=move |_| on_toggle.run(for_toggle.clone())
                                        />
                                        <span>{option}</span>
                                    </label>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption() {
        let mut selected = BTreeSet::new();
        assert_eq!(multi_select_caption("Client", &selected), "All Clients");
        selected.insert("ACME".to_string());
        assert_eq!(multi_select_caption("Client", &selected), "ACME");
        selected.insert("Globex".to_string());
        assert_eq!(multi_select_caption("Client", &selected), "2 Clients Selected");
    }
}
