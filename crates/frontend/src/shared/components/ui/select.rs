use contracts::directory::{Facet, FacetOption};
use leptos::prelude::*;

/// Селектор одного фасета фильтра.
///
/// Первая опция всегда синтетическая "все" (значение `"all"`).
#[component]
pub fn FacetSelect(
    facet: Facet,
    /// Текущее значение селектора (`"all"` если фасет не задан)
    #[prop(into)]
    value: Signal<String>,
    options: Vec<FacetOption>,
    on_change: Callback<String>,
) -> impl IntoView {
    let select_id = format!("facet-{}", facet.key());

    view! {
        <div class="form__group">
            <select
                id=select_id
                class=format!("form__select form__select--{}", facet.key())
                aria-label=facet.label()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|option| {
                        let option_value = option.select_value().to_string();
                        let current = option_value.clone();
                        let is_selected = move || value.get() == current;
                        view! {
                            <option value=option_value selected=is_selected>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
