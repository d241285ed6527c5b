use contracts::directory::ItemStatus;
use leptos::prelude::*;

/// Бейдж операционного статуса: цвет и глиф из presentation mapping
#[component]
pub fn StatusBadge(status: ItemStatus) -> impl IntoView {
    let style = status.style();

    view! {
        <span class=format!("badge badge--status badge--{} {}", style.variant.as_str(), style.class)>
            {(!style.glyph.is_empty()).then(|| format!("{} ", style.glyph))}
            {status.as_str()}
        </span>
    }
}
