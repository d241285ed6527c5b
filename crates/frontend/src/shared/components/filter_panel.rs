use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterBar component - панель селекторов фасетов с чипами активных фильтров
#[component]
pub fn FilterBar(
    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Callback for "clear all"
    on_clear_all: Callback<()>,

    /// Filter content (selectors)
    filter_content: Children,

    /// Filter tags (active filter chips)
    filter_tags: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                {icon("filter")}
                <span class="filter-panel__title">"Filters"</span>
                {move || {
                    let count = active_filters_count.get();
                    (count > 0).then(|| view! {
                        <span class="badge badge--primary">{count}</span>
                        <button
                            class="filter-panel__clear"
                            on:click=move |_| on_clear_all.run(())
                        >
                            "Clear all"
                        </button>
                    })
                }}
            </div>
            <div class="filter-panel-content">
                {filter_content()}
            </div>
            <div class="filter-panel-tags">
                {filter_tags()}
            </div>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
