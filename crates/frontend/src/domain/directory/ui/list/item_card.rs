use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use contracts::directory::{heart_class, DirectoryItem, ItemId};
use leptos::prelude::*;

/// Карточка одной записи директории: иконка типа, название, путь
/// `domain / subdomain | owner`, описание, бейдж статуса и действия.
#[component]
pub fn ItemCard(
    item: DirectoryItem,
    /// Позиция в отфильтрованном списке (для каскадной анимации)
    index: usize,
    #[prop(into)]
    is_favorite: Signal<bool>,
    /// Показывать служебные поля (режим администратора)
    #[prop(into)]
    show_meta: Signal<bool>,
    on_toggle_favorite: Callback<ItemId>,
) -> impl IntoView {
    let DirectoryItem {
        id,
        kind,
        name,
        domain,
        subdomain,
        description,
        status,
        owner,
        ..
    } = item;

    let meta_id = id.clone();
    let favorite_title = move || {
        if is_favorite.get() {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    };

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="directory-card">
            <div class="directory-card__body">
                <div class="directory-card__icon">{icon(kind.icon())}</div>

                <div class="directory-card__content">
                    <h3 class="directory-card__title">{name}</h3>
                    <div class="directory-card__path">
                        <span>{domain}</span>
                        <span>"/"</span>
                        <span>{subdomain}</span>
                        <span>"|"</span>
                        <span>{owner}</span>
                    </div>
                    <p class="directory-card__description">{description}</p>
                    {move || show_meta.get().then(|| view! {
                        <div class="directory-card__meta">
                            "id: " {meta_id.to_string()} " · " {kind.as_str()}
                        </div>
                    })}
                </div>

                <div class="directory-card__aside">
                    <StatusBadge status=status />

                    <div class="directory-card__actions">
                        <button
                            class="directory-card__action"
                            title=favorite_title
                            on:click=move |e| {
                                e.stop_propagation();
                                on_toggle_favorite.run(id.clone());
                            }
                        >
                            <span class=move || heart_class(is_favorite.get())>
                                {move || if is_favorite.get() {
                                    icon("heart")
                                } else {
                                    icon("heart-outline")
                                }}
                            </span>
                        </button>
                        <button class="directory-card__action" title="Open">
                            {icon("external-link")}
                        </button>
                    </div>
                </div>
            </div>
        </CardAnimated>
    }
}
