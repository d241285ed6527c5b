//! Карточки хаба: ресурсы (доступ, обучение) и внешние инструменты.

use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::icons::icon;
use contracts::hub::{ResourceCard, ToolBadgeVariant, ToolCard};
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize};

fn badge_style(variant: ToolBadgeVariant) -> (BadgeAppearance, BadgeColor) {
    match variant {
        ToolBadgeVariant::Default => (BadgeAppearance::Filled, BadgeColor::Brand),
        ToolBadgeVariant::Secondary => (BadgeAppearance::Tint, BadgeColor::Success),
        ToolBadgeVariant::Outline => (BadgeAppearance::Outline, BadgeColor::Subtle),
    }
}

#[component]
pub fn ResourceCardView(card: ResourceCard, index: usize) -> impl IntoView {
    let ResourceCard {
        icon: icon_name,
        title,
        description,
        cta_text,
        link,
        label,
    } = card;

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="hub-card">
            <div class="hub-card__header">
                <div class="hub-card__icon">{icon(&icon_name)}</div>
                {label.map(|label| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {label}
                    </Badge>
                })}
            </div>
            <h3 class="hub-card__title">{title}</h3>
            <p class="hub-card__description">{description}</p>
            <a class="hub-card__cta" href=link target="_blank" rel="noopener noreferrer">
                {cta_text}
                {icon("external-link")}
            </a>
        </CardAnimated>
    }
}

/// Карточка инструмента. Для "скоро" ссылка не рендерится, кнопка отключена.
#[component]
pub fn ToolCardView(card: ToolCard, index: usize) -> impl IntoView {
    let class = if card.highlighted {
        "hub-card hub-card--tool hub-card--highlighted"
    } else {
        "hub-card hub-card--tool"
    };
    let (appearance, color) = badge_style(card.badge_variant);
    let href = card.href().map(str::to_string);
    let ToolCard {
        icon: icon_name,
        title,
        subtitle,
        cta_text,
        badge,
        ..
    } = card;

    let cta = match href {
        Some(href) => view! {
            <a class="hub-card__cta" href=href target="_blank" rel="noopener noreferrer">
                {cta_text}
                {icon("external-link")}
            </a>
        }
        .into_any(),
        None => view! {
            <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small disabled=true>
                {cta_text}
            </Button>
        }
        .into_any(),
    };

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class=class>
            <div class="hub-card__header">
                <div class="hub-card__icon">{icon(&icon_name)}</div>
                {badge.map(|badge| view! {
                    <Badge appearance=appearance color=color>{badge}</Badge>
                })}
            </div>
            <h3 class="hub-card__title">{title}</h3>
            <p class="hub-card__description">{subtitle}</p>
            {cta}
        </CardAnimated>
    }
}
