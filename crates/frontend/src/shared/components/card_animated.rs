//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Для списков задержка считается по индексу через [`stagger_delay`],
//! чтобы карточки появлялись каскадом.

use leptos::prelude::*;
use thaw::Card;

/// Шаг задержки между соседними карточками
pub const STAGGER_STEP_MS: u32 = 40;
/// Верхняя граница задержки, чтобы длинный список не "догружался" секундами
pub const STAGGER_MAX_MS: u32 = 320;

pub fn stagger_delay(index: usize) -> u32 {
    let delay = (index as u32).saturating_mul(STAGGER_STEP_MS);
    delay.min(STAGGER_MAX_MS)
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные CSS-классы карточки.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
