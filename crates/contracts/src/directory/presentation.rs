//! Presentation mapping: статус → стиль бейджа, тип → иконка, избранное → сердце.
//!
//! Отображения тотальны по закрытым множествам. Для строковых меток
//! (например, пришедших извне) есть нейтральный fallback.

use serde::{Deserialize, Serialize};

use super::item::{ItemKind, ItemStatus};

/// Вариант бейджа, совпадает с модификаторами `badge--*` в UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeVariant {
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Error => "error",
            BadgeVariant::Neutral => "neutral",
        }
    }
}

/// Стиль бейджа статуса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub variant: BadgeVariant,
    /// Дополнительный CSS-класс карточки (цвет фона/текста/рамки)
    pub class: &'static str,
    /// Глиф перед текстом статуса; пустой для нейтрального стиля
    pub glyph: &'static str,
}

impl StatusStyle {
    pub const NEUTRAL: StatusStyle = StatusStyle {
        variant: BadgeVariant::Neutral,
        class: "status--neutral",
        glyph: "",
    };

    /// Стиль по строковой метке. Неизвестная метка даёт нейтральный стиль.
    pub fn for_label(label: &str) -> Self {
        ItemStatus::from_label(label)
            .map(|status| status.style())
            .unwrap_or(Self::NEUTRAL)
    }
}

impl ItemStatus {
    pub fn style(&self) -> StatusStyle {
        match self {
            ItemStatus::Operational => StatusStyle {
                variant: BadgeVariant::Success,
                class: "status--operational",
                glyph: "🟢",
            },
            ItemStatus::Warning => StatusStyle {
                variant: BadgeVariant::Warning,
                class: "status--warning",
                glyph: "🟡",
            },
            ItemStatus::Critical => StatusStyle {
                variant: BadgeVariant::Error,
                class: "status--critical",
                glyph: "🔴",
            },
        }
    }
}

impl ItemKind {
    /// Имя иконки для `icons::icon()`
    pub fn icon(&self) -> &'static str {
        match self {
            ItemKind::Dashboard => "layout-grid",
            ItemKind::Explore => "search",
        }
    }
}

pub fn heart_class(is_favorite: bool) -> &'static str {
    if is_favorite {
        "heart heart--active"
    } else {
        "heart"
    }
}
