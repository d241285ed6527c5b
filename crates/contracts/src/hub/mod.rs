//! Domain hub: онбординг, обучение и ярлыки на внешние инструменты.
//!
//! Ссылки передаются как есть: не валидируются и не переписываются.

use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// Карточка ресурса (доступ/онбординг, обучение)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub cta_text: String,
    pub link: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Вариант бейджа карточки инструмента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolBadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
}

/// Карточка внешнего инструмента (дашборды, explore, ассистент)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCard {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub link: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub badge_variant: ToolBadgeVariant,
    #[serde(default)]
    pub coming_soon: bool,
    #[serde(default)]
    pub highlighted: bool,
}

impl ToolCard {
    /// Карточка "скоро" не кликабельна и её ссылка не рендерится
    pub fn is_actionable(&self) -> bool {
        !self.coming_soon
    }

    pub fn href(&self) -> Option<&str> {
        self.is_actionable().then_some(self.link.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    pub title: String,
    pub subtitle: String,
    /// Последний элемент хлебных крошек
    pub breadcrumb: String,
    #[serde(default, rename = "resource")]
    pub resources: Vec<ResourceCard>,
    #[serde(default)]
    pub tools_heading: Option<String>,
    #[serde(default)]
    pub tools_subtitle: Option<String>,
    #[serde(default, rename = "tool")]
    pub tools: Vec<ToolCard>,
}

impl HubConfig {
    pub fn has_tools(&self) -> bool {
        !self.tools.is_empty()
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if self.title.trim().is_empty() {
            return Err(DirectoryError::InvalidHub("hub title must not be empty".into()));
        }
        if self.breadcrumb.trim().is_empty() {
            return Err(DirectoryError::InvalidHub("breadcrumb must not be empty".into()));
        }
        for card in &self.resources {
            if card.title.trim().is_empty() {
                return Err(DirectoryError::InvalidHub(
                    "resource card title must not be empty".into(),
                ));
            }
        }
        for card in &self.tools {
            if card.title.trim().is_empty() {
                return Err(DirectoryError::InvalidHub(
                    "tool card title must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(coming_soon: bool) -> ToolCard {
        ToolCard {
            icon: "message-square".into(),
            title: "Explore Assistant".into(),
            subtitle: "Ask questions".into(),
            cta_text: "Coming Soon".into(),
            link: "#".into(),
            badge: Some("Coming Soon".into()),
            badge_variant: ToolBadgeVariant::Outline,
            coming_soon,
            highlighted: false,
        }
    }

    #[test]
    fn test_coming_soon_card_has_no_href() {
        assert_eq!(tool(true).href(), None);
        assert_eq!(tool(false).href(), Some("#"));
    }

    #[test]
    fn test_validate_rejects_empty_titles() {
        let mut hub = HubConfig {
            title: "Finance Hub".into(),
            subtitle: String::new(),
            breadcrumb: "Finance".into(),
            resources: vec![],
            tools_heading: None,
            tools_subtitle: None,
            tools: vec![tool(true)],
        };
        assert!(hub.validate().is_ok());

        hub.tools[0].title = " ".into();
        assert!(matches!(hub.validate(), Err(DirectoryError::InvalidHub(_))));
    }
}
