use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Стабильный идентификатор элемента каталога.
///
/// Используется как ключ в наборе избранного и как ключ рендеринга.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Closed sets
// ---------------------------------------------------------------------------

/// Тип элемента каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Dashboard,
    Explore,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Dashboard => "Dashboard",
            ItemKind::Explore => "Explore",
        }
    }

    pub fn all() -> [ItemKind; 2] {
        [ItemKind::Dashboard, ItemKind::Explore]
    }

    /// Точное, регистрозависимое сопоставление
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Dashboard" => Some(ItemKind::Dashboard),
            "Explore" => Some(ItemKind::Explore),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Операционный статус элемента (определяет цвет бейджа)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    Operational,
    Warning,
    Critical,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Operational => "Operational",
            ItemStatus::Warning => "Warning",
            ItemStatus::Critical => "Critical",
        }
    }

    pub fn all() -> [ItemStatus; 3] {
        [
            ItemStatus::Operational,
            ItemStatus::Warning,
            ItemStatus::Critical,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Operational" => Some(ItemStatus::Operational),
            "Warning" => Some(ItemStatus::Warning),
            "Critical" => Some(ItemStatus::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Запись каталога: дашборд или explore.
///
/// Записи неизменяемы на всё время жизни представления.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryItem {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub name: String,
    pub domain: String,
    pub subdomain: String,
    pub description: String,
    pub status: ItemStatus,
    pub owner: String,
    /// Начальная отметка избранного. Читается только при посеве набора избранного.
    #[serde(default)]
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(ItemKind::from_label("Explore"), Some(ItemKind::Explore));
        assert_eq!(ItemKind::from_label("explore"), None);
        assert_eq!(ItemStatus::from_label("Critical"), Some(ItemStatus::Critical));
        assert_eq!(ItemStatus::from_label("CRITICAL"), None);
        assert_eq!(ItemStatus::from_label("Unknown"), None);
    }

    #[test]
    fn test_labels_match_display() {
        for kind in ItemKind::all() {
            assert_eq!(ItemKind::from_label(&kind.to_string()), Some(kind));
        }
        for status in ItemStatus::all() {
            assert_eq!(ItemStatus::from_label(&status.to_string()), Some(status));
        }
    }
}
