use thiserror::Error;

use crate::directory::Facet;

/// Ошибки загрузки каталога и переходов состояния директории.
///
/// Фильтрация сама по себе не падает: пустой результат это валидный результат.
/// Ошибки возникают только при нарушении инвариантов данных или при попытке
/// перевести состояние в недопустимое значение.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Failed to parse catalog for {domain}: {message}")]
    Parse { domain: String, message: String },

    #[error("Item {id:?}: field `{field}` must not be empty")]
    EmptyField { id: String, field: &'static str },

    #[error("Duplicate item id {0:?}")]
    DuplicateId(String),

    #[error("Item {id:?} belongs to domain {found:?}, expected {expected:?}")]
    DomainMismatch {
        id: String,
        expected: String,
        found: String,
    },

    #[error("Item {id:?} uses undeclared subdomain {subdomain:?}")]
    UndeclaredSubdomain { id: String, subdomain: String },

    #[error("Directory configuration has an empty domain label")]
    EmptyDomainLabel,

    #[error("Invalid subdomain list: {0}")]
    InvalidSubdomainList(String),

    #[error("Value {value:?} is not a legal option for the {} facet", .facet.label())]
    InvalidFacetValue { facet: Facet, value: String },

    #[error("Unknown item id {0:?}")]
    UnknownItem(String),

    #[error("Invalid hub configuration: {0}")]
    InvalidHub(String),

    #[error("Malformed query parameter {pair:?}: {message}")]
    InvalidQuery { pair: String, message: String },
}
