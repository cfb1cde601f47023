use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MealError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("collection name must not be empty")]
    EmptyCollectionName,

    #[error("no template collection with id {0}")]
    UnknownCollection(Uuid),

    #[error("invalid day stamp {0:?}, expected YYYY-MM-DD")]
    InvalidDayStamp(String),

    #[error("unknown meal slot {0:?}")]
    UnknownSlot(String),
}
