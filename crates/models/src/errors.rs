use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Carries the client-facing message verbatim.
    #[error("{0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
    /// An update matched no row, e.g. it was deleted after the existence check.
    #[error("no row matched the update")]
    NotUpdated,
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotUpdated => Self::NotUpdated,
            e => Self::Db(e.to_string()),
        }
    }
}
