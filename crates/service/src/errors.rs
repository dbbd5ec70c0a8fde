use thiserror::Error;

/// Every failure a room or booking operation can report.
///
/// All variants except [`ServiceError::InternalService`] describe input the
/// caller can fix; `InternalService` wraps whatever the storage layer said.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("description should not be empty")]
    EmptyDescription,
    #[error("price should be positive number")]
    NotPositivePrice,
    #[error("wrong sort param")]
    WrongSortField,
    #[error("wrong room id")]
    WrongRoomId,
    #[error("date_start should be before date_end")]
    WrongDates,
    #[error("wrong booking id")]
    WrongBookingId,
    #[error("internal service error: {0}")]
    InternalService(String),
}

impl ServiceError {
    /// Wrap a storage failure.
    pub fn internal(err: impl std::fmt::Display) -> Self { Self::InternalService(err.to_string()) }

    /// True for errors caused by the request rather than the store.
    pub fn is_validation(&self) -> bool { !matches!(self, ServiceError::InternalService(_)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::EmptyDescription => 1001,
            ServiceError::NotPositivePrice => 1002,
            ServiceError::WrongSortField => 1003,
            ServiceError::WrongRoomId => 1004,
            ServiceError::WrongDates => 1005,
            ServiceError::WrongBookingId => 1006,
            ServiceError::InternalService(_) => 1200,
        }
    }
}
