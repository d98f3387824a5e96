use reqwest::StatusCode;

/// Result of a page fetch whose HTTP failures are tolerated rather than raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// The page answered `200 OK` and was parsed
    Fetched(T),
    /// The page answered with any other status; no data was extracted
    HttpFailure { url: String, status: StatusCode },
}

impl<T> FetchOutcome<T> {
    #[cfg(test)]
    pub(crate) fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            Self::Fetched(value) => FetchOutcome::Fetched(f(value)),
            Self::HttpFailure { url, status } => FetchOutcome::HttpFailure { url, status },
        }
    }

    #[cfg(test)]
    pub(crate) fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Fetched(value) => value,
            Self::HttpFailure { .. } => T::default(),
        }
    }
}
