use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesDeskError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Assistant rules error: {0}")]
    Rules(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Session state error: {0}")]
    State(String),
}

impl From<SalesDeskError> for String {
    fn from(err: SalesDeskError) -> Self {
        err.to_string()
    }
}

impl<T> From<std::sync::PoisonError<T>> for SalesDeskError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        SalesDeskError::State(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_converts_to_display_string() {
        let msg: String = SalesDeskError::Rules("rule 2 has no keywords".to_string()).into();
        assert_eq!(msg, "Assistant rules error: rule 2 has no keywords");
    }
}
