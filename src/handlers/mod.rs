pub mod menu;
pub mod orders;
pub mod restaurants;
pub mod root;

use serde::Serialize;
use utoipa::ToSchema;

/// `limit` query values of zero or below mean "no limit".
pub fn effective_limit(limit: i64) -> Option<i64> {
    (limit > 0).then_some(limit)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier assigned by the store.
    pub id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_limits_pass_through_uncapped() {
        assert_eq!(effective_limit(1), Some(1));
        assert_eq!(effective_limit(500), Some(500));
    }

    #[test]
    fn zero_or_negative_limit_is_unlimited() {
        assert_eq!(effective_limit(0), None);
        assert_eq!(effective_limit(-3), None);
    }
}
