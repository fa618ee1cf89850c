use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hotel guest. Identity is assigned by the store on insert and never
/// reassigned afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub register_date: DateTime<Utc>,
}

impl Guest {
    /// Captures all business fields; identity stays unassigned until
    /// the store inserts the row or an update sets it explicitly.
    pub fn new(name: impl Into<String>, register_date: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            register_date,
        }
    }
}

#[cfg(test)]
mod guest_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn it_should_leave_identity_unassigned_on_construction() {
        let registered = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let guest = Guest::new("Alper Ebicoglu", registered);
        assert_eq!(guest.id, 0);
        assert_eq!(guest.name, "Alper Ebicoglu");
        assert_eq!(guest.register_date, registered);
    }
}
