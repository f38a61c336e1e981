/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (rental, due, return, payment) carry no time component.
pub type Date = chrono::NaiveDate;
