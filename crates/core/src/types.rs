/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Campaign start and end dates carry no time-of-day.
pub type CalendarDate = chrono::NaiveDate;
