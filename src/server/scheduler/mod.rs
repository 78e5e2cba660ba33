//! Background cron jobs.

pub mod schedule_expiry;
