//! Column constraints of the `jobs` table, checked before any row is written.
//!
//! The limits mirror the DDL in `migrations/` so the embedded store rejects
//! exactly what Postgres would.

use chrono::{Local, NaiveDateTime, SubsecRound};

use super::StoreError;
use crate::database::models::{InsertJob, NewJob};

pub const TITLE_MAX_LENGTH: usize = 100;
pub const COMPANY_MAX_LENGTH: usize = 50;
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

/// Validates `new_job` and turns it into the row to insert.
///
/// `created_at` defaults to the current local time and is truncated to
/// microseconds, the precision of a Postgres `TIMESTAMP`.
pub fn check(new_job: &NewJob) -> Result<InsertJob<'_>, StoreError> {
    let title = required("title", new_job.title.as_deref(), TITLE_MAX_LENGTH)?;
    let company = required("company", new_job.company.as_deref(), COMPANY_MAX_LENGTH)?;
    let description = new_job
        .description
        .as_deref()
        .map(|description| within("description", description, DESCRIPTION_MAX_LENGTH))
        .transpose()?;

    Ok(InsertJob {
        title,
        company,
        description,
        created_at: new_job.created_at.unwrap_or_else(now).trunc_subsecs(6)
    })
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn required<'de>(column: &str, value: Option<&'de str>, max_length: usize) -> Result<&'de str, StoreError> {
    match value {
        None => Err(StoreError::Constraint(format!("{} must not be null", column))),
        Some("") => Err(StoreError::Constraint(format!("{} must not be empty", column))),
        Some(value) => within(column, value, max_length)
    }
}

// Lengths count characters, like VARCHAR(n).
fn within<'de>(column: &str, value: &'de str, max_length: usize) -> Result<&'de str, StoreError> {
    let length = value.chars().count();
    if length > max_length {
        return Err(StoreError::Constraint(format!(
            "{} is {} characters long, at most {} allowed", column, length, max_length
        )));
    }

    Ok(value)
}
