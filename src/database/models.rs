use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A stored job posting, as returned by every read and by `create`.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::database::schema::jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime
}

/// Request payload for creating a job.
///
/// Every field is optional here; required-ness is checked by the store
/// right before the row is written. An `id` in the body is ignored.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<NaiveDateTime>
}

#[derive(Insertable, Debug, PartialEq, Eq)]
#[diesel(table_name = crate::database::schema::jobs)]
pub struct InsertJob<'de> {
    pub title: &'de str,
    pub company: &'de str,
    pub description: Option<&'de str>,
    pub created_at: NaiveDateTime
}
