use hyper::StatusCode;

use crate::store::StoreError;

pub fn internal_error(err: PortalError) -> (StatusCode, String) {
    match err {
        PortalError::Storage(message) => (StatusCode::INTERNAL_SERVER_ERROR, message.into()),
        PortalError::DatabaseConnection(message) => (StatusCode::INTERNAL_SERVER_ERROR, message.into()),
    }
}

pub enum PortalError<'de> {
    /// Internal Server Error, code 500
    /// Failed queries and violated column constraints alike, the client
    /// never sees which column was at fault.
    Storage(&'de str),

    /// Internal Server Error, code 500
    DatabaseConnection(&'de str),
}

impl From<&StoreError> for PortalError<'static> {
    fn from(err: &StoreError) -> Self {
        match err {
            StoreError::Connection(_) => PortalError::DatabaseConnection("Unable to connect to database!"),
            StoreError::Query(_) | StoreError::Constraint(_) => {
                PortalError::Storage("Something went wrong while trying to access the job store!")
            }
        }
    }
}
