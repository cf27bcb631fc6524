use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::RestError;

impl IntoResponse for RestError {
    /// Render with the status code and the JSON body
    ///
    /// The error itself is kept in the response extensions so middleware
    /// can re-render or log it.
    fn into_response(self) -> Response {
        let mut response = (self.status_code(), Json(self.body())).into_response();
        response.extensions_mut().insert(self);
        response
    }
}
