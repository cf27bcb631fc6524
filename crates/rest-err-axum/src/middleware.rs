use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use rest_err::RestError;

use crate::{ErrorResponder, api_error::ForeignError};

/// Re-render error responses produced by handlers
///
/// Responses carrying a [`RestError`] or an unstructured handler error
/// are rendered and logged through the [`ErrorResponder`]; everything
/// else passes through untouched.
///
/// Install with `axum::middleware::from_fn_with_state(responder, render_errors)`.
pub async fn render_errors(State(responder): State<ErrorResponder>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    if let Some(ForeignError(err)) = response.extensions_mut().remove::<ForeignError>() {
        return responder.respond(err);
    }

    if let Some(err) = response.extensions_mut().remove::<RestError>() {
        return responder.render(&err);
    }

    response
}
