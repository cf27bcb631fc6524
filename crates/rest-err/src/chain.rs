//! Recovering a [`RestError`] from arbitrary error chains

use std::{error::Error, sync::Arc};

use crate::{RestError, SharedError};

/// Message used when a foreign error is normalized into a 500
pub const DEFAULT_INTERNAL_MESSAGE: &str = "internal server error";

/// Find a [`RestError`] anywhere in an optional error chain
///
/// Returns `None` for a missing error, or when no link of the chain is a
/// [`RestError`]. The returned reference is the original value.
pub fn parse<'a>(err: Option<&'a (dyn Error + 'static)>) -> Option<&'a RestError> {
    err.and_then(RestError::find_in_chain)
}

impl RestError {
    /// Walk `err` and its [`Error::source`] chain looking for a [`RestError`]
    ///
    /// Links stored as [`SharedError`] or `Arc<RestError>` are looked
    /// through as well.
    pub fn find_in_chain<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Self> {
        let mut current = Some(err);

        while let Some(link) = current {
            if let Some(rest) = link.downcast_ref::<Self>() {
                return Some(rest);
            }

            // `Arc<T>` forwards `source()` to `T::source()`, skipping `T`
            if let Some(rest) = link.downcast_ref::<Arc<Self>>() {
                return Some(&**rest);
            }

            current = match link.downcast_ref::<SharedError>() {
                Some(shared) => Some(&**shared),
                None => link.source(),
            };
        }

        None
    }

    /// Walk every link of an [`anyhow::Error`] looking for a [`RestError`]
    pub fn find_in_anyhow(err: &anyhow::Error) -> Option<&Self> {
        err.chain().find_map(Self::find_in_chain)
    }

    /// Convert any error into a [`RestError`]
    ///
    /// An error that is, or wraps, a [`RestError`] yields that value.
    /// Anything else becomes a 500 with a generic message, keeping the
    /// original as the wrapped cause so details never reach the client.
    pub fn from_error<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::from_error_with_message(err, DEFAULT_INTERNAL_MESSAGE)
    }

    /// Like [`RestError::from_error`], with a custom message for the
    /// synthesized 500
    pub fn from_error_with_message<E>(err: E, message: impl Into<String>) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let err = err.into();

        if let Some(found) = Self::find_in_anyhow(&err) {
            return found.clone();
        }

        tracing::debug!(error = %err, "normalizing unstructured error into internal server error");

        Self::internal_server_error(message).with_shared_cause(into_shared(err))
    }

    /// Convert an optional error, mapping `None` to `None`
    pub fn from_optional_error<E>(err: Option<E>) -> Option<Self>
    where
        E: Into<anyhow::Error>,
    {
        err.map(Self::from_error)
    }
}

impl From<anyhow::Error> for RestError {
    fn from(err: anyhow::Error) -> Self {
        Self::from_error(err)
    }
}

/// Turn an [`anyhow::Error`] into a [`SharedError`] whose head still
/// downcasts to the original type
///
/// An error that already is a [`SharedError`] is returned as is.
pub fn into_shared(err: anyhow::Error) -> SharedError {
    match err.downcast::<SharedError>() {
        Ok(shared) => shared,
        Err(err) => Arc::from(err.reallocate_into_boxed_dyn_error_without_backtrace()),
    }
}
