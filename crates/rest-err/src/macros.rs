/// Build a [`RestError`](crate::RestError) with a `format!`-style message
///
/// The first argument names the constructor. Validation constructors take
/// their causes after `causes:`.
///
/// ```
/// use rest_err::{Cause, rest_error};
///
/// let err = rest_error!(bad_request, "user {} not found with id {}", "john", 123);
/// assert_eq!(err.message(), "user john not found with id 123");
///
/// let name = "john";
/// let err = rest_error!(
///     bad_request_validation,
///     causes: [Cause::new("email", "invalid email format")];
///     "cannot register {name}"
/// );
/// assert_eq!(err.causes().len(), 1);
/// ```
#[macro_export]
macro_rules! rest_error {
    ($constructor:ident, causes: $causes:expr; $($arg:tt)+) => {
        $crate::RestError::$constructor(::std::format!($($arg)+), $causes)
    };
    ($constructor:ident, $($arg:tt)+) => {
        $crate::RestError::$constructor(::std::format!($($arg)+))
    };
}
