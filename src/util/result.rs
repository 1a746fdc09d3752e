use std::error::Error;

/// Panicking access to the value of a fallible operation, for methods which can only fail when the
/// caller breaks their contract (e.g. indexing out of bounds).
pub(crate) trait ResultExtension<T> {
    /// Returns the contained value, or panics with the error's own message.
    ///
    /// # Panics
    /// Panics if self holds an error.
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
