use crate::error::ParseError;

/// The result of running a parser: either a value, or a description of why
/// the input did not match.
///
/// Exactly one variant is ever populated, an `Outcome` is never mutated in
/// place, only replaced. Failures are ordinary values here; the only
/// panicking operation is [`Outcome::get`], which guards against programmer
/// error rather than bad input.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<V> {
    Success(V),
    Failure(ParseError),
}

impl<V> Outcome<V> {
    /// Applies `f` to the success value; a failure passes through untouched.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Unwraps the success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure. Calling code must check
    /// [`is_success`](Outcome::is_success) first; the combinators in this
    /// crate never trigger this themselves.
    pub fn get(self) -> V {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic!("called `Outcome::get` on a failure: {error}"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The failure's rendered message, or an empty string on success.
    pub fn error_message(&self) -> String {
        match self {
            Outcome::Success(_) => String::new(),
            Outcome::Failure(error) => error.to_string(),
        }
    }

    /// Bridges into `Result` for callers that propagate with `?`.
    pub fn into_result(self) -> Result<V, ParseError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eof(expected: &str) -> ParseError {
        ParseError::UnexpectedEnd {
            expected: expected.to_string(),
        }
    }

    #[test]
    fn test_map_on_success() {
        let outcome = Outcome::Success(2).map(|n| n * 10);
        assert_eq!(outcome, Outcome::Success(20));
    }

    #[test]
    fn test_map_preserves_failure() {
        let outcome: Outcome<i32> = Outcome::Failure(eof("x"));
        assert_eq!(outcome.clone().map(|n| n + 1), outcome);
    }

    #[test]
    fn test_map_composes() {
        let f = |n: i32| n + 1;
        let g = |n: i32| n * 3;
        let outcome = Outcome::Success(4);
        assert_eq!(
            outcome.clone().map(f).map(g),
            outcome.map(|n| g(f(n)))
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(Outcome::Success(1).error_message(), "");
        let failed: Outcome<i32> = Outcome::Failure(eof("a"));
        assert!(failed.error_message().contains("end of input"));
    }

    #[test]
    #[should_panic(expected = "called `Outcome::get` on a failure")]
    fn test_get_on_failure_panics() {
        let failed: Outcome<i32> = Outcome::Failure(eof("a"));
        failed.get();
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::Success(5).into_result(), Ok(5));
        let failed: Outcome<i32> = Outcome::Failure(eof("a"));
        assert!(failed.into_result().is_err());
    }
}
