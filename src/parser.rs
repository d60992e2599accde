use crate::monadic::{self, Monadic};
use crate::outcome::Outcome;
use crate::pair::Pair;
use crate::seq::Seq;
use std::rc::Rc;

type ParseFn<T> = dyn Fn(Seq<char>) -> Outcome<Pair<T, Seq<char>>>;

/// An input-consuming computation: a pure function from the remaining input
/// to an [`Outcome`] of the produced value paired with whatever input is
/// left.
///
/// Running a parser never mutates the input sequence, and running it twice
/// on the same input yields the same outcome. That referential transparency
/// is what makes backtracking in [`or`](Parser::or) safe: a failed first
/// alternative cannot have consumed or corrupted anything the second
/// alternative observes.
///
/// Combinators never reach into a parser's internals; they compose by
/// building new `Parser` values that close over the originals, so every
/// parser stays independently reusable. Cloning shares the wrapped function.
pub struct Parser<T> {
    run_fn: Rc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            run_fn: Rc::clone(&self.run_fn),
        }
    }
}

impl<T: Clone + 'static> Parser<T> {
    pub fn new(f: impl Fn(Seq<char>) -> Outcome<Pair<T, Seq<char>>> + 'static) -> Self {
        Parser { run_fn: Rc::new(f) }
    }

    /// A parser that always succeeds with `value` and consumes nothing.
    pub fn pure(value: T) -> Self {
        Parser::new(move |input| Outcome::Success(Pair::new(value.clone(), input)))
    }

    /// Defers construction until run time.
    ///
    /// Grammars that reference themselves, directly or through another rule,
    /// must break the construction cycle somewhere; a `lazy` wrapper (or the
    /// thunks taken by [`or`](Parser::or) and [`and`](Parser::and)) invokes
    /// `build` only at the moment the branch is actually needed.
    pub fn lazy(build: impl Fn() -> Parser<T> + 'static) -> Self {
        Parser::new(move |input| build().run(input))
    }

    /// The sole execution entry point.
    pub fn run(&self, input: Seq<char>) -> Outcome<Pair<T, Seq<char>>> {
        (self.run_fn)(input)
    }

    /// Convenience overload: tokenizes `input` into characters first.
    pub fn run_str(&self, input: &str) -> Outcome<Pair<T, Seq<char>>> {
        self.run(Seq::from(input))
    }

    /// Applies `f` to the produced value on success; failure passes through.
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(T) -> U + 'static) -> Parser<U> {
        let inner = Rc::clone(&self.run_fn);
        Parser::new(move |input| inner(input).map(|pair| Pair::new(f(pair.first), pair.second)))
    }

    /// Monadic bind: on success, `f` builds the next parser from the value,
    /// and that parser runs against the remaining input. On failure `f` is
    /// never invoked. This is the basis for all context-sensitive
    /// composition.
    pub fn flat_map<U: Clone + 'static>(&self, f: impl Fn(T) -> Parser<U> + 'static) -> Parser<U> {
        let inner = Rc::clone(&self.run_fn);
        Parser::new(move |input| match inner(input) {
            Outcome::Success(pair) => f(pair.first).run(pair.second),
            Outcome::Failure(error) => Outcome::Failure(error),
        })
    }

    /// Ordered choice. Runs `self`; on failure, builds the alternative and
    /// runs it against the original, unconsumed input. The first successful
    /// alternative wins. When both fail, the alternative's failure is
    /// reported.
    pub fn or(&self, other: impl Fn() -> Parser<T> + 'static) -> Parser<T> {
        let inner = Rc::clone(&self.run_fn);
        Parser::new(move |input: Seq<char>| match inner(input.clone()) {
            success @ Outcome::Success(_) => success,
            Outcome::Failure(_) => other().run(input),
        })
    }

    /// Sequential composition requiring both parsers to succeed; the result
    /// pairs both values, and the remaining input is whatever the second
    /// parser leaves.
    pub fn and<U: Clone + 'static>(
        &self,
        other: impl Fn() -> Parser<U> + 'static,
    ) -> Parser<Pair<T, U>> {
        monadic::lift2::<ParserMonad, T, U, Pair<T, U>>(
            Pair::new,
            self.clone(),
            Parser::lazy(other),
        )
    }

    /// Runs both in sequence, keeping only `other`'s result.
    pub fn then<U: Clone + 'static>(&self, other: &Parser<U>) -> Parser<U> {
        monadic::lift2::<ParserMonad, T, U, U>(|_, second| second, self.clone(), other.clone())
    }

    /// Runs both in sequence, keeping only `self`'s result. The usual way to
    /// consume and drop delimiters.
    pub fn skip<U: Clone + 'static>(&self, other: &Parser<U>) -> Parser<T> {
        monadic::lift2::<ParserMonad, T, U, T>(|first, _| first, self.clone(), other.clone())
    }
}

/// `Parser`'s instance of the generic sequencing algorithm.
pub struct ParserMonad;

impl Monadic for ParserMonad {
    type Wrapped<T: Clone + 'static> = Parser<T>;

    fn pure<T: Clone + 'static>(value: T) -> Parser<T> {
        Parser::pure(value)
    }

    fn map<A, B>(action: Parser<A>, f: impl Fn(A) -> B + 'static) -> Parser<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        action.map(f)
    }

    fn flat_map<A, B>(action: Parser<A>, f: impl Fn(A) -> Parser<B> + 'static) -> Parser<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        action.flat_map(f)
    }
}
