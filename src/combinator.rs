//! Primitive parser constructors and the combinator library built on them.
//!
//! Everything here composes [`Parser`] values; nothing holds state of its
//! own. Grammar-level parsers are expected to wrap their entry points in
//! [`padded`] so surrounding whitespace never leaks into the grammar rules.

use crate::error::ParseError;
use crate::monadic::map_m;
use crate::outcome::Outcome;
use crate::pair::Pair;
use crate::parser::{Parser, ParserMonad};
use crate::seq::Seq;

/// Always succeeds, consumes nothing, produces the unit marker.
pub fn unit() -> Parser<()> {
    Parser::new(|input| Outcome::Success(Pair::new((), input)))
}

/// Always fails with `error`, consuming nothing.
pub fn fail<T: Clone + 'static>(error: ParseError) -> Parser<T> {
    Parser::new(move |_input| Outcome::Failure(error.clone()))
}

/// Consumes exactly one character equal to `expected`.
pub fn expect_char(expected: char) -> Parser<char> {
    Parser::new(move |input: Seq<char>| {
        if input.is_empty() {
            return Outcome::Failure(ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            });
        }
        let found = *input.head();
        if found != expected {
            return Outcome::Failure(ParseError::Unexpected {
                expected: expected.to_string(),
                found,
                rest: input.mk_string(""),
            });
        }
        Outcome::Success(Pair::new(expected, input.tail()))
    })
}

/// Matches any single character out of `candidates`, tried in order.
///
/// # Panics
///
/// Panics when `candidates` is empty; a choice over nothing is a grammar
/// construction bug, not a parse failure.
pub fn any_char_of(candidates: &str) -> Parser<char> {
    let mut chars = candidates.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => panic!("`any_char_of` requires at least one candidate character"),
    };
    chars.fold(expect_char(first), |parser, c| {
        parser.or(move || expect_char(c))
    })
}

/// Matches `literal`'s characters in order at the front of the input,
/// producing the literal back on success.
pub fn expect_string(literal: &str) -> Parser<String> {
    let chars = Seq::from(literal);
    map_m::<ParserMonad, char, char>(|c| expect_char(*c), &chars)
        .map(|matched| matched.mk_string(""))
}

/// Runs `parser` zero or more times, collecting the values in match order.
///
/// Never fails: zero matches succeed with an empty sequence and the input
/// untouched. After the last success the failing attempt is discarded and
/// the input position from just before it is kept.
///
/// The repetition stops only when an attempt fails, so a parser that
/// succeeds without consuming input (`many(spaces())` for instance) loops
/// forever. Pass parsers that consume at least one character per match.
pub fn many<A: Clone + 'static>(parser: &Parser<A>) -> Parser<Seq<A>> {
    let parser = parser.clone();
    Parser::new(move |input| {
        let mut collected = Seq::new();
        let mut rest = input;
        loop {
            match parser.run(rest.clone()) {
                Outcome::Success(pair) => {
                    collected = collected.push_front(pair.first);
                    rest = pair.second;
                }
                Outcome::Failure(_) => break,
            }
        }
        Outcome::Success(Pair::new(collected.reverse(), rest))
    })
}

/// Like [`many`], but the first attempt must succeed.
pub fn many1<A: Clone + 'static>(parser: &Parser<A>) -> Parser<Seq<A>> {
    let parser = parser.clone();
    Parser::new(move |input| {
        let first = match parser.run(input) {
            Outcome::Success(pair) => pair,
            Outcome::Failure(error) => return Outcome::Failure(error),
        };
        let mut collected = Seq::singleton(first.first);
        let mut rest = first.second;
        loop {
            match parser.run(rest.clone()) {
                Outcome::Success(pair) => {
                    collected = collected.push_front(pair.first);
                    rest = pair.second;
                }
                Outcome::Failure(_) => break,
            }
        }
        Outcome::Success(Pair::new(collected.reverse(), rest))
    })
}

/// Like [`many`], but the matched values are discarded.
pub fn skip_many<A: Clone + 'static>(parser: &Parser<A>) -> Parser<()> {
    let parser = parser.clone();
    Parser::new(move |input| {
        let mut rest = input;
        loop {
            match parser.run(rest.clone()) {
                Outcome::Success(pair) => rest = pair.second,
                Outcome::Failure(_) => break,
            }
        }
        Outcome::Success(Pair::new((), rest))
    })
}

/// Consumes and discards any run of whitespace characters.
pub fn spaces() -> Parser<()> {
    skip_many(&any_char_of(" \t\r\n"))
}

pub fn digit() -> Parser<char> {
    any_char_of("0123456789")
}

/// One or more digits, read as a decimal integer.
pub fn int_number() -> Parser<i64> {
    many1(&digit()).flat_map(|digits| {
        let text = digits.mk_string("");
        match text.parse::<i64>() {
            Ok(value) => Parser::pure(value),
            Err(_) => fail(ParseError::MalformedNumber { text }),
        }
    })
}

/// A decimal number with an optional fractional part; a bare integer is a
/// valid double.
pub fn double_number() -> Parser<f64> {
    let digits = many1(&digit());
    let fractional = digits
        .and(|| expect_char('.'))
        .map(|pair| pair.first.append(&Seq::singleton(pair.second)))
        .and(|| many1(&digit()))
        .map(|pair| pair.first.append(&pair.second));
    fractional
        .or(move || digits.clone())
        .flat_map(|chars| {
            let text = chars.mk_string("");
            match text.parse::<f64>() {
                Ok(value) => Parser::pure(value),
                Err(_) => fail(ParseError::MalformedNumber { text }),
            }
        })
}

/// Zero or more characters from a restricted alphanumeric/punctuation
/// class. Deliberately excludes quotes and structural characters; escape
/// sequences are not supported.
pub fn string_literal_body() -> Parser<String> {
    const BODY_CHARS: &str =
        "abcdefghijklmnopqrstuvwxyz ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789()#@-_+*&^%$!~?<>,.";
    many(&any_char_of(BODY_CHARS)).map(|chars| chars.mk_string(""))
}

/// Trims whitespace around `parser`: `spaces().then(parser).skip(spaces())`.
///
/// Grammar-level parsers use this at their own entry points so every rule
/// can assume it starts on meaningful input.
pub fn padded<A: Clone + 'static>(parser: &Parser<A>) -> Parser<A> {
    spaces().then(parser).skip(&spaces())
}
