//! The generic monadic-sequencing algorithm.
//!
//! "Run these actions in order, stop at the first failure, collect the
//! results" is implemented exactly once here and reused by every repetition
//! and sequencing combinator, so failure propagation and result ordering
//! cannot drift apart between them. [`Parser`](crate::parser::Parser)
//! implements the trait through [`ParserMonad`](crate::parser::ParserMonad)
//! and [`Seq`](crate::seq::Seq) through [`SeqMonad`](crate::seq::SeqMonad);
//! any future wrapped-value type can join by implementing [`Monadic`].

use crate::seq::Seq;
use std::rc::Rc;

/// A family of wrapped-value types supporting `pure`, `map` and `flat_map`.
///
/// Implementors are zero-sized markers; the generic associated type
/// `Wrapped<T>` names the concrete wrapper. No runtime-checked supertype is
/// involved, each implementation stands alone.
pub trait Monadic {
    type Wrapped<T: Clone + 'static>: Clone + 'static;

    /// Lifts a plain value into the wrapper without touching any state.
    fn pure<T: Clone + 'static>(value: T) -> Self::Wrapped<T>;

    /// Applies a plain function to the wrapped value.
    fn map<A, B>(action: Self::Wrapped<A>, f: impl Fn(A) -> B + 'static) -> Self::Wrapped<B>
    where
        A: Clone + 'static,
        B: Clone + 'static;

    /// Monadic bind: feeds the wrapped value into `f`, which decides the
    /// next action.
    fn flat_map<A, B>(
        action: Self::Wrapped<A>,
        f: impl Fn(A) -> Self::Wrapped<B> + 'static,
    ) -> Self::Wrapped<B>
    where
        A: Clone + 'static,
        B: Clone + 'static;
}

/// Runs `first`, then `second`, and combines their results with `f`.
///
/// Sequential composition (`and`, `then`, `skip`) is this function with `f`
/// picking the tupled, second, or first result.
pub fn lift2<M, A, B, C>(
    f: impl Fn(A, B) -> C + 'static,
    first: M::Wrapped<A>,
    second: M::Wrapped<B>,
) -> M::Wrapped<C>
where
    M: Monadic,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    let f = Rc::new(f);
    M::flat_map(first, move |a| {
        let f = Rc::clone(&f);
        M::map(second.clone(), move |b| f(a.clone(), b))
    })
}

/// Evaluates each action left to right, propagating the first failure, and
/// collects the values in their original order.
pub fn sequence<M, B>(actions: Seq<M::Wrapped<B>>) -> M::Wrapped<Seq<B>>
where
    M: Monadic,
    B: Clone + 'static,
{
    let mut collected = M::pure(Seq::new());
    let reversed = actions.reverse();
    for action in reversed.iter() {
        collected = lift2::<M, B, Seq<B>, Seq<B>>(
            |elem, rest| rest.push_front(elem),
            action.clone(),
            collected,
        );
    }
    collected
}

/// Maps each element to an action, then [`sequence`]s the actions.
pub fn map_m<M, A, B>(f: impl Fn(&A) -> M::Wrapped<B>, items: &Seq<A>) -> M::Wrapped<Seq<B>>
where
    M: Monadic,
    B: Clone + 'static,
{
    sequence::<M, B>(items.map(f))
}
