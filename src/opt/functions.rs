//! Free functions over [`Opt`].
//!
//! `map` and `and_then` are the point-free forms of the methods of the same
//! name. Unlike the methods they always produce an explicit result: an empty
//! input of either kind becomes explicit `None`. The `index_*`
//! helpers build total lookup functions that compose with
//! [`Opt::and_then`].

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::Opt;

/// Applies `function` to the value inside `option`.
///
/// Like [`Opt::map`], except that an unset input yields explicit `None`.
///
/// # Examples
///
/// ```rust
/// use tristate::{Opt, map};
///
/// assert_eq!(map(Opt::some("Hello, World!"), str::len), Opt::some(13));
/// assert_eq!(map(Opt::<&str>::none(), str::len), Opt::none());
/// assert!(map(Opt::<&str>::default(), str::len).is_explicit());
/// ```
#[inline]
pub fn map<T, U, F>(option: Opt<T>, function: F) -> Opt<U>
where
    F: FnOnce(T) -> U,
{
    match option {
        Opt::Some(value) => Opt::Some(function(value)),
        Opt::None | Opt::Unset => Opt::None,
    }
}

/// Chains `function` after `option`.
///
/// Like [`Opt::and_then`], except that an unset input yields explicit `None`.
///
/// # Examples
///
/// ```rust
/// use tristate::{Opt, and_then};
///
/// let first_char = |s: &str| s.chars().next().map_or(Opt::none(), Opt::some);
///
/// assert_eq!(and_then(Opt::some("apple"), first_char), Opt::some('a'));
/// assert_eq!(and_then(Opt::some(""), first_char), Opt::none());
/// ```
#[inline]
pub fn and_then<T, U, F>(option: Opt<T>, function: F) -> Opt<U>
where
    F: FnOnce(T) -> Opt<U>,
{
    match option {
        Opt::Some(value) => function(value),
        Opt::None | Opt::Unset => Opt::None,
    }
}

/// Returns a lookup function yielding `Some` for an in-bounds index and
/// `None` otherwise.
///
/// Negative indexes are out of bounds.
///
/// # Examples
///
/// ```rust
/// use tristate::{Opt, index_slice};
///
/// let values = [10, 40, 30];
/// let lookup = index_slice(&values);
///
/// assert_eq!(lookup(1), Opt::some(40));
/// assert_eq!(lookup(3), Opt::none());
/// assert_eq!(lookup(-1), Opt::none());
/// assert_eq!(Opt::some(0).and_then(index_slice(&values)), Opt::some(10));
/// ```
pub fn index_slice<T: Clone>(slice: &[T]) -> impl Fn(isize) -> Opt<T> + '_ {
    move |index| {
        usize::try_from(index)
            .ok()
            .and_then(|position| slice.get(position))
            .map_or(Opt::None, |value| Opt::Some(value.clone()))
    }
}

/// Returns a lookup function yielding `Some` for a present key and `None`
/// otherwise.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use tristate::{Opt, index_map};
///
/// let map = HashMap::from([(7, 5)]);
///
/// assert_eq!(index_map(&map)(7), Opt::some(5));
/// assert_eq!(index_map(&map)(1), Opt::none());
/// assert_eq!(Opt::some(7).and_then(index_map(&map)), Opt::some(5));
/// ```
pub fn index_map<K, V, S>(map: &HashMap<K, V, S>) -> impl Fn(K) -> Opt<V> + '_
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    move |key| Opt::from_ref(map.get(&key))
}
