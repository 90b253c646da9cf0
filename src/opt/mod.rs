//! The tri-state optional value.
//!
//! This module provides [`Opt<T>`], an optional value that also remembers
//! whether its state was set on purpose. Every `Opt` is in one of three
//! states:
//!
//! - [`Opt::Unset`]: never touched. This is the [`Default`] value.
//! - [`Opt::None`]: explicitly empty.
//! - [`Opt::Some`]: explicitly present with a value.
//!
//! An implicit `Some` does not exist. The distinction between `Unset` and
//! `None` matters mostly for decoded values: a struct field that is missing
//! from a document stays `Unset`, while a field given as `null` becomes
//! `None`.
//!
//! For value comparison `Unset` and `None` are the same thing. Use
//! [`Opt::is_explicit`] to tell them apart.
//!
//! # Examples
//!
//! ```rust
//! use tristate::Opt;
//!
//! let implicit: Opt<String> = Opt::default();
//! let explicit: Opt<String> = Opt::none();
//!
//! assert_eq!(implicit, explicit);
//! assert!(!implicit.is_explicit());
//! assert!(explicit.is_explicit());
//!
//! let year = Opt::some(30).map(|age| 2025 - age);
//! assert_eq!(year.to_string(), "Some(1995)");
//! ```

mod functions;

pub use functions::{and_then, index_map, index_slice, map};

use std::fmt;
use std::hash::{Hash, Hasher};

/// An optional value that separates "unset" from "explicitly empty".
///
/// See the [module documentation](self) for the meaning of each state.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
#[derive(Clone, Copy, Debug, Default)]
pub enum Opt<T> {
    /// No state was ever set. Produced only by [`Default`].
    #[default]
    Unset,
    /// Explicitly empty.
    None,
    /// Explicitly present.
    Some(T),
}

/// Types that report their own validity.
///
/// Used by [`Opt::from_valid`] for payloads (message handles, lazily
/// initialized records) that may be structurally present but invalid.
pub trait Validity {
    /// Returns `true` if the value should be treated as present.
    fn is_valid(&self) -> bool;
}

impl<T> Opt<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an explicit `Some` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// let x = Opt::some(2);
    /// assert!(x.is_some());
    /// assert!(x.is_explicit());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an explicit `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// let x: Opt<i32> = Opt::none();
    /// assert!(x.is_none());
    /// assert!(x.is_explicit());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Returns `Some` if `ok` is `true`, `None` otherwise.
    ///
    /// Bridges APIs that return a value together with a success flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// assert_eq!(Opt::from_tuple(42, true), Opt::some(42));
    /// assert_eq!(Opt::from_tuple(0, false), Opt::none());
    /// ```
    #[inline]
    pub fn from_tuple(value: T, ok: bool) -> Self {
        if ok { Self::Some(value) } else { Self::None }
    }

    /// Returns `Some` with the boxed value, or `None` for a missing box.
    #[inline]
    pub fn from_box(boxed: Option<Box<T>>) -> Self {
        match boxed {
            Some(value) => Self::Some(*value),
            None => Self::None,
        }
    }

    /// Returns `Some` if the value reports itself as valid, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::{Opt, Validity};
    ///
    /// struct Handle(u32);
    ///
    /// impl Validity for Handle {
    ///     fn is_valid(&self) -> bool {
    ///         self.0 != 0
    ///     }
    /// }
    ///
    /// assert!(Opt::from_valid(Handle(7)).is_some());
    /// assert!(Opt::from_valid(Handle(0)).is_none());
    /// ```
    #[inline]
    pub fn from_valid(value: T) -> Self
    where
        T: Validity,
    {
        if value.is_valid() {
            Self::Some(value)
        } else {
            Self::None
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if the option holds a value.
    ///
    /// A `Some` is always explicit.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if the option holds a value matching `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// assert!(Opt::some(2).is_some_and(|x| x > 1));
    /// assert!(!Opt::some(0).is_some_and(|x| x > 1));
    /// assert!(!Opt::<i32>::none().is_some_and(|x| x > 1));
    /// ```
    #[inline]
    pub fn is_some_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::Unset | Self::None => false,
        }
    }

    /// Returns `true` if the option holds no value, explicit or not.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns `true` if the option is empty or holds a value matching
    /// `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// assert!(Opt::some(2).is_none_or(|x| x > 1));
    /// assert!(!Opt::some(0).is_none_or(|x| x > 1));
    /// assert!(Opt::<i32>::none().is_none_or(|x| x > 1));
    /// ```
    #[inline]
    pub fn is_none_or<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::Unset | Self::None => true,
        }
    }

    /// Reports whether the state was set on purpose, by a constructor or by
    /// decoding.
    ///
    /// If [`is_some`](Self::is_some) is `true`, this is `true` as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// assert!(!Opt::<i32>::default().is_explicit());
    /// assert!(Opt::<i32>::none().is_explicit());
    /// assert!(Opt::some(1).is_explicit());
    /// ```
    #[inline]
    pub const fn is_explicit(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Returns `true` for the default, never-set state.
    ///
    /// Handy as `#[serde(skip_serializing_if = "Opt::is_unset")]`.
    #[inline]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the contained value or `T::default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// assert_eq!(Opt::some(12).get_or_zero(), 12);
    /// assert_eq!(Opt::<i32>::none().get_or_zero(), 0);
    /// ```
    #[inline]
    pub fn get_or_zero(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Some(value) => value,
            Self::Unset | Self::None => T::default(),
        }
    }

    /// Returns the contained value and `true`, or a fresh `T::default()` and
    /// `false`.
    ///
    /// The default is built on every call, so mutating it never leaks into
    /// later calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// assert_eq!(Opt::some(42).try_get(), (42, true));
    /// assert_eq!(Opt::<i32>::none().try_get(), (0, false));
    /// ```
    #[inline]
    pub fn try_get(self) -> (T, bool)
    where
        T: Default,
    {
        match self {
            Self::Some(value) => (value, true),
            Self::Unset | Self::None => (T::default(), false),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the option holds no value. Calling this on an empty option
    /// is a programming error.
    #[inline]
    #[track_caller]
    pub fn must_get(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::Unset | Self::None => panic!("called `Opt::must_get` on an empty option"),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Unset | Self::None => default,
        }
    }

    /// Returns the contained value or computes one from `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// let k = 10;
    /// assert_eq!(Opt::some(4).get_or_else(|| 2 * k), 4);
    /// assert_eq!(Opt::none().get_or_else(|| 2 * k), 20);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::Unset | Self::None => default(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a contained value.
    ///
    /// An empty option keeps its state, so an `Unset` stays `Unset`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// let length = Opt::some("Hello, World!").map(str::len);
    /// assert_eq!(length, Opt::some(13));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Opt::Some(function(value)),
            Self::None => Opt::None,
            Self::Unset => Opt::Unset,
        }
    }

    /// Returns `other` if this option holds a value, otherwise `self`.
    #[inline]
    pub fn and<U>(self, other: Opt<U>) -> Opt<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Opt::None,
            Self::Unset => Opt::Unset,
        }
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// `function` is not called for an empty option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// let divide = |divider: i32| {
    ///     if divider == 0 { Opt::none() } else { Opt::some(42 / divider) }
    /// };
    ///
    /// assert_eq!(Opt::some(2).and_then(divide), Opt::some(21));
    /// assert_eq!(Opt::some(0).and_then(divide), Opt::none());
    /// assert_eq!(Opt::none().and_then(divide), Opt::none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Opt::None,
            Self::Unset => Opt::Unset,
        }
    }

    /// Returns `self` if it holds a value, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::Unset | Self::None => other,
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::Unset | Self::None => function(),
        }
    }

    /// Keeps a contained value only if it matches `predicate`.
    ///
    /// A rejected value becomes an explicit `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// let is_even = |n: &i32| n % 2 == 0;
    /// assert_eq!(Opt::some(4).filter(is_even), Opt::some(4));
    /// assert_eq!(Opt::some(3).filter(is_even), Opt::none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            other => other,
        }
    }

    /// Calls `function` with a reference to a contained value and returns the
    /// option unchanged.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(ref value) = self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Borrows the contained value, keeping the provenance of empty states.
    #[inline]
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Self::Some(value) => Opt::Some(value),
            Self::None => Opt::None,
            Self::Unset => Opt::Unset,
        }
    }

    /// Converts into a standard [`Option`], dropping the provenance.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::Unset | Self::None => None,
        }
    }

    /// Returns an iterator over the contained value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Returns an owned copy of the contained value on the heap.
    ///
    /// The box holds a clone: changing it never affects `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// let x = Opt::some("a".to_string());
    /// if let Some(mut boxed) = x.to_boxed() {
    ///     *boxed = "b".to_string();
    /// }
    /// assert_eq!(x, Opt::some("a".to_string()));
    /// ```
    #[inline]
    pub fn to_boxed(&self) -> Option<Box<T>>
    where
        T: Clone,
    {
        match self {
            Self::Some(value) => Some(Box::new(value.clone())),
            Self::Unset | Self::None => None,
        }
    }

    /// Returns a one-element vector for `Some`, an empty vector otherwise.
    #[inline]
    pub fn to_vec(self) -> Vec<T> {
        self.into_option().into_iter().collect()
    }
}

impl<T: Clone> Opt<T> {
    /// Returns `Some` with a clone of the referenced value, or `None` for a
    /// missing reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// let value = 42;
    /// assert_eq!(Opt::from_ref(Some(&value)), Opt::some(42));
    /// assert_eq!(Opt::<i32>::from_ref(None), Opt::none());
    /// ```
    #[inline]
    pub fn from_ref(reference: Option<&T>) -> Self {
        match reference {
            Some(value) => Self::Some(value.clone()),
            None => Self::None,
        }
    }
}

impl<T: Default + PartialEq> Opt<T> {
    /// Returns `None` if `value` equals `T::default()`, `Some` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tristate::Opt;
    ///
    /// assert_eq!(Opt::from_zero(0), Opt::none());
    /// assert_eq!(Opt::from_zero("foo"), Opt::some("foo"));
    /// assert_eq!(Opt::from_zero(""), Opt::none());
    /// ```
    #[inline]
    pub fn from_zero(value: T) -> Self {
        if value == T::default() {
            Self::None
        } else {
            Self::Some(value)
        }
    }
}

// =============================================================================
// Equality
// =============================================================================

impl<T: PartialEq> PartialEq for Opt<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => left == right,
            (Self::Some(_), _) | (_, Self::Some(_)) => false,
            _ => true,
        }
    }
}

impl<T: Eq> Eq for Opt<T> {}

impl<T: Hash> Hash for Opt<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().into_option().hash(state);
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::Unset | Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Standard conversions
// =============================================================================

impl<T> From<T> for Opt<T> {
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(option: Opt<T>) -> Self {
        option.into_option()
    }
}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Opt<i32>: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(Opt<String>: Clone, Send, Sync, Eq, Hash);

// =============================================================================
// Tests
// =============================================================================
