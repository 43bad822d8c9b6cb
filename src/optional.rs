//! The optional-value container
//!
//! `Optional<T>` is either present, holding a shared immutable payload, or
//! empty. Empty containers are all the same canonical instance; present
//! containers share identity only when one was derived from the other
//! (e.g. `filter` keeping the receiver).

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use optional_types::{BoxError, Expected, OptionalError, Parameter, Result};

use crate::contract;
use crate::equality::{DeepEqual, PartialEqComparator};

enum Slot<T> {
    Empty,
    Present(Arc<T>),
}

/// A container which may or may not hold a value.
///
/// Instances are only created through [`Optional::empty`], [`Optional::of`]
/// and [`Optional::of_nullable`] (or the equivalent `From<Option<T>>`
/// conversion). Cloning is cheap and keeps identity.
pub struct Optional<T> {
    slot: Slot<T>,
}

fn invoking(callable: Parameter) {
    tracing::trace!(callable = %callable, "invoking callable");
}

impl<T> Optional<T> {
    /// The canonical empty instance.
    pub const EMPTY: Self = Self { slot: Slot::Empty };

    // ============ 构造 ============

    /// Returns the canonical empty instance.
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    fn present(value: T) -> Self {
        Self {
            slot: Slot::Present(Arc::new(value)),
        }
    }

    /// Returns a new present instance wrapping `value`.
    ///
    /// Accepts a bare `T` or an `Option<T>`; an absent value is rejected
    /// rather than producing an empty container. Passing an `Option`
    /// usually needs the payload type spelled out (`Optional::<i32>::of(None)`).
    ///
    /// # Errors
    /// `InvalidArgument` for parameter `value` when `value` is `None`.
    pub fn of<V>(value: V) -> Result<Self>
    where
        V: Into<Option<T>>,
    {
        match value.into() {
            Some(value) => Ok(Self::present(value)),
            None => {
                let err = OptionalError::invalid_argument(Parameter::Value, Expected::NonNullish);
                err.log();
                Err(err)
            }
        }
    }

    /// Present when `value` is `Some`, otherwise the canonical empty instance.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::present(value),
            None => Self::EMPTY,
        }
    }

    // ============ 查询 ============

    /// `true` when a value is held.
    pub fn is_present(&self) -> bool {
        matches!(self.slot, Slot::Present(_))
    }

    /// `true` for the canonical empty instance; always `!is_present()`.
    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Reference identity: every empty container is the same instance, and
    /// present containers are the same instance when they share a payload
    /// allocation.
    pub fn same_instance(&self, other: &Self) -> bool {
        match (&self.slot, &other.slot) {
            (Slot::Empty, Slot::Empty) => true,
            (Slot::Present(left), Slot::Present(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Borrow the value, if present.
    pub fn as_option(&self) -> Option<&T> {
        match &self.slot {
            Slot::Present(value) => Some(&**value),
            Slot::Empty => None,
        }
    }

    fn equivalent<C>(&self, other: &Self, comparator: &C) -> bool
    where
        C: DeepEqual<T> + ?Sized,
    {
        if self.same_instance(other) {
            return true;
        }
        match (self.as_option(), other.as_option()) {
            (Some(left), Some(right)) => comparator.deep_equal(left, right),
            _ => false,
        }
    }

    // ============ 变换 ============

    /// Keeps the receiver when a value is present and `predicate` accepts
    /// it, otherwise returns the canonical empty instance.
    ///
    /// The predicate is never invoked on an empty receiver.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Some(value) = self.as_option() {
            invoking(Parameter::Predicate);
            if predicate(value) {
                return self.clone();
            }
        }
        Self::EMPTY
    }

    /// Applies `mapper` to a present value and wraps the result with
    /// [`Optional::of_nullable`].
    ///
    /// The mapper may return a bare `U` or an `Option<U>`; a `None` result
    /// yields the canonical empty instance. When the mapper returns an
    /// `Option`, the target type has to be named (`let m: Optional<U> = ..`).
    pub fn map<U, R, F>(&self, mapper: F) -> Optional<U>
    where
        R: Into<Option<U>>,
        F: FnOnce(&T) -> R,
    {
        match self.as_option() {
            Some(value) => {
                invoking(Parameter::Mapper);
                Optional::of_nullable(mapper(value).into())
            }
            None => Optional::EMPTY,
        }
    }

    /// Applies an `Optional`-bearing `mapper` to a present value.
    ///
    /// The mapper's result is checked after it runs: anything other than an
    /// `Optional<U>` is rejected, so a faulty mapper still executes (and may
    /// side-effect) before the error surfaces.
    ///
    /// # Errors
    /// `InvalidReturnType` for method `mapper` when the result is not an
    /// `Optional<U>`.
    pub fn flat_map<U, R, F>(&self, mapper: F) -> Result<Optional<U>>
    where
        U: 'static,
        R: 'static,
        F: FnOnce(&T) -> R,
    {
        match self.as_option() {
            Some(value) => {
                invoking(Parameter::Mapper);
                contract::expect_optional(Parameter::Mapper, mapper(value))
            }
            None => Ok(Optional::EMPTY),
        }
    }

    /// Returns the receiver when a value is present, otherwise the
    /// `Optional` produced by `supplier`.
    ///
    /// # Errors
    /// `InvalidReturnType` for method `supplier` when the supplier does not
    /// return an `Optional<T>`.
    pub fn or<R, F>(&self, supplier: F) -> Result<Self>
    where
        T: 'static,
        R: 'static,
        F: FnOnce() -> R,
    {
        if self.is_present() {
            return Ok(self.clone());
        }
        invoking(Parameter::Supplier);
        contract::expect_optional(Parameter::Supplier, supplier())
    }

    // ============ 取值 ============

    /// Returns the value.
    ///
    /// # Errors
    /// `ValuePresence` when empty.
    pub fn get(&self) -> Result<&T> {
        self.as_option().ok_or_else(|| {
            let err = OptionalError::ValuePresence;
            err.log();
            err
        })
    }

    /// Same contract as [`Optional::get`].
    pub fn or_else_throw(&self) -> Result<&T> {
        self.get()
    }

    /// Returns the value, or fails with the error produced by
    /// `error_supplier`.
    ///
    /// Any error type converts, as do `Box<dyn Error + Send + Sync>` and
    /// `anyhow::Error`. The produced error is returned as
    /// `OptionalError::Supplied` (an `OptionalError` is returned as is).
    /// Bare strings also convert into boxed errors but are not error values,
    /// so they are rejected after the supplier ran.
    ///
    /// # Errors
    /// The supplied error when empty, or `InvalidReturnType` for method
    /// `errorSupplier` when the supplier returned a string.
    pub fn or_else_get_throw<R, F>(&self, error_supplier: F) -> Result<&T>
    where
        R: Into<BoxError> + 'static,
        F: FnOnce() -> R,
    {
        match self.as_option() {
            Some(value) => Ok(value),
            None => {
                invoking(Parameter::ErrorSupplier);
                Err(contract::expect_error(error_supplier()))
            }
        }
    }

    /// Returns the value if present, otherwise `other` unchanged.
    pub fn or_else(&self, other: Option<T>) -> Option<T>
    where
        T: Clone,
    {
        match self.as_option() {
            Some(value) => Some(value.clone()),
            None => other,
        }
    }

    /// Returns the value if present, otherwise whatever `supplier` produces.
    pub fn or_else_get<F>(&self, supplier: F) -> Option<T>
    where
        T: Clone,
        F: FnOnce() -> Option<T>,
    {
        match self.as_option() {
            Some(value) => Some(value.clone()),
            None => {
                invoking(Parameter::Supplier);
                supplier()
            }
        }
    }

    /// Unwraps into a plain `Option`, cloning the payload only when it is
    /// still shared with another container.
    pub fn into_option(self) -> Option<T>
    where
        T: Clone,
    {
        match self.slot {
            Slot::Present(value) => {
                Some(Arc::try_unwrap(value).unwrap_or_else(|shared| (*shared).clone()))
            }
            Slot::Empty => None,
        }
    }

    // ============ 副作用 ============

    /// Runs `action` with the value if present. Its result is discarded.
    pub fn if_present<F, R>(&self, action: F)
    where
        F: FnOnce(&T) -> R,
    {
        if let Some(value) = self.as_option() {
            invoking(Parameter::Action);
            action(value);
        }
    }

    /// Runs `action` with the value if present, otherwise `empty_action`.
    /// Exactly one of the two runs.
    pub fn if_present_or_else<F, R, G, S>(&self, action: F, empty_action: G)
    where
        F: FnOnce(&T) -> R,
        G: FnOnce() -> S,
    {
        match self.as_option() {
            Some(value) => {
                invoking(Parameter::Action);
                action(value);
            }
            None => {
                invoking(Parameter::EmptyAction);
                empty_action();
            }
        }
    }
}

impl<T: 'static> Optional<T> {
    /// Deep equality against an arbitrary value.
    ///
    /// Identical instances are always equal. Otherwise `other` must be an
    /// `Optional<T>` (or a reference to one) whose payload equals this
    /// one's; anything else, an `Option<T>` included, compares unequal.
    ///
    /// Through `&dyn Any` only containers of the same `T` are recognized,
    /// so an empty `Optional<U>` of another type compares unequal here.
    /// [`Optional::equals_optional`] accepts any payload type.
    pub fn equals(&self, other: &dyn Any) -> bool
    where
        T: PartialEq,
    {
        self.equals_with(other, &PartialEqComparator)
    }

    /// [`Optional::equals`] with an injected comparator.
    pub fn equals_with<C>(&self, other: &dyn Any, comparator: &C) -> bool
    where
        C: DeepEqual<T> + ?Sized,
    {
        if let Some(other) = other.downcast_ref::<Optional<T>>() {
            return self.equivalent(other, comparator);
        }
        if let Some(other) = other.downcast_ref::<&'static Optional<T>>() {
            return self.equivalent(other, comparator);
        }
        false
    }

    /// Deep equality against a container of any payload type.
    ///
    /// All empty containers are the one canonical instance, so two empties
    /// are equal whatever their payload types. Present containers are equal
    /// only when `U` is `T` and the payloads are equal.
    pub fn equals_optional<U: 'static>(&self, other: &Optional<U>) -> bool
    where
        T: PartialEq,
    {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        self.equals(other)
    }
}

impl<T> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match &self.slot {
            Slot::Present(value) => Self {
                slot: Slot::Present(Arc::clone(value)),
            },
            Slot::Empty => Self::EMPTY,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equivalent(other, &PartialEqComparator)
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => write!(f, "Optional[{}]", value),
            None => f.write_str("Optional.empty"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Optional.empty"),
        }
    }
}
