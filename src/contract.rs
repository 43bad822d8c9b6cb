//! Return-value contracts for caller-supplied callables
//!
//! Callables are statically typed, but what they hand back is checked after
//! they run, by type-erasing the result and downcasting it to the shape the
//! operation promised.

use std::any::Any;
use std::borrow::Cow;

use optional_types::{BoxError, Expected, OptionalError, Parameter, Result};

use crate::optional::Optional;

fn violation(method: Parameter, expected: Expected) -> OptionalError {
    let err = OptionalError::invalid_return_type(method, expected);
    err.log();
    err
}

fn supplied(err: BoxError) -> OptionalError {
    let err = OptionalError::Supplied(err);
    err.log();
    err
}

/// Require `returned` to be an `Optional<U>`.
pub(crate) fn expect_optional<U, R>(method: Parameter, returned: R) -> Result<Optional<U>>
where
    U: 'static,
    R: 'static,
{
    let returned: Box<dyn Any> = Box::new(returned);
    match returned.downcast::<Optional<U>>() {
        Ok(optional) => Ok(*optional),
        Err(_) => Err(violation(method, Expected::Optional)),
    }
}

/// Turn an error supplier's result into the error to propagate.
///
/// Error values become `Supplied` (an `OptionalError` passes through as
/// is). Strings convert into boxed errors too but are not error values, so
/// they are an `InvalidReturnType` for `errorSupplier`.
pub(crate) fn expect_error<R>(returned: R) -> OptionalError
where
    R: Into<BoxError> + 'static,
{
    let erased: &dyn Any = &returned;
    if erased.is::<&'static str>() || erased.is::<String>() || erased.is::<Cow<'static, str>>() {
        return violation(Parameter::ErrorSupplier, Expected::Error);
    }

    let err: BoxError = returned.into();
    match err.downcast::<OptionalError>() {
        Ok(err) => *err,
        Err(other) => supplied(other),
    }
}
