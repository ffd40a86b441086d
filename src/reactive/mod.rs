//! Explicit change propagation for derived dashboard values.
//!
//! Upstream values are [`Reading`]s that arrive independently and in any
//! order. A [`Derived`] node declares the fields it depends on and is
//! recomputed synchronously when one of them changes. Recomputing with an
//! input set equal to the previous one is a no-op, so re-delivered reads
//! have no effect.

pub mod dashboard;

use std::fmt::Debug;

use crate::calc::CalcError;
use crate::model::Field;

pub use dashboard::{Dashboard, DashboardView};

/// Latest known value of an upstream read plus whether a refresh is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading<T> {
    pub value: Option<T>,
    pub loading: bool,
}

impl<T> Default for Reading<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> Reading<T> {
    /// Not requested (e.g. an account read with no account connected).
    pub fn idle() -> Self {
        Reading {
            value: None,
            loading: false,
        }
    }

    pub fn ready(value: T) -> Self {
        Reading {
            value: Some(value),
            loading: false,
        }
    }

    /// Mark a refresh as started. The previous value stays visible.
    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn resolve(&mut self, value: T) {
        self.value = Some(value);
        self.loading = false;
    }

    /// A refresh failed; keep the last value.
    pub fn fail(&mut self) {
        self.loading = false;
    }
}

/// A value derived from a fixed set of upstream fields.
#[derive(Debug, Clone)]
pub struct Derived<I, T> {
    name: &'static str,
    deps: &'static [Field],
    last_inputs: Option<I>,
    value: T,
}

impl<I, T> Derived<I, T>
where
    I: Clone + PartialEq + Debug,
    T: Clone + Debug,
{
    pub fn new(name: &'static str, deps: &'static [Field], initial: T) -> Self {
        Derived {
            name,
            deps,
            last_inputs: None,
            value: initial,
        }
    }

    pub fn depends_on(&self, field: Field) -> bool {
        self.deps.contains(&field)
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Recompute from a freshly gathered input set.
    ///
    /// `None` means a required input is missing: the value is held.
    /// Returns `true` when the value was replaced.
    pub fn update<F>(&mut self, inputs: Option<I>, compute: F) -> bool
    where
        F: FnOnce(&I) -> Result<T, CalcError>,
    {
        let Some(inputs) = inputs else {
            tracing::trace!(node = self.name, "inputs incomplete, holding value");
            return false;
        };
        if self.last_inputs.as_ref() == Some(&inputs) {
            return false;
        }
        let result = compute(&inputs);
        self.last_inputs = Some(inputs);
        match result {
            Ok(value) => {
                tracing::debug!(node = self.name, value = ?value, "recomputed");
                self.value = value;
                true
            }
            Err(e) => {
                tracing::warn!(node = self.name, error = %e, "recompute failed, holding last value");
                false
            }
        }
    }
}
