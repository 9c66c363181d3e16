// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Storage-agnostic read/replace access to host-owned state.

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;

/// A slot the host owns and the handlers read and replace.
///
/// Reads return an owned snapshot; writes replace the whole value. There is no
/// partial in-place update, so a host that batches writes never observes a
/// half-applied event.
pub trait StateCell<T> {
    /// Returns a snapshot of the current value.
    fn get(&self) -> T;
    /// Replaces the current value.
    fn set(&self, value: T);
}

impl<T: Clone> StateCell<T> for RefCell<T> {
    fn get(&self) -> T {
        self.borrow().clone()
    }

    fn set(&self, value: T) {
        self.replace(value);
    }
}

impl<T: Copy> StateCell<T> for Cell<T> {
    fn get(&self) -> T {
        Self::get(self)
    }

    fn set(&self, value: T) {
        Self::set(self, value);
    }
}

impl<T, C: StateCell<T> + ?Sized> StateCell<T> for &C {
    fn get(&self) -> T {
        (**self).get()
    }

    fn set(&self, value: T) {
        (**self).set(value);
    }
}

impl<T, C: StateCell<T> + ?Sized> StateCell<T> for Rc<C> {
    fn get(&self) -> T {
        (**self).get()
    }

    fn set(&self, value: T) {
        (**self).set(value);
    }
}

/// A [`StateCell`] made from a getter and a setter closure.
///
/// Use this to plug a UI framework's state slot in directly:
///
/// ```
/// use core::cell::RefCell;
/// use infinitree_interaction::{FnCell, StateCell};
///
/// let slot = RefCell::new(1);
/// let cell = FnCell::new(|| *slot.borrow(), |v| *slot.borrow_mut() = v);
/// cell.set(cell.get() + 1);
/// assert_eq!(*slot.borrow(), 2);
/// ```
pub struct FnCell<G, S> {
    get: G,
    set: S,
}

impl<G, S> FnCell<G, S> {
    /// Creates a cell from a `get` and a `set` closure.
    pub fn new(get: G, set: S) -> Self {
        Self { get, set }
    }
}

impl<T, G: Fn() -> T, S: Fn(T)> StateCell<T> for FnCell<G, S> {
    fn get(&self) -> T {
        (self.get)()
    }

    fn set(&self, value: T) {
        (self.set)(value);
    }
}

impl<G, S> fmt::Debug for FnCell<G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCell").finish_non_exhaustive()
    }
}
