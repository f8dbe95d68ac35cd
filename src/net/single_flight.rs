//! Single-flight coalescing for the token refresh call.
//!
//! DESIGN
//! ======
//! Any number of requests can hit a 401 on the same expired access token in
//! the same tick. All of them must observe one refresh outcome, so the
//! in-flight refresh future is stored as a `Shared` handle that later joiners
//! clone instead of starting their own flight. The slot clears itself when
//! the flight completes, so a later expiry starts fresh.

#[cfg(test)]
#[path = "single_flight_test.rs"]
mod single_flight_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

/// At-most-one in-flight async operation whose result is shared by all
/// concurrent callers.
///
/// Single-threaded by construction (WASM event loop); interior mutability is
/// a `RefCell`, never held across an await.
pub struct SingleFlight<T: Clone + 'static> {
    in_flight: RefCell<Option<Shared<LocalBoxFuture<'static, T>>>>,
}

impl<T: Clone + 'static> SingleFlight<T> {
    pub fn new() -> Rc<Self> {
        Rc::new(Self { in_flight: RefCell::new(None) })
    }

    /// Join the in-flight operation, starting one via `start` if none is
    /// running. `start` is only invoked when this call opens a new flight.
    pub fn join<F, Fut>(self: &Rc<Self>, start: F) -> Shared<LocalBoxFuture<'static, T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + 'static,
    {
        if let Some(existing) = self.in_flight.borrow().as_ref() {
            return existing.clone();
        }
        let slot = Rc::clone(self);
        let inner = start();
        let flight = async move {
            let out = inner.await;
            slot.in_flight.borrow_mut().take();
            out
        }
        .boxed_local()
        .shared();
        *self.in_flight.borrow_mut() = Some(flight.clone());
        flight
    }

    /// Whether a flight is currently running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.borrow().is_some()
    }
}
