//! Application state shared across pages and components.
//!
//! ARCHITECTURE
//! ============
//! State structs are plain data with pure transition methods; they live in
//! `RwSignal`s provided via context from the root `App`. Network side effects
//! stay in `net` and in the `session` service, never inside the transitions,
//! which keeps every state change unit-testable on the host.

pub mod auth;
pub mod booking;
pub mod hotels;
pub mod prices;
pub mod reservations;
pub mod session;
pub mod ui;
