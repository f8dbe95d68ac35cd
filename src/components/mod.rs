//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render booking and list surfaces while reading/writing shared
//! state from Leptos context providers.

pub mod booking_modal;
pub mod hotel_card;
