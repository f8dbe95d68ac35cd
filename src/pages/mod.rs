pub mod admin;
pub mod dashboard;
pub mod hotel_admin;
pub mod login;
