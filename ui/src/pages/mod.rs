//! Page components

pub mod home;
pub mod search;
pub mod tv;
