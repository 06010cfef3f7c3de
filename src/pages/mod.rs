//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns its form state and API calls. Message and validation rules
//! live in plain functions next to the component so they are testable
//! without a browser.

pub mod add_hotel;
pub mod home;
pub mod hotel_details;
pub mod hotels;
pub mod login;
pub mod register;
pub mod travel_agents;
pub mod user_approval;
