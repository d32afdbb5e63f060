//! Application services and ports.

#![forbid(unsafe_code)]

mod membership_ports;
mod membership_service;

pub use membership_ports::{MembershipRepository, NewMembership};
pub use membership_service::{MembershipRegistration, MembershipService};
