//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod kind;
mod membership;
mod point;

pub use kind::MembershipKind;
pub use membership::{Membership, MembershipId};
pub use point::{AccumulationAmount, Point};
