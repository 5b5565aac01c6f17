//! Fixture helpers reachable from [`TestContext`](crate::TestContext)
//! accessors.

pub mod recipe;
pub mod user;
