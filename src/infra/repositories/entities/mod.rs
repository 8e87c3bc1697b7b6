//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod interest;
pub mod user;
pub mod user_click;
pub mod user_interest;
