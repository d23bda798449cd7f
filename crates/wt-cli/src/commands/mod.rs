//! CLI subcommand implementations.

pub mod add;
pub mod between;
pub mod check;
pub mod remind;
pub mod shift;
pub mod status;
pub mod util;
