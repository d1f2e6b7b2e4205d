//! One module per subcommand.

pub mod alias;
pub mod completions;
pub mod exchange;
pub mod license;
pub mod pull;
pub mod push;
