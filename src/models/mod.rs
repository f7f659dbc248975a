pub mod generate;
pub mod github;

pub use generate::*;
pub use github::*;
