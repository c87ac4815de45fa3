pub mod prompt;
pub mod theme;
pub mod wizard;
