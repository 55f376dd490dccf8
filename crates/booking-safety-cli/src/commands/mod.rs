pub mod compute;
pub mod history;
pub mod tables;
