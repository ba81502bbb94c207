pub mod rank;
pub mod report;
pub mod search;
