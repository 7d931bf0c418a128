pub mod campus;
pub mod rating;
pub mod report;
pub mod roster;
