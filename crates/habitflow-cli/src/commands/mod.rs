pub mod feedback;
pub mod schedule;
pub mod stats;
