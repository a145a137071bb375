pub mod columns;
pub mod feedback;
pub mod options;
pub mod picker;
pub mod sequence;
pub mod submission;
