pub mod forms;
pub mod results;
pub mod tools;
