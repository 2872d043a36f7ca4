pub mod table;
pub mod timetable;

pub use table::*;
pub use timetable::*;
