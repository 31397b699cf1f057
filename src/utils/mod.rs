pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use time::weekday_name;
