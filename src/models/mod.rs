pub mod city;
pub mod filters;
pub mod trip;

pub use city::City;
pub use filters::{DaySelection, FilterPreset, Filters, MonthSelection, Selection};
pub use trip::Trip;
