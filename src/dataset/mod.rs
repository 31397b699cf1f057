pub mod loader;
pub mod table;

pub use loader::{DatasetLoader, LoadedData};
pub use table::{RawTable, TabularView, TripTable};
