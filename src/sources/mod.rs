pub mod api;
pub mod file;
pub mod row;
pub mod traits;

pub use api::ApiSource;
pub use file::JsonFileSource;
pub use row::PropertyRow;
pub use traits::{published, PropertySource};
