pub mod api_status;
pub mod bark;
pub mod dashboard;

pub use api_status::*;
pub use bark::*;
pub use dashboard::*;
