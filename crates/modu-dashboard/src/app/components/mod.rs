pub mod activity_list;
pub mod bark_sidebar;
pub mod clock;
pub mod cta_panel;
pub mod header;
pub mod icons;
pub mod insight_panel;
pub mod navbar;
pub mod tool_scroller;

pub use activity_list::*;
pub use bark_sidebar::*;
pub use clock::*;
pub use cta_panel::*;
pub use header::*;
pub use insight_panel::*;
pub use navbar::*;
pub use tool_scroller::*;
