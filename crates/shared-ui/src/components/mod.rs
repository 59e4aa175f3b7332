pub mod badge;
pub mod dashboard_section;
pub mod notice_badge;

pub use badge::*;
pub use dashboard_section::*;
pub use notice_badge::*;
