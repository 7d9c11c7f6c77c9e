pub mod alert;
pub mod analytics;
pub mod camera;
pub mod monitor;
pub mod notify;
pub mod page;

pub use alert::*;
pub use analytics::*;
pub use camera::*;
pub use monitor::*;
pub use notify::*;
pub use page::*;
