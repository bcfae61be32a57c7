pub mod chart;
pub mod credit;
pub mod widget;

pub use chart::*;
pub use credit::*;
pub use widget::*;
