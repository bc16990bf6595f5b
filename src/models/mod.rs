//! Data models

pub mod parameter;
pub mod series;
pub mod reading;
pub mod prediction;
pub mod map;
pub mod event;
pub mod assistant;

pub use parameter::*;
pub use series::*;
pub use reading::*;
pub use prediction::*;
pub use map::*;
pub use event::*;
pub use assistant::*;
