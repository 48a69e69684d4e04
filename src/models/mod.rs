pub mod agent;
pub mod alert;

pub use agent::*;
pub use alert::*;
