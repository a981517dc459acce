mod audit;
mod item;

pub use audit::*;
pub use item::*;
