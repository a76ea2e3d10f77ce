pub mod cell;
pub mod row;
pub mod sort;
pub mod tournament;

pub use cell::*;
pub use row::*;
pub use sort::*;
