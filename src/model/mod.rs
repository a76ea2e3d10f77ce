pub mod aggregate;
pub mod column;
pub mod round;
pub mod row;
pub mod scorecard;
pub mod tournament;

pub use aggregate::*;
pub use column::*;
pub use round::*;
pub use row::*;
pub use scorecard::*;
pub use tournament::*;
