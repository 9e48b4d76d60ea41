pub mod unit;
pub mod topology;

pub use unit::{Unit, UnitRole};
pub use topology::Topology;
