// Domain layer: menu model and the terminal port. No dependencies beyond std.

pub mod model;
pub mod ports;
