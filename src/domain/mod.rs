// Domain layer: entities exchanged with the studio API and the trait seams the
// rest of the crate depends on.

pub mod model;
pub mod ports;
