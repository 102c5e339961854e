// Domain layer: the view pipeline's data model and the ports its collaborators implement.

pub mod model;
pub mod ports;
