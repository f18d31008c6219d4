// Domain layer: route collections and the classification record handed to
// the rendering side. No file IO here.

pub mod model;
