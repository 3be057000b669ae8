pub mod constants;
pub mod geo;
pub mod registry;
pub mod selection;
pub mod view;

pub use geo::*;
pub use registry::*;
pub use selection::*;
pub use view::*;
