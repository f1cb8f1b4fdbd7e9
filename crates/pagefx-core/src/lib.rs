pub mod anchor;
pub mod constants;
pub mod field;
pub mod motion;
pub mod parallax;
pub mod params;
pub mod particle;
pub mod reveal;

pub use anchor::*;
pub use constants::*;
pub use field::*;
pub use motion::*;
pub use parallax::*;
pub use params::*;
pub use particle::*;
pub use reveal::*;
