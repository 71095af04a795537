pub mod animation;
pub mod capture;
pub mod constants;
pub mod field;
pub mod gesture;
pub mod mode;
pub mod scene;
pub mod session;

pub use animation::*;
pub use capture::*;
pub use constants::*;
pub use field::*;
pub use gesture::*;
pub use mode::*;
pub use scene::*;
pub use session::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
