pub mod catalog;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod marker;
pub mod mesh;
pub mod projection;
#[cfg(feature = "gpu")]
pub mod render;
pub mod scene;
pub mod session;
pub mod state;
pub mod texture;
pub mod ticker;
pub mod visualizer;

pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use controls::*;
pub use error::*;
pub use marker::*;
pub use mesh::*;
pub use projection::*;
pub use scene::*;
pub use session::*;
pub use state::*;
pub use texture::*;
pub use ticker::*;
pub use visualizer::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
