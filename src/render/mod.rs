//! Draw scheduling and atlas lookup handed to an external renderer

pub mod atlas;
pub mod scheduler;
pub mod cube;

pub use atlas::{AtlasCell, FaceAtlasMapper, FaceUv};
pub use scheduler::{build_frame, DrawInstruction, RenderPass, RenderScheduler};
pub use cube::{cube_vertices, CubeVertex};
