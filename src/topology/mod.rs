//! Mesh storage: arena handles, feature tags and the surface mesh container.

pub mod mesh;
pub mod point;
pub mod tags;
