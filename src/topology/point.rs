//! `VertexId` / `TriangleId`: strong, zero-cost handles into the mesh arena
//!
//! The mesh owns its points and triangles in contiguous vectors. Evaluators
//! never hold references into those vectors; they take the mesh plus a handle
//! and look the entity up on demand. Handles are plain 0-based indices.
//!
//! This module provides:
//! - `repr(transparent)` newtypes around `u32` for both entity kinds, so a
//!   vertex index can never be passed where a triangle index is expected.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing, serde) so handles can be used in maps, sets, and printed easily.

use std::fmt;

macro_rules! arena_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates a handle from a raw 0-based index.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Returns the raw `u32` value of this handle.
            #[inline]
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Returns the handle as a `usize` slot into the owning arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        /// Prints only the raw integer.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(id: $name) -> usize {
                id.index()
            }
        }
    };
}

arena_handle!(
    /// Handle of a point (mesh vertex) in [`SurfaceMesh`](crate::topology::mesh::SurfaceMesh).
    VertexId
);

arena_handle!(
    /// Handle of a triangle in [`SurfaceMesh`](crate::topology::mesh::SurfaceMesh).
    TriangleId
);
