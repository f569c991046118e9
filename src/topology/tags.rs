//! Feature tags carried by points and triangle edges.
//!
//! The same bit layout is used for both: a point inherits the tags of the
//! feature lines it lies on, and a triangle stores one tag per edge (edge `i`
//! is opposite vertex `i`).
//!
//! Quality evaluation only reads `REF` and `GEO`. The remaining bits belong to
//! the remeshing driver; they are stored and serialised unchanged and never
//! alter a score or an orientation test.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Classification bits of a mesh point.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct PointTag: u16 {
        /// Lies on a reference (user-labelled) edge.
        const REF = 1 << 0;
        /// Lies on a geometric ridge.
        const GEO = 1 << 1;
        /// Required: must not be moved or removed.
        const REQ = 1 << 2;
        /// Non-manifold.
        const NOM = 1 << 3;
        /// On the surface boundary.
        const BDY = 1 << 4;
        /// Corner.
        const CRN = 1 << 5;
    }
}

bitflags::bitflags! {
    /// Classification bits of a triangle edge.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct EdgeTag: u16 {
        const REF = 1 << 0;
        const GEO = 1 << 1;
        const REQ = 1 << 2;
        const NOM = 1 << 3;
        const BDY = 1 << 4;
    }
}

impl PointTag {
    /// True when the point sits on a feature line (ridge or reference edge)
    /// and therefore has no single well-defined surface normal.
    #[inline]
    pub fn is_edge(self) -> bool {
        self.intersects(PointTag::GEO | PointTag::REF)
    }
}

impl EdgeTag {
    /// True when the edge lies on a geometric ridge.
    #[inline]
    pub fn is_ridge(self) -> bool {
        self.contains(EdgeTag::GEO)
    }
}
