//! Static content backing every surface.

pub mod data;
