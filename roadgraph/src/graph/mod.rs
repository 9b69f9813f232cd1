//! Set of traits for defining a graph abstraction.
//! 
//! The module contains traits for defining directed and weighted graphs. Search algorithms in
//! [`crate::route`] are generic over these traits.
//! 
mod graph;
mod spatial;
mod weighted;

pub use graph::*;
pub use spatial::*;
pub use weighted::*;
