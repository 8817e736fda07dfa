//! Tab-separated road network loader.
//!
//! Reads a node file (`node_id<TAB>lat<TAB>lon`) and a segment file (a header
//! line, then `road_id<TAB>length<TAB>node_a<TAB>node_b[<TAB>coords...]`) into
//! a [`roadgraph_core::Graph`].

mod errors;
mod records;
mod source;

pub use errors::{ParseReason, TabFile, TabProviderError};
pub use source::TabGraphSource;
