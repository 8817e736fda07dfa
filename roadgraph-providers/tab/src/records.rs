//! Line-level parsing for the two tab-separated formats.

use std::str::{FromStr, Split};

use roadgraph_core::{Location, NodeId};

use crate::errors::ParseReason;

/// One row of the segment file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SegmentRecord {
    pub road: u64,
    pub length: f64,
    pub source: NodeId,
    pub target: NodeId,
}

/// Parses `node_id<TAB>lat<TAB>lon`, storing the location as `(lon, lat)`.
pub(crate) fn parse_node(line: &str) -> Result<(NodeId, Location), ParseReason> {
    let mut columns = line.split('\t');
    let id: u64 = next_field(&mut columns, "node_id")?;
    let lat: f64 = next_field(&mut columns, "lat")?;
    let lon: f64 = next_field(&mut columns, "lon")?;
    Ok((NodeId::new(id), Location::new(lon, lat)))
}

/// Parses `road_id<TAB>length<TAB>node_a<TAB>node_b`, ignoring any trailing
/// coordinate columns.
pub(crate) fn parse_segment(line: &str) -> Result<SegmentRecord, ParseReason> {
    let mut columns = line.split('\t');
    Ok(SegmentRecord {
        road: next_field(&mut columns, "road_id")?,
        length: next_field(&mut columns, "length")?,
        source: NodeId::new(next_field(&mut columns, "node_a")?),
        target: NodeId::new(next_field(&mut columns, "node_b")?),
    })
}

fn next_field<T: FromStr>(columns: &mut Split<'_, char>, field: &'static str) -> Result<T, ParseReason> {
    let raw = columns
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ParseReason::MissingField { field })?;
    raw.parse().map_err(|_| ParseReason::InvalidNumber {
        field,
        value: raw.to_owned(),
    })
}
