use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use roadgraph_core::{Graph, GraphBuilder, GraphError};
use tracing::{debug, info, instrument};

use crate::errors::{ParseReason, TabFile, TabProviderError};
use crate::records::{parse_node, parse_segment};

/// A road network loaded from a pair of tab-separated files.
#[derive(Debug, Clone)]
pub struct TabGraphSource {
    name: String,
    graph: Graph,
}

impl TabGraphSource {
    /// Opens and loads the node and segment files.
    ///
    /// # Errors
    /// Returns [`TabProviderError::Open`] when either file cannot be opened,
    /// and otherwise fails as [`Self::from_readers`] does.
    #[instrument(
        name = "tab.from_paths",
        skip_all,
        fields(nodes = %nodes.as_ref().display(), segments = %segments.as_ref().display()),
    )]
    pub fn from_paths(
        nodes: impl AsRef<Path>,
        segments: impl AsRef<Path>,
    ) -> Result<Self, TabProviderError> {
        let nodes = nodes.as_ref();
        let segments = segments.as_ref();
        let node_reader = open(TabFile::Nodes, nodes)?;
        let segment_reader = open(TabFile::Segments, segments)?;
        let name = nodes
            .file_stem()
            .map_or_else(|| nodes.display().to_string(), |stem| stem.to_string_lossy().into_owned());
        Self::from_readers(name, node_reader, segment_reader)
    }

    /// Loads a graph from already-open readers.
    ///
    /// Blank lines are skipped in both inputs. The first line of the segment
    /// input is a header and is always skipped.
    ///
    /// # Errors
    /// Returns [`TabProviderError::Parse`] for a malformed line,
    /// [`TabProviderError::Io`] when reading fails, and
    /// [`TabProviderError::Graph`] when a segment references an unknown node
    /// or a node id repeats.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    ///
    /// use roadgraph_core::NodeId;
    /// use roadgraph_providers_tab::TabGraphSource;
    ///
    /// let nodes = Cursor::new("1\t-36.8\t174.7\n2\t-36.9\t174.8\n");
    /// let segments = Cursor::new("road\tlength\tfrom\tto\n10\t0.4\t1\t2\n");
    /// let source = TabGraphSource::from_readers("demo", nodes, segments)?;
    ///
    /// let graph = source.graph();
    /// assert_eq!(graph.node_count(), 2);
    /// assert_eq!(graph.segments()[0].road(), Some(10));
    /// assert!(graph.node(NodeId::new(2)).is_some());
    /// # Ok::<(), roadgraph_providers_tab::TabProviderError>(())
    /// ```
    pub fn from_readers(
        name: impl Into<String>,
        nodes: impl BufRead,
        segments: impl BufRead,
    ) -> Result<Self, TabProviderError> {
        let name = name.into();
        let mut builder = GraphBuilder::new();

        for_each_record(TabFile::Nodes, nodes, 0, |line| {
            let (id, location) = parse_node(line)?;
            Ok(builder.add_node(id, location)?)
        })?;
        for_each_record(TabFile::Segments, segments, 1, |line| {
            let record = parse_segment(line)?;
            builder.add_road_segment(record.road, record.source, record.target, record.length)?;
            Ok(())
        })?;

        let graph = builder.build();
        info!(
            source = %name,
            nodes = graph.node_count(),
            segments = graph.segment_count(),
            "road network loaded"
        );
        Ok(Self { name, graph })
    }

    /// Name of the source, derived from the node file when loaded from disk.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the source, returning the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

fn open(file: TabFile, path: &Path) -> Result<BufReader<File>, TabProviderError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| TabProviderError::Open {
            file,
            path: path.to_path_buf(),
            source,
        })
}

/// A per-line failure before file and line context are attached.
enum LineError {
    Parse(ParseReason),
    Graph(GraphError),
}

impl From<ParseReason> for LineError {
    fn from(reason: ParseReason) -> Self {
        Self::Parse(reason)
    }
}

impl From<GraphError> for LineError {
    fn from(error: GraphError) -> Self {
        Self::Graph(error)
    }
}

/// Feeds each non-blank line after the first `skip` lines to `handle`.
fn for_each_record(
    file: TabFile,
    reader: impl BufRead,
    skip: usize,
    mut handle: impl FnMut(&str) -> Result<(), LineError>,
) -> Result<(), TabProviderError> {
    let mut records = 0_usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| TabProviderError::Io { file, source })?;
        let content = line.trim_end_matches('\r');
        if index < skip || content.trim().is_empty() {
            continue;
        }
        handle(content).map_err(|error| match error {
            LineError::Parse(reason) => TabProviderError::Parse {
                file,
                line: index + 1,
                reason,
            },
            LineError::Graph(error) => TabProviderError::Graph(error),
        })?;
        records += 1;
    }
    debug!(%file, records, "records parsed");
    Ok(())
}
