//! Nodes of the breakpoint graph explored by the line breaking engine.

use std::fmt;

/// Aggregates various measures up to and from a feasible breakpoint.
///
/// The engine keeps one node per retained way of ending a line, linked to
/// the node of the breakpoint the line started from.
#[derive(Copy, Clone)]
pub struct Node {
    /// Index of the item the line ends at, or `None` for the node standing
    /// for the beginning of the paragraph.
    pub position: Option<usize>,

    /// Index at which the next line starts: the glue and non-forced
    /// penalties right after the breakpoint belong to no line.
    pub after: usize,

    /// Number of lines ending at this breakpoint since the beginning of the
    /// paragraph.
    pub line: usize,

    /// The fitness class of the line ending at this breakpoint.
    pub fitness: i64,

    /// The adjustment ratio of the line ending at this breakpoint.
    pub adjustment_ratio: f64,

    /// Accumulated demerits from the beginning of the paragraph.
    pub total_demerits: f64,
}

impl Node {
    /// The node every paragraph starts from.
    ///
    /// The seed values matter: fitness 1 is the reference point for the
    /// first line's fitness jump, and the adjustment ratio is a dummy as the
    /// node closes no line.
    pub fn start_of_paragraph() -> Node {
        Node {
            position: None,
            after: 0,
            line: 0,
            fitness: 1,
            adjustment_ratio: 1.0,
            total_demerits: 0.0,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{}", position),
            None => write!(f, "start"),
        }
    }
}
