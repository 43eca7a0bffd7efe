//! Mathematical logic for breaking a sequence of items which have a
//! semantics of "paragraph". That is, the logic to split a sequence of
//! boxes, glues and penalties into lines.

pub mod engine;
pub mod graph;
pub mod items;
pub mod measures;
pub mod utils;

use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::layout::constants::{
    DEFAULT_FITNESS_DEMERITS, DEFAULT_FLAGGED_DEMERITS, DEFAULT_LINE_PENALTY, DEFAULT_TOLERANCE,
};
use crate::layout::paragraphs::items::Item;
use crate::units::Pt;
use crate::Result;

/// Holds a list of items describing a paragraph.
#[derive(Debug, Default)]
pub struct Paragraph<T> {
    /// Sequence of items representing the structure of the paragraph.
    pub items: Vec<Item<T>>,
}

impl<T> Paragraph<T> {
    /// Instantiates a new paragraph.
    pub fn new() -> Paragraph<T> {
        Paragraph { items: Vec::new() }
    }

    /// Pushes an item at the end of the paragraph.
    pub fn push(&mut self, item: Item<T>) {
        self.items.push(item)
    }

    /// Returns an iterator to the items of the paragraph.
    pub fn iter(&self) -> Iter<Item<T>> {
        self.items.iter()
    }

    /// Breaks the paragraph into lines of the desired width.
    pub fn break_into_lines(&self, target_width: Pt, params: &Parameters) -> Result<Vec<Line>> {
        engine::break_lines(&self.items, target_width, params)
    }
}

/// Line breaking parameters.
///
/// The defaults match a plain TeX document; embedders can load another set
/// from their configuration.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Maximal adjustment ratio for a breakpoint to be feasible.
    pub tolerance: f64,

    /// Cost charged for every line, discouraging solutions with more lines.
    pub line_penalty: f64,

    /// Additional demerits when two consecutive lines end on flagged
    /// penalties.
    pub flagged_demerits: f64,

    /// Additional demerits when two consecutive lines have fitness classes
    /// more than one apart.
    pub fitness_demerits: f64,
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters {
            tolerance: DEFAULT_TOLERANCE,
            line_penalty: DEFAULT_LINE_PENALTY,
            flagged_demerits: DEFAULT_FLAGGED_DEMERITS,
            fitness_demerits: DEFAULT_FITNESS_DEMERITS,
        }
    }
}

/// A line of the broken paragraph.
///
/// The caller renders `items[start..end]`, stretching or shrinking every
/// glue by the adjustment ratio times its corresponding capacity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    /// Index of the first item of the line.
    pub start: usize,

    /// Index of the breakpoint ending the line.
    pub end: usize,

    /// The adjustment ratio to apply to the glue of the line.
    pub adjustment_ratio: f64,
}
