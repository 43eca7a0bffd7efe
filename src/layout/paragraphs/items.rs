//! Various blocks holding information and specifications about the structure
//! of a paragraph.

use crate::units::Pt;

/// The value of a penalty that forbids breaking a line at its position.
pub const INFINITELY_POSITIVE_PENALTY: f64 = f64::INFINITY;

/// The value of a penalty that forces a line break at its position.
pub const INFINITELY_NEGATIVE_PENALTY: f64 = f64::NEG_INFINITY;

/// Top abstraction of an item, which is a specification for a box, a glue
/// or a penalty.
#[derive(Debug, Clone)]
pub struct Item<T> {
    /// The width of the item, in points.
    ///
    /// For a penalty, this is the extra width the line gains when it
    /// actually breaks there, like the dash of a hyphenation.
    pub width: Pt,

    /// The type of the item.
    pub content: Content<T>,
}

/// Possible available types for an item.
#[derive(Debug, Clone)]
pub enum Content<T> {
    /// A bounding box refers to something that is meant to be typeset.
    ///
    /// It carries an opaque payload for the caller to recognize its content
    /// once lines come back; the only relevant information for splitting a
    /// paragraph into lines is its width.
    BoundingBox(T),

    /// Glue is a blank space which can see its width altered in specified ways.
    ///
    /// It can either stretch or shrink up to a certain limit, and is used as
    /// mortar to leverage to reach a target line width.
    Glue {
        /// How inclined the glue is to stretch from its natural width, in points.
        stretchability: Pt,

        /// How inclined the glue is to shrink from its natural width, in points.
        shrinkability: Pt,
    },

    /// Penalty is a potential place to end a line and step to another. It's
    /// helpful to cut a line in the middle of a word (hyphenation) or to
    /// enforce a break at the end of paragraphs.
    Penalty {
        /// The "cost" of the penalty.
        value: f64,

        /// Whether or not the penalty is considered as flagged.
        flagged: bool,
    },
}

impl<T> Item<T> {
    /// Creates a bounding box from its width and its payload.
    pub fn bounding_box(width: Pt, payload: T) -> Item<T> {
        Item {
            width,
            content: Content::BoundingBox(payload),
        }
    }

    /// Creates some glue.
    pub fn glue(ideal_spacing: Pt, stretchability: Pt, shrinkability: Pt) -> Item<T> {
        Item {
            width: ideal_spacing,
            content: Content::Glue {
                stretchability,
                shrinkability,
            },
        }
    }

    /// Creates a penalty.
    pub fn penalty(width: Pt, value: f64, flagged: bool) -> Item<T> {
        Item {
            width,
            content: Content::Penalty { value, flagged },
        }
    }

    /// Creates the penalty that ends a paragraph by forcing a last break.
    pub fn forced_break() -> Item<T> {
        Item::penalty(Pt(0.0), INFINITELY_NEGATIVE_PENALTY, false)
    }

    /// Returns the stretchability of the item, which is null unless it is
    /// some glue.
    pub fn stretchability(&self) -> Pt {
        match self.content {
            Content::Glue { stretchability, .. } => stretchability,
            _ => Pt(0.0),
        }
    }

    /// Returns the shrinkability of the item, which is null unless it is
    /// some glue.
    pub fn shrinkability(&self) -> Pt {
        match self.content {
            Content::Glue { shrinkability, .. } => shrinkability,
            _ => Pt(0.0),
        }
    }

    /// Returns the cost of breaking at the item, which is null unless it is
    /// a penalty.
    pub fn penalty_value(&self) -> f64 {
        match self.content {
            Content::Penalty { value, .. } => value,
            _ => 0.0,
        }
    }

    /// Whether the item is a flagged penalty.
    pub fn is_flagged(&self) -> bool {
        match self.content {
            Content::Penalty { flagged, .. } => flagged,
            _ => false,
        }
    }

    /// Whether the item is a bounding box.
    pub fn is_box(&self) -> bool {
        matches!(self.content, Content::BoundingBox(_))
    }

    /// Whether the item is some glue.
    pub fn is_glue(&self) -> bool {
        matches!(self.content, Content::Glue { .. })
    }

    /// Whether the item is a penalty.
    pub fn is_penalty(&self) -> bool {
        matches!(self.content, Content::Penalty { .. })
    }
}
