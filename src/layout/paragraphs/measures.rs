//! Cumulative measures over the items of a paragraph, to answer any
//! width, stretchability or shrinkability range query in constant time.

use num_traits::identities::Zero;

use crate::layout::paragraphs::items::{Content, Item};
use crate::units::Pt;

/// The three key measures of every prefix of a paragraph.
///
/// Each table has one entry per item plus a leading zero, so that the
/// measure of the items in `[a, b)` is the difference between the entries
/// at `b` and at `a`. Widths accumulate boxes and glue; a penalty occupies
/// width only when a line actually breaks at it, so penalties contribute
/// nothing here. Stretchability and shrinkability accumulate glue only.
#[derive(Debug)]
pub struct Measures {
    /// Cumulative width of the items.
    widths: Vec<Pt>,

    /// Cumulative stretchability of the glue items.
    stretches: Vec<Pt>,

    /// Cumulative shrinkability of the glue items.
    shrinks: Vec<Pt>,
}

impl Measures {
    /// Accumulates the measures of a sequence of items.
    pub fn new<T>(items: &[Item<T>]) -> Measures {
        let mut widths = Vec::with_capacity(items.len() + 1);
        let mut stretches = Vec::with_capacity(items.len() + 1);
        let mut shrinks = Vec::with_capacity(items.len() + 1);

        let mut width = Pt::zero();
        let mut stretch = Pt::zero();
        let mut shrink = Pt::zero();

        widths.push(width);
        stretches.push(stretch);
        shrinks.push(shrink);

        for item in items {
            debug_assert!(item.width >= Pt(0.0));

            match item.content {
                Content::BoundingBox(_) => {
                    width += item.width;
                }
                Content::Glue {
                    stretchability,
                    shrinkability,
                } => {
                    width += item.width;
                    stretch += stretchability;
                    shrink += shrinkability;
                }
                Content::Penalty { .. } => (),
            }

            widths.push(width);
            stretches.push(stretch);
            shrinks.push(shrink);
        }

        Measures {
            widths,
            stretches,
            shrinks,
        }
    }

    /// Total width of the items in `[a, b)`.
    pub fn width_between(&self, a: usize, b: usize) -> Pt {
        self.widths[b] - self.widths[a]
    }

    /// Total stretchability of the glue items in `[a, b)`.
    pub fn stretch_between(&self, a: usize, b: usize) -> Pt {
        self.stretches[b] - self.stretches[a]
    }

    /// Total shrinkability of the glue items in `[a, b)`.
    pub fn shrink_between(&self, a: usize, b: usize) -> Pt {
        self.shrinks[b] - self.shrinks[a]
    }
}
