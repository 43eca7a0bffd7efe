//! Utility functions for the various stages of the line breaking algorithm.

use std::f64;

use crate::layout::paragraphs::graph::Node;
use crate::layout::paragraphs::items::{Content, Item, INFINITELY_NEGATIVE_PENALTY};
use crate::layout::paragraphs::measures::Measures;
use crate::layout::paragraphs::{Paragraph, Parameters};
use crate::units::Pt;

/// Computes the adjusment ratio of a line of items, based on their combined
/// width, stretchability and shrinkability. This essentially tells how much
/// effort has to be produced to fit the line to the desired width.
///
/// A positive ratio means the glue of the line has to stretch, a negative
/// one that it has to shrink. A line that can't reach the desired width at
/// all gets an infinite ratio of the corresponding sign.
pub fn compute_adjustment_ratio(
    actual_length: Pt,
    desired_length: Pt,
    total_stretchability: Pt,
    total_shrinkability: Pt,
) -> f64 {
    if actual_length == desired_length {
        0.0
    } else if actual_length < desired_length {
        if total_stretchability > Pt(0.0) {
            (desired_length.0 - actual_length.0) / total_stretchability.0
        } else {
            f64::INFINITY
        }
    } else if total_shrinkability > Pt(0.0) {
        (desired_length.0 - actual_length.0) / total_shrinkability.0
    } else {
        f64::NEG_INFINITY
    }
}

/// Computes the badness of a line from its adjustment ratio.
///
/// Shrinking glue beyond its shrinkability is not an option, so any ratio
/// below -1 is infinitely bad.
pub fn badness(adjustment_ratio: f64) -> f64 {
    if adjustment_ratio < -1.0 {
        f64::INFINITY
    } else {
        100.0 * adjustment_ratio.abs().powi(3)
    }
}

/// Computes the fitness class of a line based on its adjustment ratio, from
/// 0 for a tight line to 3 for a very loose one.
pub fn compute_fitness(adjustment_ratio: f64) -> i64 {
    if adjustment_ratio < -0.5 {
        0
    } else if adjustment_ratio < 0.5 {
        1
    } else if adjustment_ratio < 1.0 {
        2
    } else {
        3
    }
}

/// Computes the demerits of a line based on its accumulated penalty
/// and badness.
pub fn compute_demerits(penalty: f64, badness: f64, line_penalty: f64) -> f64 {
    if penalty >= 0.0 {
        (line_penalty + badness + penalty).powi(2)
    } else if penalty > INFINITELY_NEGATIVE_PENALTY {
        (line_penalty + badness).powi(2) - penalty.powi(2)
    } else {
        (line_penalty + badness).powi(2)
    }
}

/// Checks whether or not a given item encodes a forced linebreak.
pub fn is_forced_break<T>(item: &Item<T>) -> bool {
    match item.content {
        Content::Penalty { value, .. } => value == INFINITELY_NEGATIVE_PENALTY,
        _ => false,
    }
}

/// Whether the item at the given position is a flagged penalty.
///
/// The position is the one recorded on a breakpoint node, so it can be
/// absent for the beginning of the paragraph, which is never flagged.
pub fn is_flagged_at<T>(items: &[Item<T>], position: Option<usize>) -> bool {
    match position {
        Some(position) => items[position].is_flagged(),
        None => false,
    }
}

/// Finds all the legal breakpoints within a paragraph. A legal breakpoint
/// is an item index such that this item is either a penalty which isn't
/// infinite or a glue following a bounding box.
pub fn find_legal_breakpoints<T>(paragraph: &Paragraph<T>) -> Vec<usize> {
    let mut legal_breakpoints: Vec<usize> = Vec::new();

    let mut last_item_was_box = false;

    for (i, item) in paragraph.items.iter().enumerate() {
        match item.content {
            Content::Penalty { value, .. } => {
                if value < f64::INFINITY {
                    legal_breakpoints.push(i);
                }

                last_item_was_box = false;
            }
            Content::Glue { .. } => {
                if last_item_was_box {
                    legal_breakpoints.push(i)
                }

                last_item_was_box = false;
            }
            Content::BoundingBox(_) => last_item_was_box = true,
        }
    }

    legal_breakpoints
}

/// Finds the index at which the line following a break at `position`
/// starts.
///
/// The glue and the non-forced penalties right after a break belong to the
/// inter-line white space and are consumed by the break itself.
pub fn next_line_start<T>(items: &[Item<T>], position: usize) -> usize {
    let mut start = position + 1;

    while start < items.len() {
        match items[start].content {
            Content::BoundingBox(_) => break,
            Content::Penalty { value, .. } if value == INFINITELY_NEGATIVE_PENALTY => break,
            _ => start += 1,
        }
    }

    start
}

/// Computes the actual length of the line going from `start` to a break at
/// `end`.
///
/// The trailing white space right before the breakpoint carries no visible
/// width: the line visually stops at its last box, plus the extra width of
/// the penalty when the line breaks at one.
pub fn line_length<T>(items: &[Item<T>], measures: &Measures, start: usize, end: usize) -> Pt {
    let mut visible_end = end;

    while visible_end > start && items[visible_end - 1].is_glue() {
        visible_end -= 1;
    }

    let penalty_width = if items[end].is_penalty() {
        items[end].width
    } else {
        Pt(0.0)
    };

    measures.width_between(start, visible_end) + penalty_width
}

/// Computes the total stretchability available to the line going from
/// `start` to a break at `end`.
///
/// The elasticity of the glue being broken at still participates, even
/// though its natural width does not.
pub fn line_stretch(measures: &Measures, start: usize, end: usize) -> Pt {
    measures.stretch_between(start, end + 1)
}

/// Computes the total shrinkability available to the line going from
/// `start` to a break at `end`.
pub fn line_shrink(measures: &Measures, start: usize, end: usize) -> Pt {
    measures.shrink_between(start, end + 1)
}

/// Builds the node recording a feasible breakpoint at `b`, for the line
/// starting after the `active` node and ending with the given adjustment
/// ratio.
///
/// On top of the line's own demerits, the node is charged when its line and
/// the previous one both end on flagged penalties, and when their fitness
/// classes are more than one class apart. The beginning of the paragraph
/// counts as fitness class 1 for that comparison.
pub fn node_for_feasible_breakpoint<T>(
    b: usize,
    active: &Node,
    adjustment_ratio: f64,
    items: &[Item<T>],
    params: &Parameters,
) -> Node {
    let badness = badness(adjustment_ratio);
    let penalty = items[b].penalty_value();

    let mut demerits = compute_demerits(penalty, badness, params.line_penalty);

    if items[b].is_flagged() && is_flagged_at(items, active.position) {
        demerits += params.flagged_demerits;
    }

    let fitness = compute_fitness(adjustment_ratio);

    if (fitness - active.fitness).abs() > 1 {
        demerits += params.fitness_demerits;
    }

    Node {
        position: Some(b),
        after: next_line_start(items, b),
        line: active.line + 1,
        fitness,
        adjustment_ratio,
        total_demerits: active.total_demerits + demerits,
    }
}
