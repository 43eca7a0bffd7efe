//! Mathematical logic for breaking a paragraph into lines in an optimal
//! way, following the total-fit algorithm of Knuth and Plass.
//!
//! The engine scans the items from left to right and maintains a small set
//! of active breakpoints: the ways of ending a line that may still be part
//! of an optimal solution. At every legal breakpoint, each active node is
//! either extended into a feasible new line, kept for later, or retired
//! when no line starting from it can reach the current position anymore.

use std::f64;
use std::mem;

use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::Dfs;

use crate::layout::constants::MIN_ADJUSTMENT_RATIO;
use crate::layout::paragraphs::graph::Node;
use crate::layout::paragraphs::items::{Content, Item};
use crate::layout::paragraphs::measures::Measures;
use crate::layout::paragraphs::utils::linebreak::{
    compute_adjustment_ratio, is_forced_break, line_length, line_shrink, line_stretch,
    next_line_start, node_for_feasible_breakpoint,
};
use crate::layout::paragraphs::{Line, Parameters};
use crate::units::Pt;
use crate::{Error, Result};

/// Finds the sequence of breakpoints that minimizes the amount of demerits
/// while breaking a paragraph down into lines of the target width.
///
/// The paragraph must start with a box and end with a forced break penalty;
/// hyphenation opportunities are penalty items injected beforehand by the
/// caller. The returned lines are in natural order, each with the
/// adjustment ratio to apply to its glue when rendering.
pub fn break_lines<T>(
    items: &[Item<T>],
    target_width: Pt,
    params: &Parameters,
) -> Result<Vec<Line>> {
    check_paragraph(items)?;

    // With an infinite measure, only forced breaks can end a line and the
    // whole search degenerates.
    if !target_width.0.is_finite() {
        return Ok(break_at_forced_breaks(items));
    }

    let measures = Measures::new(items);

    let mut graph = StableGraph::<Node, f64>::new();
    let mut active = vec![graph.add_node(Node::start_of_paragraph())];

    for (b, item) in items.iter().enumerate() {
        let can_break = match item.content {
            Content::BoundingBox(_) => false,
            // We can only break at a glue if it is preceded by a bounding box.
            Content::Glue { .. } => b > 0 && items[b - 1].is_box(),
            Content::Penalty { value, .. } => value < f64::INFINITY,
        };

        if !can_break {
            continue;
        }

        let forced = is_forced_break(item);

        // Update the set of active nodes.

        let mut survivors: Vec<NodeIndex> = Vec::new();
        let mut feasible_breakpoints: Vec<(Node, NodeIndex)> = Vec::new();

        for &active_id in &active {
            let node = graph[active_id];
            let adjustment_ratio = adjustment_ratio_to(items, &measures, &node, b, target_width);

            // Items from node.after to b cannot fit on the same line
            // anymore once the ratio drops below the shrink limit, and a
            // forced break retires every node it passes.
            if adjustment_ratio >= MIN_ADJUSTMENT_RATIO && !forced {
                survivors.push(active_id);
            }

            if adjustment_ratio >= MIN_ADJUSTMENT_RATIO && adjustment_ratio < params.tolerance {
                feasible_breakpoints.push((
                    node_for_feasible_breakpoint(b, &node, adjustment_ratio, items, params),
                    active_id,
                ));
            }
        }

        let previously_active = mem::replace(&mut active, survivors);

        for (node, parent_id) in best_per_fitness_class(&feasible_breakpoints) {
            insert_node(&mut graph, &mut active, node, parent_id);
        }

        // Nothing survived the update: no line within tolerance reaches
        // this breakpoint. Accept overfull lines rather than giving up on
        // the paragraph.
        if active.is_empty() {
            let overfull_breakpoints: Vec<(Node, NodeIndex)> = previously_active
                .iter()
                .map(|&active_id| {
                    let node = graph[active_id];
                    let adjustment_ratio = adjustment_ratio_to(items, &measures, &node, b, target_width)
                        .max(MIN_ADJUSTMENT_RATIO);

                    (
                        node_for_feasible_breakpoint(b, &node, adjustment_ratio, items, params),
                        active_id,
                    )
                })
                .collect();

            for (node, parent_id) in best_per_fitness_class(&overfull_breakpoints) {
                insert_node(&mut graph, &mut active, node, parent_id);
            }
        }
    }

    let mut best: Option<NodeIndex> = None;

    for &active_id in &active {
        let better = match best {
            Some(best_id) => graph[active_id].total_demerits < graph[best_id].total_demerits,
            None => true,
        };

        if better {
            best = Some(active_id);
        }
    }

    match best {
        Some(best_id) => Ok(collect_lines(&graph, best_id)),
        None => Err(Error::NoSolution),
    }
}

/// Checks the structural contract of a paragraph before searching it.
fn check_paragraph<T>(items: &[Item<T>]) -> Result<()> {
    let last = match items.last() {
        Some(last) => last,
        None => return Err(Error::EmptyParagraph),
    };

    if !items[0].is_box() {
        return Err(Error::MissingLeadingBox);
    }

    if !is_forced_break(last) {
        return Err(Error::MissingForcedBreak);
    }

    Ok(())
}

/// Computes the adjustment ratio of the line going from an active node to a
/// candidate breakpoint.
fn adjustment_ratio_to<T>(
    items: &[Item<T>],
    measures: &Measures,
    node: &Node,
    b: usize,
    target_width: Pt,
) -> f64 {
    compute_adjustment_ratio(
        line_length(items, measures, node.after, b),
        target_width,
        line_stretch(measures, node.after, b),
        line_shrink(measures, node.after, b),
    )
}

/// Among candidate extensions ending at the same breakpoint, keeps the one
/// with the least total demerits for each fitness class.
fn best_per_fitness_class(candidates: &[(Node, NodeIndex)]) -> Vec<(Node, NodeIndex)> {
    let mut best: [Option<(Node, NodeIndex)>; 4] = [None; 4];

    for &(node, parent_id) in candidates {
        let class = node.fitness as usize;

        let better = match best[class] {
            Some((kept, _)) => node.total_demerits < kept.total_demerits,
            None => true,
        };

        if better {
            best[class] = Some((node, parent_id));
        }
    }

    best.iter().flatten().copied().collect()
}

/// Records a new breakpoint node, linked to the node its line starts from,
/// and makes it active.
fn insert_node(
    graph: &mut StableGraph<Node, f64>,
    active: &mut Vec<NodeIndex>,
    node: Node,
    parent_id: NodeIndex,
) {
    let inserted = graph.add_node(node);
    graph.add_edge(inserted, parent_id, node.total_demerits);
    active.push(inserted);
}

/// Breaks a paragraph at its forced breaks only, for an infinite measure.
fn break_at_forced_breaks<T>(items: &[Item<T>]) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (b, item) in items.iter().enumerate() {
        if is_forced_break(item) {
            lines.push(Line {
                start,
                end: b,
                adjustment_ratio: 0.0,
            });

            start = next_line_start(items, b);
        }
    }

    lines
}

/// Follows the edges backwards from the optimal node and collects the lines
/// in natural order.
fn collect_lines(graph: &StableGraph<Node, f64>, best_id: NodeIndex) -> Vec<Line> {
    let mut chain: Vec<Node> = Vec::new();

    let mut dfs = Dfs::new(graph, best_id);
    while let Some(node_id) = dfs.next(graph) {
        chain.push(graph[node_id]);
    }

    let mut lines: Vec<Line> = Vec::new();

    for pair in chain.windows(2) {
        if let Some(end) = pair[0].position {
            lines.push(Line {
                start: pair[1].after,
                end,
                adjustment_ratio: pair[0].adjustment_ratio,
            });
        }
    }

    lines.reverse();
    lines
}

/// Unit tests for the line breaking engine.
#[cfg(test)]
mod tests {
    use std::f64;

    use crate::layout::constants::HYPHEN_PENALTY;
    use crate::layout::paragraphs::engine::break_lines;
    use crate::layout::paragraphs::items::Item;
    use crate::layout::paragraphs::utils::linebreak::next_line_start;
    use crate::layout::paragraphs::{Line, Paragraph, Parameters};
    use crate::units::{nearly_equal, Pt, PLUS_INFINITY};
    use crate::Error;

    /// Joins word widths with stretchable glue and closes the paragraph the
    /// usual way: an unbreakable penalty, the finishing glue and a forced
    /// break.
    fn paragraph_of_words(widths: &[f64]) -> Vec<Item<()>> {
        let mut items = Vec::new();

        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                items.push(Item::glue(Pt(10.0), Pt(5.0), Pt(3.0)));
            }

            items.push(Item::bounding_box(Pt(width), ()));
        }

        items.push(Item::penalty(Pt(0.0), f64::INFINITY, false));
        items.push(Item::glue(Pt(0.0), Pt(10000.0), Pt(0.0)));
        items.push(Item::forced_break());

        items
    }

    #[test]
    fn single_line_stretches_to_fit() {
        let items: Vec<Item<()>> = vec![
            Item::bounding_box(Pt(10.0), ()),
            Item::glue(Pt(5.0), Pt(5.0), Pt(0.0)),
            Item::forced_break(),
        ];

        let lines = break_lines(&items, Pt(20.0), &Parameters::default()).unwrap();

        // The only way to reach the forced break is to stretch the space
        // twice its stretchability, beyond tolerance but accepted since
        // there is no alternative.
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], Line { start: 0, end: 2, adjustment_ratio: 2.0 });
    }

    #[test]
    fn perfect_fit_makes_a_single_line() {
        let mut paragraph: Paragraph<()> = Paragraph::new();
        paragraph.push(Item::bounding_box(Pt(20.0), ()));
        paragraph.push(Item::glue(Pt(5.0), Pt(3.0), Pt(1.0)));
        paragraph.push(Item::bounding_box(Pt(30.0), ()));
        paragraph.push(Item::glue(Pt(0.0), Pt(0.0), Pt(0.0)));
        paragraph.push(Item::forced_break());

        let lines = paragraph
            .break_into_lines(Pt(55.0), &Parameters::default())
            .unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], Line { start: 0, end: 4, adjustment_ratio: 0.0 });
    }

    #[test]
    fn too_long_paragraph_breaks_in_two() {
        let items: Vec<Item<()>> = vec![
            Item::bounding_box(Pt(40.0), ()),
            Item::glue(Pt(10.0), Pt(5.0), Pt(2.0)),
            Item::bounding_box(Pt(40.0), ()),
            Item::glue(Pt(0.0), Pt(0.0), Pt(0.0)),
            Item::forced_break(),
        ];

        let lines = break_lines(&items, Pt(45.0), &Parameters::default()).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], Line { start: 0, end: 1, adjustment_ratio: 1.0 });

        // The second line has no glue to stretch: it is only accepted
        // because of the forced break, with a degenerate ratio.
        assert_eq!(lines[1].start, 2);
        assert_eq!(lines[1].end, 4);
        assert_eq!(lines[1].adjustment_ratio, f64::INFINITY);
    }

    #[test]
    fn hyphenation_wins_over_a_stretched_line() {
        let items: Vec<Item<()>> = vec![
            Item::bounding_box(Pt(50.0), ()),
            Item::glue(Pt(10.0), Pt(30.0), Pt(5.0)),
            Item::bounding_box(Pt(18.0), ()),
            Item::penalty(Pt(2.0), HYPHEN_PENALTY, true),
            Item::bounding_box(Pt(20.0), ()),
            Item::glue(Pt(10.0), Pt(30.0), Pt(5.0)),
            Item::bounding_box(Pt(40.0), ()),
            Item::glue(Pt(0.0), Pt(1000.0), Pt(0.0)),
            Item::forced_break(),
        ];

        let lines = break_lines(&items, Pt(80.0), &Parameters::default()).unwrap();

        // Breaking at the hyphen fills the first line exactly; the
        // alternative break at the first glue would leave it stretched to
        // its fitness limit and lose on demerits.
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], Line { start: 0, end: 3, adjustment_ratio: 0.0 });
        assert_eq!(lines[1].start, 4);
        assert_eq!(lines[1].end, 8);
        assert!(nearly_equal(lines[1].adjustment_ratio, 10.0 / 1030.0));
    }

    #[test]
    fn overfull_paragraph_still_produces_lines() {
        let items: Vec<Item<()>> = vec![
            Item::bounding_box(Pt(200.0), ()),
            Item::glue(Pt(10.0), Pt(0.0), Pt(0.0)),
            Item::bounding_box(Pt(200.0), ()),
            Item::forced_break(),
        ];

        let lines = break_lines(&items, Pt(50.0), &Parameters::default()).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], Line { start: 0, end: 1, adjustment_ratio: -1.0 });
        assert_eq!(lines[1], Line { start: 2, end: 3, adjustment_ratio: -1.0 });
    }

    #[test]
    fn infinite_width_breaks_at_forced_breaks_only() {
        let items: Vec<Item<()>> = vec![
            Item::bounding_box(Pt(10.0), ()),
            Item::glue(Pt(5.0), Pt(1.0), Pt(1.0)),
            Item::bounding_box(Pt(10.0), ()),
            Item::forced_break(),
            Item::bounding_box(Pt(10.0), ()),
            Item::glue(Pt(5.0), Pt(1.0), Pt(1.0)),
            Item::bounding_box(Pt(10.0), ()),
            Item::glue(Pt(0.0), Pt(0.0), Pt(0.0)),
            Item::forced_break(),
        ];

        let lines = break_lines(&items, PLUS_INFINITY, &Parameters::default()).unwrap();

        assert_eq!(
            lines,
            [
                Line { start: 0, end: 3, adjustment_ratio: 0.0 },
                Line { start: 4, end: 8, adjustment_ratio: 0.0 },
            ]
        );
    }

    #[test]
    fn structural_contract_is_checked() {
        let empty: Vec<Item<()>> = Vec::new();
        assert_eq!(
            break_lines(&empty, Pt(100.0), &Parameters::default()),
            Err(Error::EmptyParagraph)
        );

        let headless: Vec<Item<()>> = vec![
            Item::glue(Pt(5.0), Pt(1.0), Pt(1.0)),
            Item::bounding_box(Pt(10.0), ()),
            Item::forced_break(),
        ];
        assert_eq!(
            break_lines(&headless, Pt(100.0), &Parameters::default()),
            Err(Error::MissingLeadingBox)
        );

        let unterminated: Vec<Item<()>> = vec![
            Item::bounding_box(Pt(10.0), ()),
            Item::glue(Pt(5.0), Pt(1.0), Pt(1.0)),
        ];
        assert_eq!(
            break_lines(&unterminated, Pt(100.0), &Parameters::default()),
            Err(Error::MissingForcedBreak)
        );
    }

    #[test]
    fn three_line_paragraph() {
        let items = paragraph_of_words(&[30.0, 25.0, 35.0, 20.0, 40.0, 30.0, 25.0, 35.0]);

        let lines = break_lines(&items, Pt(120.0), &Parameters::default()).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].end, 5);
        assert_eq!(lines[1].end, 11);
        assert_eq!(lines[2].end, 17);
        assert!(nearly_equal(lines[0].adjustment_ratio, 10.0 / 15.0));
        assert!(nearly_equal(lines[1].adjustment_ratio, 10.0 / 15.0));
    }

    #[test]
    fn lines_chain_from_start_to_forced_break() {
        let items = paragraph_of_words(&[32.0, 18.0, 44.0, 27.0, 38.0, 21.0, 33.0, 29.0, 40.0]);
        let params = Parameters::default();

        let lines = break_lines(&items, Pt(100.0), &params).unwrap();

        // The last line ends at the forced break.
        assert_eq!(lines.last().unwrap().end, items.len() - 1);

        // Every line starts where the white space following the previous
        // break ends, and breakpoints move strictly forward.
        assert_eq!(lines[0].start, 0);
        for pair in lines.windows(2) {
            assert_eq!(pair[1].start, next_line_start(&items, pair[0].end));
            assert!(pair[1].end > pair[0].end);
        }

        // Every line is feasible or an accepted overfull one.
        for line in &lines {
            assert!(line.adjustment_ratio >= -1.0);
        }

        // The search is deterministic.
        assert_eq!(lines, break_lines(&items, Pt(100.0), &params).unwrap());
    }
}
