//! Various constants used for breaking paragraphs into lines.

/// Minimum adjustment ratio a line can take: glue is never shrunk below
/// that factor of its shrinkability.
pub const MIN_ADJUSTMENT_RATIO: f64 = -1.0;

/// The default maximal adjustment ratio to consider a breakpoint feasible.
///
/// This corresponds to a badness of about 200, the tolerance a plain TeX
/// document runs with.
pub const DEFAULT_TOLERANCE: f64 = 1.26;

/// The default cost charged for every line of the paragraph.
pub const DEFAULT_LINE_PENALTY: f64 = 1.0;

/// The default additional demerits charged when two consecutive lines end
/// on flagged penalties, typically two hyphenations in a row.
pub const DEFAULT_FLAGGED_DEMERITS: f64 = 1000.0;

/// The default additional demerits charged when the fitness classes of two
/// consecutive lines are more than one class apart.
pub const DEFAULT_FITNESS_DEMERITS: f64 = 1000.0;

/// The customary value of a penalty marking a hyphenation opportunity.
///
/// The engine does not insert hyphenation penalties itself; callers that do
/// are expected to use this cost.
pub const HYPHEN_PENALTY: f64 = 50.0;
