//! This crate contains all the tools we need to break paragraphs into lines.
//!
//! A paragraph is described as a sequence of items: boxes of fixed width,
//! glue that can stretch or shrink, and penalties marking places where a
//! line is allowed, forbidden or forced to end. The engine searches for the
//! sequence of breakpoints that minimizes the total amount of demerits over
//! the whole paragraph, following Knuth and Plass.

#![warn(missing_docs)]

pub mod layout;
pub mod units;

use std::{fmt, result};

/// The error type of the library.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The paragraph contains no items.
    EmptyParagraph,

    /// The paragraph does not start with a box.
    MissingLeadingBox,

    /// The paragraph does not end with a forced break.
    MissingForcedBreak,

    /// The search ended with no active breakpoint left.
    NoSolution,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyParagraph => write!(fmt, "the paragraph contains no items"),
            Error::MissingLeadingBox => write!(fmt, "a paragraph must start with a box"),
            Error::MissingForcedBreak => {
                write!(fmt, "a paragraph must end with a forced break penalty")
            }
            Error::NoSolution => write!(fmt, "no sequence of breakpoints could be found"),
        }
    }
}

impl std::error::Error for Error {}

/// The result type of the library.
pub type Result<T> = result::Result<T, Error>;
