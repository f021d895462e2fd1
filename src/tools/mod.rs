//! Analysis on top of a loaded report.
//!
//! - [`significance`]: selection of clinically significant genes from the
//!   genomic results ([`select_significant`], [`SignificanceRule`]).
//! - [`caption`]: seeded choice of a caption for the rendered report.

pub mod caption;
pub mod significance;

pub use caption::pick;
pub use significance::{
    select_significant,
    SignificanceReason,
    SignificanceRule,
};
