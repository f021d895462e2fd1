//! # genoreport
//!
//! `genoreport` loads single-patient reports combining demographic
//! information, behavioral trait scores and genomic marker results, and
//! selects the genes that the report heuristic flags as clinically
//! significant.
//!
//! If you want to view reports from the terminal, check out the
//! `genoreport` CLI tool from the `genoreport-ci` package.
//!
//! ## Key Features
//!
//! * **Validated loading**: [`io::load`] decodes an uploaded byte buffer as
//!   UTF-8 JSON and checks the three required sections, returning a typed
//!   [`io::LoadError`] instead of a partial document.
//! * **Significant-variant selection**: [`tools::select_significant`] flags a
//!   record when its genotype contains a `T` or its methylation status is
//!   anything but `-`, deduplicating genes in order of first occurrence.
//! * **Table views**: genomic results and behavioral scores as `polars`
//!   DataFrames, with every extra genomic column carried through.
//!
//! ## Structure
//!
//! * [`data_structs`]: [`PatientDocument`](data_structs::PatientDocument) and
//!   the types of its sections.
//! * [`io`]: the document loader.
//! * [`tools`]: significance selection and caption picking.
//!
//! ## Usage
//!
//! ```no_run
//! use genoreport::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let raw = std::fs::read("path/to/patient.json")?;
//!     let document = load(&raw)?;
//!
//!     let genes = select_significant(document.genomic_results());
//!     if genes.is_empty() {
//!         println!("No clinically significant variants detected.");
//!     }
//!     for gene in genes {
//!         println!("{gene}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod io;
pub mod prelude;
pub mod tools;

#[allow(unused_imports)]
use prelude::*;
