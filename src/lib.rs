//! # j2kseeds
//!
//! Seed corpus generator for fuzzing JPEG 2000 decoders.
//!
//! Produces small, boundary-valued files in the two JPEG 2000 encodings a
//! decoder usually accepts: raw codestreams (`.j2k`) and JP2 box files
//! (`.jp2`). The seeds are not meant to decode cleanly; they give a fuzzer a
//! structurally plausible starting point for header parsing.
//!
//! ## Seeds
//!
//! - `minimal_j2k.j2k`, `minimal_jp2.jp2`: 1×1 at 1-bit precision
//! - `extreme_j2k_{i}.j2k`, `extreme_jp2_{i}.jp2`: one pair per entry of
//!   [`EXTREME_VARIANTS`] (1-based)
//!
//! Codestream seeds are 16 bytes (minimal) or 18 bytes (variant). Container
//! seeds are always 46 bytes.
//!
//! ## Known quirks
//!
//! These are deliberate seed content and must not be "fixed":
//! - The SIZ marker segment declares a length of 11 whatever follows it.
//! - Both codestream seeds declare one component. Only variant seeds follow
//!   it with an unused-bits field. In container seeds the split runs the
//!   other way: the minimal image header keeps an unused-bits byte and the
//!   variant one replaces it with a component-count byte.
//!
//! ## Usage
//!
//! ```no_run
//! use j2kseeds::{SeedRequest, Variant};
//! use enough::Unstoppable;
//!
//! // Built-in catalog into ./seeds
//! let report = SeedRequest::new().write(Unstoppable)?;
//! assert_eq!(report.count(), 14);
//!
//! // Custom catalog, in memory only
//! let variants = [Variant::new(4096, 1, 12)];
//! for seed in SeedRequest::new().with_variants(&variants).seeds() {
//!     println!("{}: {} bytes", seed.name, seed.bytes.len());
//! }
//! # Ok::<(), j2kseeds::SeedError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod format;
mod generate;
mod variant;

pub mod j2k;
pub mod jp2;

// Re-exports
pub use enough::{Stop, Unstoppable};
pub use error::SeedError;
pub use format::{SeedFormat, SeedName};
#[cfg(feature = "std")]
pub use generate::SeedReport;
pub use generate::{DEFAULT_OUTPUT_DIR, Seed, SeedRequest};
pub use variant::{EXTREME_VARIANTS, Variant};
