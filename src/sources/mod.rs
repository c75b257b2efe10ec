//! Module source discovery.
//!
//! A source finder enumerates the candidate files of a module. The
//! generator only depends on the [`SourceFinder`] trait, so callers can
//! plug in their own enumeration.

pub mod source;
pub mod walk;

pub use source::{DiscoveredFile, SourceFinder};
pub use walk::WalkSourceFinder;
