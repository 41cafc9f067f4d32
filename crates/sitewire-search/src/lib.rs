//! Fixed in-memory keyword index for the encyclopedia pages.
//!
//! The "index" is a hand-written mapping from page identifier to an ordered
//! list of `{title, keywords}` records, baked in at build time. Queries are
//! case-insensitive substring scans over every record of every page, in
//! declaration order. Deliberately no ranking, no tokenization, no fuzzy
//! matching. The whole dataset is a few dozen records; a linear scan per
//! keystroke is the design, not a shortcut.
//!
//! # Example
//!
//! ```
//! use sitewire_search::{QueryOutcome, SearchIndex};
//!
//! let index = SearchIndex::builtin();
//! match index.query("qin") {
//!     QueryOutcome::Matches(hits) => {
//!         assert_eq!(hits.len(), 1);
//!         assert_eq!(hits[0].page, "istorie.html");
//!     }
//!     QueryOutcome::TooShort => unreachable!(),
//! }
//! ```

mod data;
mod index;

pub use data::BUILTIN_PAGES;
pub use index::{PageRecords, QueryOutcome, SearchHit, SearchIndex, SearchRecord};
pub use index::{MIN_QUERY_LEN, RESULT_LIMIT};
