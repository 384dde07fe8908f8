//! The data-wrangling core: table assembly, feature derivation, and the
//! aggregates that define each chart's contract.

pub mod aggregate;
pub mod derive;
pub mod stopwords;
pub mod table;

pub use aggregate::{DAY_ABBRS, Metric};
pub use derive::{DerivedVideoRecord, derive_features, parse_duration_secs};
pub use stopwords::Stopwords;
pub use table::{ChannelStats, VideoRecord, assemble};
