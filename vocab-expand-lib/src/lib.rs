pub mod types;
pub mod error;
pub mod irregular;
pub mod rules;
pub mod inflect;
pub mod lexicon;
pub mod plural;
pub mod dictionary;
pub mod filter;
pub mod checkpoint;
pub mod csv_io;
pub mod output;
pub mod pipeline;
pub mod filters;

pub use checkpoint::Checkpoint;
pub use dictionary::ValidWordIndex;
pub use error::{ExpandError, Result};
pub use inflect::{NounInflector, VerbInflector};
pub use lexicon::LexiconInflector;
pub use pipeline::{run, ExpandConfig, Expander, RunSummary};
pub use types::{Row, VariantCandidate, VariantKind};
