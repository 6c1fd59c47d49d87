//! Investor recommendation: similarity retrieval followed by hard-constraint filtering.
//!
//! [`Recommender`] embeds a [`StartupQuery`], over-fetches from the vector index, decodes
//! hits through the catalog codec, and keeps only candidates that pass
//! [`check_admissible`]. Similarity order is preserved throughout.

pub mod error;
pub mod filter;
pub mod query;
pub mod recommender;
pub mod types;


pub use error::MatchingError;
pub use filter::{Rejection, check_admissible, filter_candidates};
pub use query::StartupQuery;
pub use recommender::Recommender;
pub use types::CandidateMatch;
