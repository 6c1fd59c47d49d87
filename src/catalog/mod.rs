//! Investor catalog: the normalization boundary between raw investor records and the index.
//!
//! Raw records ([`InvestorRecord`]) are validated once into [`Investor`], encoded into index
//! metadata by [`codec`], and decoded back into [`StoredInvestor`] when hits are read.
//! Nothing downstream of [`codec::decode_metadata`] re-parses stored strings.

pub mod codec;
pub mod error;
pub mod source;
pub mod sync;
pub mod types;


pub use codec::{decode_list, decode_metadata, encode_list, encode_metadata};
pub use error::CatalogError;
pub use source::{InvestorSource, JsonInvestorSource};
pub use sync::{CatalogSync, SyncOutcome, SyncReport};
pub use types::{ContactRecord, Investor, InvestorRecord, StoredInvestor, TicketRange};
