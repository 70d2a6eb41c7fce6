#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;
extern crate serde_json;
extern crate unicode_segmentation;

pub mod term;
pub mod token;
pub mod document;
pub mod analysis;
pub mod query;
pub mod query_parser;
pub mod termextractor;
pub mod presearcher;

pub use term::Term;
pub use token::Token;
pub use document::InputDocument;
pub use query::Query;
pub use termextractor::{QueryTerm, QueryTermExtractor, Extractor};
pub use presearcher::{Presearcher, TermFilteredPresearcher, DocumentTokenFilter, PassThroughFilter, QueryIndexDocument};
