//! Generic order-preserving YAML document primitives used by higher-level tools.

pub mod doc;
pub mod parser;
pub mod writer;

pub use doc::{get_or, insert, take};
pub use parser::{parse, parse_file, ParseError};
pub use serde_yaml::{Mapping, Number, Sequence, Value};
pub use writer::{write, write_file, WriteError};
