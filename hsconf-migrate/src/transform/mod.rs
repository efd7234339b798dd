//! Rewrite rules that migrate legacy flat keys into nested sections.
//!
//! Each rule triggers on the presence of its legacy key(s) and is a no-op
//! otherwise; the database rule always runs. The rules are independent and
//! order-insensitive with respect to each other. New sections are appended
//! to the document in rule order; untouched keys keep their place.

pub mod database;
pub mod dns;
pub mod policy;
pub mod prefixes;

use anyhow::Result;
use yaml_doc_core::Mapping;

/// Run all four rewrite rules over the document mapping.
pub fn apply_all(config: &mut Mapping) -> Result<()> {
    prefixes::apply(config)?;
    dns::apply(config)?;
    database::apply(config)?;
    policy::apply(config)?;
    Ok(())
}
