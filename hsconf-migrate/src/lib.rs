//! Headscale configuration schema migration.
//!
//! Early headscale releases used a flat, single-level YAML config file.
//! Later releases group related settings into nested sections: address
//! pools under `prefixes`, resolver settings under `dns`, storage under
//! `database`, and ACL policy under `policy`. This library rewrites a
//! legacy flat document into the nested layout in one pass, leaving every
//! key it does not recognize exactly where the operator put it.
//!
//! # Architecture
//!
//! - [`migrate`] — Load, transform, save orchestration
//! - [`transform`] — The four independent rewrite rules
//!   - [`transform::prefixes`] — `ip_prefixes` into `prefixes`
//!   - [`transform::dns`] — `dns_config` into `dns`
//!   - [`transform::database`] — flat `db_*` keys into `database`
//!   - [`transform::policy`] — `acl_policy_path` into `policy`
//!
//! # Built on yaml-doc-core
//!
//! This crate uses `yaml-doc-core` for order-preserving YAML parsing and
//! writing. All headscale schema knowledge is contained in this crate.

pub mod migrate;
pub mod transform;
