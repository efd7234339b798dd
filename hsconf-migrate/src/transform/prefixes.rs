use anyhow::{bail, Result};
use yaml_doc_core::{insert, take, Mapping, Value};

const DEFAULT_V4: &str = "100.64.0.0/10";
const DEFAULT_V6: &str = "fd7a:115c:a1e0::/48";

/// Rewrite `ip_prefixes` into the nested `prefixes` section.
///
/// Entries are partitioned by address family on the presence of a colon.
/// Only the first entry of each family is kept; the remainder are silently
/// dropped, matching the historical migration behavior of the flat schema.
/// A family with no entry falls back to headscale's stock CGNAT v4 range or
/// ULA v6 range, and allocation is always `sequential`.
pub fn apply(config: &mut Mapping) -> Result<()> {
    let Some(legacy) = take(config, "ip_prefixes") else {
        return Ok(());
    };
    let Value::Sequence(entries) = legacy else {
        bail!("ip_prefixes must be a sequence of CIDR strings");
    };

    let mut v4 = None;
    let mut v6 = None;
    for entry in &entries {
        let Some(cidr) = entry.as_str() else {
            bail!("ip_prefixes entries must be strings");
        };
        let slot = if cidr.contains(':') { &mut v6 } else { &mut v4 };
        if slot.is_none() {
            *slot = Some(cidr.to_string());
        }
    }

    let mut prefixes = Mapping::new();
    insert(&mut prefixes, "v4", Value::from(v4.as_deref().unwrap_or(DEFAULT_V4)));
    insert(&mut prefixes, "v6", Value::from(v6.as_deref().unwrap_or(DEFAULT_V6)));
    insert(&mut prefixes, "allocation", Value::from("sequential"));
    insert(config, "prefixes", Value::Mapping(prefixes));
    Ok(())
}
