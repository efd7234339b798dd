use anyhow::{bail, Result};
use yaml_doc_core::{get_or, insert, take, Mapping, Value};

/// Rewrite `dns_config` into the nested `dns` section.
///
/// Every field carries a default, so a sparse legacy block still yields a
/// complete section. Global `nameservers` and per-domain
/// `restricted_nameservers` merge into one `nameservers` block with
/// `global` and `split` entries, and `domains` is renamed to
/// `search_domains`.
pub fn apply(config: &mut Mapping) -> Result<()> {
    let Some(legacy) = take(config, "dns_config") else {
        return Ok(());
    };
    let Value::Mapping(legacy) = legacy else {
        bail!("dns_config must be a mapping");
    };

    let mut nameservers = Mapping::new();
    insert(
        &mut nameservers,
        "global",
        get_or(&legacy, "nameservers", Value::Sequence(Vec::new())),
    );
    insert(
        &mut nameservers,
        "split",
        get_or(&legacy, "restricted_nameservers", Value::Mapping(Mapping::new())),
    );

    let mut dns = Mapping::new();
    insert(&mut dns, "magic_dns", get_or(&legacy, "magic_dns", Value::from(true)));
    insert(
        &mut dns,
        "override_local_dns",
        get_or(&legacy, "override_local_dns", Value::from(true)),
    );
    insert(
        &mut dns,
        "base_domain",
        get_or(&legacy, "base_domain", Value::from("example.com")),
    );
    insert(&mut dns, "nameservers", Value::Mapping(nameservers));
    insert(
        &mut dns,
        "search_domains",
        get_or(&legacy, "domains", Value::Sequence(Vec::new())),
    );
    insert(
        &mut dns,
        "extra_records",
        get_or(&legacy, "extra_records", Value::Sequence(Vec::new())),
    );
    insert(config, "dns", Value::Mapping(dns));
    Ok(())
}
