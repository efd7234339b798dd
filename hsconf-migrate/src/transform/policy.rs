use anyhow::Result;
use yaml_doc_core::{insert, take, Mapping, Value};

/// Rewrite `acl_policy_path` into the nested `policy` section.
///
/// The new schema supports policy stored in the database as well, but a
/// migrated config always uses file mode. A null path becomes an empty
/// string. Absent `acl_policy_path` leaves the document without any
/// `policy` section.
pub fn apply(config: &mut Mapping) -> Result<()> {
    let Some(path) = take(config, "acl_policy_path") else {
        return Ok(());
    };
    let path = match path {
        Value::Null => Value::from(""),
        other => other,
    };

    let mut policy = Mapping::new();
    insert(&mut policy, "mode", Value::from("file"));
    insert(&mut policy, "path", path);
    insert(config, "policy", Value::Mapping(policy));
    Ok(())
}
