use anyhow::Result;
use yaml_doc_core::{get_or, insert, take, Mapping, Value};

const DEFAULT_SQLITE_PATH: &str = "/var/lib/headscale/db.sqlite";

/// Legacy flat keys, removed whether or not the new section used them.
const LEGACY_KEYS: [&str; 8] = [
    "db_type", "db_path", "db_host", "db_port", "db_name", "db_user", "db_pass", "db_ssl",
];

/// Rewrite the flat `db_*` keys into the nested `database` section.
///
/// Unlike the other rules this one always runs: a config with no database
/// keys at all still gains a complete sqlite-backed `database` section. The
/// old `sqlite3` driver name is normalized to `sqlite`, and a `postgres`
/// block with fixed pool sizing is emitted only when the legacy `db_type`
/// asked for postgres.
pub fn apply(config: &mut Mapping) -> Result<()> {
    let legacy_type = config.get("db_type").cloned();
    let db_type = match &legacy_type {
        Some(Value::String(s)) if s == "sqlite3" => Value::from("sqlite"),
        Some(other) => other.clone(),
        None => Value::from("sqlite"),
    };
    let wants_postgres = matches!(&legacy_type, Some(Value::String(s)) if s == "postgres");

    let mut gorm = Mapping::new();
    insert(&mut gorm, "prepare_stmt", Value::from(true));
    insert(&mut gorm, "parameterized_queries", Value::from(true));
    insert(&mut gorm, "skip_err_record_not_found", Value::from(true));
    insert(&mut gorm, "slow_threshold", Value::from(1000));

    let mut sqlite = Mapping::new();
    insert(
        &mut sqlite,
        "path",
        get_or(config, "db_path", Value::from(DEFAULT_SQLITE_PATH)),
    );
    insert(&mut sqlite, "write_ahead_log", Value::from(true));

    let mut database = Mapping::new();
    insert(&mut database, "type", db_type);
    insert(&mut database, "debug", Value::from(false));
    insert(&mut database, "gorm", Value::Mapping(gorm));
    insert(&mut database, "sqlite", Value::Mapping(sqlite));

    if wants_postgres {
        let mut postgres = Mapping::new();
        insert(&mut postgres, "host", get_or(config, "db_host", Value::from("localhost")));
        insert(&mut postgres, "port", get_or(config, "db_port", Value::from(5432)));
        insert(&mut postgres, "name", get_or(config, "db_name", Value::from("headscale")));
        insert(&mut postgres, "user", get_or(config, "db_user", Value::from("")));
        insert(&mut postgres, "pass", get_or(config, "db_pass", Value::from("")));
        insert(&mut postgres, "ssl", get_or(config, "db_ssl", Value::from(false)));
        insert(&mut postgres, "max_open_conns", Value::from(10));
        insert(&mut postgres, "max_idle_conns", Value::from(10));
        insert(&mut postgres, "conn_max_idle_time_secs", Value::from(3600));
        insert(&mut database, "postgres", Value::Mapping(postgres));
    }

    insert(config, "database", Value::Mapping(database));
    for key in LEGACY_KEYS {
        take(config, key);
    }
    Ok(())
}
