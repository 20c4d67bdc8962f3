//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studysync_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use studysync_core::db::open_db_in_memory;
use studysync_core::{Person, PersonRepository, SqlitePersonRepository};

fn main() {
    println!("studysync_core version={}", studysync_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            let repo = SqlitePersonRepository::new(&conn);
            let probe = Person::new("Probe", "probe@example.edu");
            let status = repo
                .upsert_person(&probe)
                .and_then(|()| repo.get_person("probe@example.edu"))
                .map(|loaded| loaded.is_some());
            match status {
                Ok(true) => println!("studysync_core store=ok"),
                Ok(false) => println!("studysync_core store=missing-roundtrip"),
                Err(err) => println!("studysync_core store=error detail={err}"),
            }
        }
        Err(err) => println!("studysync_core store=error detail={err}"),
    }
}
