//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cinelog_core` linkage and
//!   database bootstrap.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("cinelog_core ping={}", cinelog_core::ping());
    println!("cinelog_core version={}", cinelog_core::core_version());

    match cinelog_core::db::open_db_in_memory() {
        Ok(_) => println!("cinelog_core db=ok"),
        Err(err) => {
            eprintln!("cinelog_core db=error {err}");
            std::process::exit(1);
        }
    }
}
