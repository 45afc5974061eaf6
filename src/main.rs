//! macroplan
//!
//! Prints the daily nutrition dashboard: targets, energy balance, and
//! weight trend for a calendar day.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

mod build_info;
mod calc;
mod db;
mod models;
mod tools;

/// Get the database path from environment or use default
fn get_database_path() -> PathBuf {
    std::env::var("MACROPLAN_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path.push("macroplan.db");
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macroplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    // Optional date argument, defaulting to today
    let args: Vec<String> = std::env::args().collect();
    let date = match args.get(1) {
        Some(d) => d.clone(),
        None => chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };

    let db_path = get_database_path();
    tracing::info!("database path: {}", db_path.display());

    // Ensure data directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = db::Database::new(&db_path)?;

    database.with_conn(|conn| {
        db::migrations::run_migrations(conn)?;
        let version = db::migrations::get_schema_version(conn)?;
        tracing::info!("database schema version: {}", version);
        Ok(())
    })?;

    let conn = database.get_conn()?;
    let summary = tools::day_summary(&conn, &date)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
