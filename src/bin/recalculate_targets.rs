//! Utility to re-derive targets from the stored profile
//!
//! Replaces whatever is stored, including a manual override.
//! Usage: cargo run --bin recalculate_targets

use std::path::PathBuf;

use macroplan::calc;
use macroplan::models::{Profile, Targets};

fn get_database_path() -> PathBuf {
    std::env::var("MACROPLAN_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

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
    let db_path = get_database_path();
    println!("Database: {}", db_path.display());

    let database = macroplan::db::Database::new(&db_path)?;
    let conn = database.get_conn()?;
    macroplan::db::migrations::run_migrations(&conn)?;

    let profile = match Profile::get(&conn)? {
        Some(p) => p,
        None => {
            println!("No profile has been set; run set_profile first.");
            return Ok(());
        }
    };

    if let Some(old) = Targets::get(&conn)? {
        println!(
            "Old targets ({}): {} kcal, {}p/{}c/{}f",
            old.source.as_str(),
            old.calories_kcal,
            old.protein_g,
            old.carbs_g,
            old.fat_g
        );
    }

    let values = calc::derive_targets(&profile)?;
    let new = Targets::set_derived(&conn, &values)?;
    println!(
        "New targets (derived): {} kcal, {}p/{}c/{}f, {:.1} L water",
        new.calories_kcal, new.protein_g, new.carbs_g, new.fat_g, new.water_liters
    );

    Ok(())
}
