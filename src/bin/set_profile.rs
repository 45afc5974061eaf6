//! Utility to set the profile and re-derive targets
//! Usage: cargo run --bin set_profile -- <gender> <age> <weight_kg> <height_cm> <activity> <goal>

use std::path::PathBuf;
use std::process::exit;

use macroplan::calc;
use macroplan::models::{ActivityLevel, Gender, Goal, Profile, ProfileData, Targets};

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
            std::fs::create_dir_all(&path).ok();
            path.push("macroplan.db");
            path
        })
}

fn usage() -> ! {
    eprintln!("Usage: set_profile <gender> <age> <weight_kg> <height_cm> <activity> <goal>");
    eprintln!("  gender:   male | female");
    eprintln!("  activity: sedentary | lightly_active | moderately_active | very_active | super_active");
    eprintln!("  goal:     cut | maintenance | lean_gain | bulk");
    exit(1);
}

fn parse_args(args: &[String]) -> Option<ProfileData> {
    if args.len() != 6 {
        return None;
    }
    Some(ProfileData {
        gender: Gender::from_str(&args[0])?,
        age: args[1].parse().ok()?,
        weight_kg: args[2].parse().ok()?,
        height_cm: args[3].parse().ok()?,
        activity_level: ActivityLevel::from_str(&args[4])?,
        goal: Goal::from_str(&args[5])?,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let data = match parse_args(&args) {
        Some(data) => data,
        None => usage(),
    };

    let db_path = get_database_path();
    println!("Database path: {}", db_path.display());

    let database = macroplan::db::Database::new(&db_path)?;

    database.with_conn(|conn| {
        macroplan::db::migrations::run_migrations(conn)?;
        Ok(())
    })?;

    let conn = database.get_conn()?;

    let profile = Profile::set(&conn, &data)?;
    println!("Profile set:");
    println!("  Gender: {}", profile.gender.as_str());
    println!("  Age: {} years", profile.age);
    println!("  Weight: {} kg", profile.weight_kg);
    println!("  Height: {} cm", profile.height_cm);
    println!("  Activity: {}", profile.activity_level.display_name());
    println!("  Goal: {}", profile.goal.display_name());

    let values = calc::derive_targets(&profile)?;
    let targets = Targets::set_derived(&conn, &values)?;
    println!("Derived targets:");
    println!("  Calories: {} kcal", targets.calories_kcal);
    println!("  Protein: {} g", targets.protein_g);
    println!("  Carbs: {} g", targets.carbs_g);
    println!("  Fat: {} g", targets.fat_g);
    println!("  Water: {:.1} L", targets.water_liters);

    Ok(())
}
