use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::{env, fs, path::Path};
use util::config;

#[tokio::main]
async fn main() {
    let db_path = config::database_path();
    let url = format!("sqlite://{}?mode=rwc", db_path);
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&db_path);
            run_migrations(&url).await;
        }
        _ => {
            create_db_dir(&db_path);
            run_migrations(&url).await;
        }
    }
}

async fn run_migrations(url: &str) {
    let db = sea_orm::Database::connect(url)
        .await
        .expect("DB connection failed");

    println!("Running migrations...");
    Migrator::up(&db, None).await.expect("Migrations failed");
    println!("Migrations applied");
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn create_db_dir(path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent).expect("Failed to create DB directory");
    }
}
