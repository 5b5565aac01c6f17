//! Loads the ingredient catalog from a JSON file into the database.
//!
//! Usage: `load_ingredients [path]`, defaulting to `ingredients.json` in the
//! working directory. The file holds an array of
//! `{"name": ..., "measurement_unit": ...}` objects; rows already present
//! are skipped via the (name, measurement_unit) unique index.

use sea_orm::{sea_query::OnConflict, ActiveValue, EntityTrait};
use serde::Deserialize;

use larder::{config::Config, startup};

#[derive(Deserialize)]
struct IngredientRow {
    name: String,
    measurement_unit: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ingredients.json".to_string());
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));
    let rows: Vec<IngredientRow> = serde_json::from_str(&data)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e));

    if rows.is_empty() {
        tracing::info!("No ingredients found in {}", path);
        return;
    }

    let total = rows.len();
    let models = rows
        .into_iter()
        .map(|row| entity::ingredient::ActiveModel {
            name: ActiveValue::Set(row.name),
            measurement_unit: ActiveValue::Set(row.measurement_unit),
            ..Default::default()
        });

    let inserted = entity::prelude::Ingredient::insert_many(models)
        .on_conflict(
            OnConflict::columns([
                entity::ingredient::Column::Name,
                entity::ingredient::Column::MeasurementUnit,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&db)
        .await
        .unwrap();

    tracing::info!(
        "Loaded {} of {} ingredients from {}",
        inserted,
        total,
        path
    );
}
