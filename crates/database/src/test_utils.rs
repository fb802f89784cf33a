use crate::entities::{courses, users};
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory database with all migrations applied
pub async fn setup_db() -> DatabaseConnection {
    // A single pooled connection keeps every query on the same in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn insert_user(db: &DatabaseConnection, subject: &str) -> users::Model {
    users::ActiveModel {
        subject: Set(subject.to_string()),
        username: Set(subject.to_string()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_course(db: &DatabaseConnection, code: &str) -> courses::Model {
    let now = Utc::now().naive_utc();
    courses::ActiveModel {
        code: Set(code.to_string()),
        title: Set(format!("{code} title")),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
