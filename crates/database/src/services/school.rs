use crate::entities::schools;
use log::info;
use models::school::{SchoolSystem, is_known_school};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub inserted: usize,
    pub updated: usize,
}

pub struct SchoolService;

impl SchoolService {
    /// Upserts every CSU and UC campus into the school table, keyed by name.
    ///
    /// Running this any number of times leaves the table in the same state.
    pub async fn seed_schools(db: &DatabaseConnection) -> Result<SeedSummary, DbErr> {
        let txn = db.begin().await?;
        let mut summary = SeedSummary::default();

        for system in SchoolSystem::all() {
            for seed in system.schools() {
                let existing = schools::Entity::find()
                    .filter(schools::Column::Name.eq(seed.name))
                    .one(&txn)
                    .await?;

                match existing {
                    Some(school) => {
                        let mut school: schools::ActiveModel = school.into();
                        school.abbreviation = Set(seed.abbreviation.to_string());
                        school.state_name = Set(seed.state_name.to_string());
                        school.state_abbreviation = Set(seed.state_abbreviation.to_string());
                        school.update(&txn).await?;
                        summary.updated += 1;
                    }
                    None => {
                        schools::ActiveModel {
                            name: Set(seed.name.to_string()),
                            abbreviation: Set(seed.abbreviation.to_string()),
                            state_name: Set(seed.state_name.to_string()),
                            state_abbreviation: Set(seed.state_abbreviation.to_string()),
                            ..Default::default()
                        }
                        .insert(&txn)
                        .await?;
                        summary.inserted += 1;
                    }
                }
            }

            info!("Seeded {} schools", system.as_full_str());
        }

        txn.commit().await?;
        info!(
            "School seeding complete: {} inserted, {} updated",
            summary.inserted, summary.updated
        );
        Ok(summary)
    }

    /// All schools, ordered by name
    pub async fn list_schools(db: &DatabaseConnection) -> Result<Vec<schools::Model>, DbErr> {
        schools::Entity::find()
            .order_by_asc(schools::Column::Name)
            .all(db)
            .await
    }

    /// Whether a school with this exact name has been seeded
    pub async fn school_exists(db: &DatabaseConnection, name: &str) -> Result<bool, DbErr> {
        // Only names from the reference lists can ever be seeded
        if !is_known_school(name) {
            return Ok(false);
        }

        let count = schools::Entity::find()
            .filter(schools::Column::Name.eq(name))
            .count(db)
            .await?;

        Ok(count > 0)
    }
}
