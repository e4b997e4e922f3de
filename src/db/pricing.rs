use sea_orm::*;

use crate::models::pricing;

/// Fetch all pricing plans, newest first.
pub async fn get_all_plans(db: &DatabaseConnection) -> Result<Vec<pricing::Model>, DbErr> {
    pricing::Entity::find()
        .order_by_desc(pricing::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn get_any_plan(db: &DatabaseConnection) -> Result<Option<pricing::Model>, DbErr> {
    pricing::Entity::find().one(db).await
}

pub async fn get_plan_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<pricing::Model>, DbErr> {
    pricing::Entity::find_by_id(id.to_string()).one(db).await
}

pub async fn insert_plans(
    db: &DatabaseConnection,
    rows: Vec<pricing::Model>,
) -> Result<Vec<pricing::Model>, DbErr> {
    // All rows or none.
    let txn = db.begin().await?;
    let mut inserted = Vec::with_capacity(rows.len());
    for row in rows {
        let new_plan = pricing::ActiveModel {
            id: Set(row.id),
            name: Set(row.name),
            price: Set(row.price),
            description: Set(row.description),
            features: Set(row.features),
            popular: Set(row.popular),
            created_at: Set(row.created_at),
            updated_at: Set(row.updated_at),
        };
        inserted.push(new_plan.insert(&txn).await?);
    }
    txn.commit().await?;
    Ok(inserted)
}

pub async fn update_plan(
    db: &DatabaseConnection,
    row: pricing::Model,
) -> Result<Option<pricing::Model>, DbErr> {
    let Some(existing) = pricing::Entity::find_by_id(row.id.clone()).one(db).await? else {
        return Ok(None);
    };

    let mut active: pricing::ActiveModel = existing.into();
    active.name = Set(row.name);
    active.price = Set(row.price);
    active.description = Set(row.description);
    active.features = Set(row.features);
    active.popular = Set(row.popular);
    active.updated_at = Set(row.updated_at);

    active.update(db).await.map(Some)
}

pub async fn delete_plan(db: &DatabaseConnection, id: &str) -> Result<DeleteResult, DbErr> {
    pricing::Entity::delete_by_id(id.to_string()).exec(db).await
}
