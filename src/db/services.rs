use sea_orm::*;

use crate::models::services;

/// Fetch all services, newest first.
pub async fn get_all_services(db: &DatabaseConnection) -> Result<Vec<services::Model>, DbErr> {
    services::Entity::find()
        .order_by_desc(services::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch at most one service, used to tell an empty table apart.
pub async fn get_any_service(db: &DatabaseConnection) -> Result<Option<services::Model>, DbErr> {
    services::Entity::find().one(db).await
}

/// Fetch a single service by ID.
pub async fn get_service_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<services::Model>, DbErr> {
    services::Entity::find_by_id(id.to_string()).one(db).await
}

/// Insert service rows in one transaction, returning the stored rows.
pub async fn insert_services(
    db: &DatabaseConnection,
    rows: Vec<services::Model>,
) -> Result<Vec<services::Model>, DbErr> {
    // All rows or none.
    let txn = db.begin().await?;
    let mut inserted = Vec::with_capacity(rows.len());
    for row in rows {
        let new_service = services::ActiveModel {
            id: Set(row.id),
            title: Set(row.title),
            icon: Set(row.icon),
            description: Set(row.description),
            longdescription: Set(row.longdescription),
            image: Set(row.image),
            status: Set(row.status),
            created_at: Set(row.created_at),
            updated_at: Set(row.updated_at),
        };
        inserted.push(new_service.insert(&txn).await?);
    }
    txn.commit().await?;
    Ok(inserted)
}

/// Overwrite an existing service. Returns `None` if the ID is unknown.
pub async fn update_service(
    db: &DatabaseConnection,
    row: services::Model,
) -> Result<Option<services::Model>, DbErr> {
    let Some(existing) = services::Entity::find_by_id(row.id.clone()).one(db).await? else {
        return Ok(None);
    };

    let mut active: services::ActiveModel = existing.into();
    active.title = Set(row.title);
    active.icon = Set(row.icon);
    active.description = Set(row.description);
    active.longdescription = Set(row.longdescription);
    active.image = Set(row.image);
    active.status = Set(row.status);
    active.updated_at = Set(row.updated_at);

    active.update(db).await.map(Some)
}

/// Delete a service by ID.
pub async fn delete_service(db: &DatabaseConnection, id: &str) -> Result<DeleteResult, DbErr> {
    services::Entity::delete_by_id(id.to_string()).exec(db).await
}
