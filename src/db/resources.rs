use sea_orm::*;

use crate::models::resources;

/// Fetch all resources, newest first.
pub async fn get_all_resources(db: &DatabaseConnection) -> Result<Vec<resources::Model>, DbErr> {
    resources::Entity::find()
        .order_by_desc(resources::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn get_any_resource(db: &DatabaseConnection) -> Result<Option<resources::Model>, DbErr> {
    resources::Entity::find().one(db).await
}

pub async fn get_resource_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<resources::Model>, DbErr> {
    resources::Entity::find_by_id(id.to_string()).one(db).await
}

pub async fn insert_resources(
    db: &DatabaseConnection,
    rows: Vec<resources::Model>,
) -> Result<Vec<resources::Model>, DbErr> {
    // All rows or none.
    let txn = db.begin().await?;
    let mut inserted = Vec::with_capacity(rows.len());
    for row in rows {
        let new_resource = resources::ActiveModel {
            id: Set(row.id),
            title: Set(row.title),
            description: Set(row.description),
            content: Set(row.content),
            excerpt: Set(row.excerpt),
            image: Set(row.image),
            category: Set(row.category),
            kind: Set(row.kind),
            downloadurl: Set(row.downloadurl),
            author: Set(row.author),
            date: Set(row.date),
            readtime: Set(row.readtime),
            created_at: Set(row.created_at),
            updated_at: Set(row.updated_at),
        };
        inserted.push(new_resource.insert(&txn).await?);
    }
    txn.commit().await?;
    Ok(inserted)
}

pub async fn update_resource(
    db: &DatabaseConnection,
    row: resources::Model,
) -> Result<Option<resources::Model>, DbErr> {
    let Some(existing) = resources::Entity::find_by_id(row.id.clone()).one(db).await? else {
        return Ok(None);
    };

    let mut active: resources::ActiveModel = existing.into();
    active.title = Set(row.title);
    active.description = Set(row.description);
    active.content = Set(row.content);
    active.excerpt = Set(row.excerpt);
    active.image = Set(row.image);
    active.category = Set(row.category);
    active.kind = Set(row.kind);
    active.downloadurl = Set(row.downloadurl);
    active.author = Set(row.author);
    active.date = Set(row.date);
    active.readtime = Set(row.readtime);
    active.updated_at = Set(row.updated_at);

    active.update(db).await.map(Some)
}

pub async fn delete_resource(db: &DatabaseConnection, id: &str) -> Result<DeleteResult, DbErr> {
    resources::Entity::delete_by_id(id.to_string()).exec(db).await
}
