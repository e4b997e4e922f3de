use sea_orm::*;

use crate::models::projects;

/// Fetch all projects, newest first.
pub async fn get_all_projects(db: &DatabaseConnection) -> Result<Vec<projects::Model>, DbErr> {
    projects::Entity::find()
        .order_by_desc(projects::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn get_any_project(db: &DatabaseConnection) -> Result<Option<projects::Model>, DbErr> {
    projects::Entity::find().one(db).await
}

/// Fetch a single project by ID.
pub async fn get_project_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<projects::Model>, DbErr> {
    projects::Entity::find_by_id(id.to_string()).one(db).await
}

pub async fn insert_projects(
    db: &DatabaseConnection,
    rows: Vec<projects::Model>,
) -> Result<Vec<projects::Model>, DbErr> {
    // All rows or none.
    let txn = db.begin().await?;
    let mut inserted = Vec::with_capacity(rows.len());
    for row in rows {
        let new_project = projects::ActiveModel {
            id: Set(row.id),
            title: Set(row.title),
            category: Set(row.category),
            client: Set(row.client),
            description: Set(row.description),
            image: Set(row.image),
            status: Set(row.status),
            date: Set(row.date),
            link: Set(row.link),
            created_at: Set(row.created_at),
            updated_at: Set(row.updated_at),
        };
        inserted.push(new_project.insert(&txn).await?);
    }
    txn.commit().await?;
    Ok(inserted)
}

/// Overwrite an existing project. Returns `None` if the ID is unknown.
pub async fn update_project(
    db: &DatabaseConnection,
    row: projects::Model,
) -> Result<Option<projects::Model>, DbErr> {
    let Some(existing) = projects::Entity::find_by_id(row.id.clone()).one(db).await? else {
        return Ok(None);
    };

    let mut active: projects::ActiveModel = existing.into();
    active.title = Set(row.title);
    active.category = Set(row.category);
    active.client = Set(row.client);
    active.description = Set(row.description);
    active.image = Set(row.image);
    active.status = Set(row.status);
    active.date = Set(row.date);
    active.link = Set(row.link);
    active.updated_at = Set(row.updated_at);

    active.update(db).await.map(Some)
}

/// Delete a project by ID.
pub async fn delete_project(db: &DatabaseConnection, id: &str) -> Result<DeleteResult, DbErr> {
    projects::Entity::delete_by_id(id.to_string()).exec(db).await
}
