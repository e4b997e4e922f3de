use sea_orm::*;

use crate::models::testimonials;

/// Fetch all testimonials, newest first.
pub async fn get_all_testimonials(
    db: &DatabaseConnection,
) -> Result<Vec<testimonials::Model>, DbErr> {
    testimonials::Entity::find()
        .order_by_desc(testimonials::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn get_any_testimonial(
    db: &DatabaseConnection,
) -> Result<Option<testimonials::Model>, DbErr> {
    testimonials::Entity::find().one(db).await
}

pub async fn get_testimonial_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<testimonials::Model>, DbErr> {
    testimonials::Entity::find_by_id(id.to_string()).one(db).await
}

pub async fn insert_testimonials(
    db: &DatabaseConnection,
    rows: Vec<testimonials::Model>,
) -> Result<Vec<testimonials::Model>, DbErr> {
    // All rows or none.
    let txn = db.begin().await?;
    let mut inserted = Vec::with_capacity(rows.len());
    for row in rows {
        let new_testimonial = testimonials::ActiveModel {
            id: Set(row.id),
            name: Set(row.name),
            company: Set(row.company),
            role: Set(row.role),
            content: Set(row.content),
            rating: Set(row.rating),
            avatar: Set(row.avatar),
            created_at: Set(row.created_at),
            updated_at: Set(row.updated_at),
        };
        inserted.push(new_testimonial.insert(&txn).await?);
    }
    txn.commit().await?;
    Ok(inserted)
}

pub async fn update_testimonial(
    db: &DatabaseConnection,
    row: testimonials::Model,
) -> Result<Option<testimonials::Model>, DbErr> {
    let Some(existing) = testimonials::Entity::find_by_id(row.id.clone())
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    let mut active: testimonials::ActiveModel = existing.into();
    active.name = Set(row.name);
    active.company = Set(row.company);
    active.role = Set(row.role);
    active.content = Set(row.content);
    active.rating = Set(row.rating);
    active.avatar = Set(row.avatar);
    active.updated_at = Set(row.updated_at);

    active.update(db).await.map(Some)
}

pub async fn delete_testimonial(db: &DatabaseConnection, id: &str) -> Result<DeleteResult, DbErr> {
    testimonials::Entity::delete_by_id(id.to_string()).exec(db).await
}
