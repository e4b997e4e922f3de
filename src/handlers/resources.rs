use actix_web::{HttpResponse, Responder, web};

use super::{ListResponse, crud};
use crate::auth::middleware::AdminSession;
use crate::content::resources::{Resource, fetch_resources, filter, find_resource};
use crate::models::resources::{CreateResource, ResourceListQuery, UpdateResource};
use crate::store::ContentStore;

/// GET /api/resources — optionally narrowed with `?category=` and `?type=`.
pub async fn get_resources(
    store: web::Data<ContentStore>,
    query: web::Query<ResourceListQuery>,
) -> impl Responder {
    let mut fetched = fetch_resources(store.resources.as_ref()).await;
    fetched.items = filter(
        fetched.items,
        query.category.as_deref(),
        query.kind.as_deref(),
    );
    HttpResponse::Ok().json(ListResponse::new(fetched, "ressources"))
}

/// GET /api/resources/{id}
pub async fn get_resource(store: web::Data<ContentStore>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match find_resource(store.resources.as_ref(), &id).await {
        Some(resource) => HttpResponse::Ok().json(resource),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Resource {id} not found"),
        })),
    }
}

pub async fn admin_list_resources(
    session: AdminSession,
    store: web::Data<ContentStore>,
) -> HttpResponse {
    session.finish(crud::list::<_, Resource>(store.resources.as_ref(), "resource").await)
}

pub async fn admin_get_resource(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    session.finish(crud::get::<_, Resource>(store.resources.as_ref(), &id, "resource").await)
}

pub async fn create_resource(
    session: AdminSession,
    store: web::Data<ContentStore>,
    body: web::Json<CreateResource>,
) -> HttpResponse {
    let row = body.into_inner().into_row();
    session.finish(crud::create::<_, Resource>(store.resources.as_ref(), row, "resource").await)
}

pub async fn update_resource(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
    body: web::Json<UpdateResource>,
) -> HttpResponse {
    let id = path.into_inner();
    let update = body.into_inner();
    session.finish(
        crud::update::<_, Resource, _>(
            store.resources.as_ref(),
            &id,
            |row| update.apply(row),
            "resource",
        )
        .await,
    )
}

pub async fn delete_resource(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    session.finish(crud::delete(store.resources.as_ref(), &id, "resource").await)
}
