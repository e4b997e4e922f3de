use actix_web::{HttpResponse, Responder, web};

use super::{ListResponse, crud};
use crate::auth::middleware::AdminSession;
use crate::content::services::{Service, fetch_services, find_service};
use crate::models::services::{CreateService, UpdateService};
use crate::store::ContentStore;

/// GET /api/services — published services, or the defaults.
pub async fn get_services(store: web::Data<ContentStore>) -> impl Responder {
    let fetched = fetch_services(store.services.as_ref()).await;
    HttpResponse::Ok().json(ListResponse::new(fetched, "services"))
}

/// GET /api/services/{id}
pub async fn get_service(store: web::Data<ContentStore>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match find_service(store.services.as_ref(), &id).await {
        Some(service) => HttpResponse::Ok().json(service),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Service {id} not found"),
        })),
    }
}

/// GET /api/admin/services
pub async fn admin_list_services(
    session: AdminSession,
    store: web::Data<ContentStore>,
) -> HttpResponse {
    session.finish(crud::list::<_, Service>(store.services.as_ref(), "service").await)
}

/// GET /api/admin/services/{id}
pub async fn admin_get_service(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    session.finish(crud::get::<_, Service>(store.services.as_ref(), &id, "service").await)
}

/// POST /api/admin/services
pub async fn create_service(
    session: AdminSession,
    store: web::Data<ContentStore>,
    body: web::Json<CreateService>,
) -> HttpResponse {
    let row = body.into_inner().into_row();
    session.finish(crud::create::<_, Service>(store.services.as_ref(), row, "service").await)
}

/// PUT /api/admin/services/{id}
pub async fn update_service(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
    body: web::Json<UpdateService>,
) -> HttpResponse {
    let id = path.into_inner();
    let update = body.into_inner();
    session.finish(
        crud::update::<_, Service, _>(store.services.as_ref(), &id, |row| update.apply(row), "service")
            .await,
    )
}

/// DELETE /api/admin/services/{id}
pub async fn delete_service(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    session.finish(crud::delete(store.services.as_ref(), &id, "service").await)
}
