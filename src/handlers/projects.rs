use actix_web::{HttpResponse, Responder, web};

use super::{ListResponse, crud};
use crate::auth::middleware::AdminSession;
use crate::content::projects::{
    Project, categories, fetch_projects, filter_by_category, find_project,
};
use crate::models::projects::{CreateProject, ProjectListQuery, UpdateProject};
use crate::store::ContentStore;

/// GET /api/projects — optionally narrowed with `?category=`.
pub async fn get_projects(
    store: web::Data<ContentStore>,
    query: web::Query<ProjectListQuery>,
) -> impl Responder {
    let mut fetched = fetch_projects(store.projects.as_ref()).await;
    if let Some(category) = query.category.as_deref() {
        fetched.items = filter_by_category(fetched.items, category);
    }
    HttpResponse::Ok().json(ListResponse::new(fetched, "projets"))
}

/// GET /api/projects/categories
pub async fn get_project_categories(store: web::Data<ContentStore>) -> impl Responder {
    let fetched = fetch_projects(store.projects.as_ref()).await;
    HttpResponse::Ok().json(categories(&fetched.items))
}

/// GET /api/projects/{id}
pub async fn get_project(store: web::Data<ContentStore>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match find_project(store.projects.as_ref(), &id).await {
        Some(project) => HttpResponse::Ok().json(project),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Project {id} not found"),
        })),
    }
}

/// GET /api/admin/projects
pub async fn admin_list_projects(
    session: AdminSession,
    store: web::Data<ContentStore>,
) -> HttpResponse {
    session.finish(crud::list::<_, Project>(store.projects.as_ref(), "project").await)
}

/// GET /api/admin/projects/categories — categories over the stored rows only.
pub async fn admin_project_categories(
    session: AdminSession,
    store: web::Data<ContentStore>,
) -> HttpResponse {
    let response = match store.projects.select_newest_first().await {
        Ok(rows) => {
            let projects: Vec<Project> = rows.into_iter().map(Project::from).collect();
            HttpResponse::Ok().json(categories(&projects))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch projects: {e}"),
        })),
    };
    session.finish(response)
}

/// GET /api/admin/projects/{id}
pub async fn admin_get_project(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    session.finish(crud::get::<_, Project>(store.projects.as_ref(), &id, "project").await)
}

/// POST /api/admin/projects
pub async fn create_project(
    session: AdminSession,
    store: web::Data<ContentStore>,
    body: web::Json<CreateProject>,
) -> HttpResponse {
    let row = body.into_inner().into_row();
    session.finish(crud::create::<_, Project>(store.projects.as_ref(), row, "project").await)
}

/// PUT /api/admin/projects/{id}
pub async fn update_project(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
    body: web::Json<UpdateProject>,
) -> HttpResponse {
    let id = path.into_inner();
    let update = body.into_inner();
    session.finish(
        crud::update::<_, Project, _>(store.projects.as_ref(), &id, |row| update.apply(row), "project")
            .await,
    )
}

/// DELETE /api/admin/projects/{id}
pub async fn delete_project(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    session.finish(crud::delete(store.projects.as_ref(), &id, "project").await)
}
