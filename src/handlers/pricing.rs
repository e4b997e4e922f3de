use actix_web::{HttpResponse, Responder, web};

use super::{ListResponse, crud};
use crate::auth::middleware::AdminSession;
use crate::content::pricing::{PricingPlan, fetch_pricing};
use crate::models::pricing::{CreatePricingPlan, UpdatePricingPlan};
use crate::store::ContentStore;

/// GET /api/pricing
pub async fn get_pricing(store: web::Data<ContentStore>) -> impl Responder {
    let fetched = fetch_pricing(store.pricing.as_ref()).await;
    HttpResponse::Ok().json(ListResponse::new(fetched, "tarifs"))
}

pub async fn admin_list_plans(session: AdminSession, store: web::Data<ContentStore>) -> HttpResponse {
    session.finish(crud::list::<_, PricingPlan>(store.pricing.as_ref(), "pricing plan").await)
}

pub async fn admin_get_plan(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    session.finish(crud::get::<_, PricingPlan>(store.pricing.as_ref(), &id, "pricing plan").await)
}

pub async fn create_plan(
    session: AdminSession,
    store: web::Data<ContentStore>,
    body: web::Json<CreatePricingPlan>,
) -> HttpResponse {
    let row = body.into_inner().into_row();
    session.finish(crud::create::<_, PricingPlan>(store.pricing.as_ref(), row, "pricing plan").await)
}

pub async fn update_plan(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
    body: web::Json<UpdatePricingPlan>,
) -> HttpResponse {
    let id = path.into_inner();
    let update = body.into_inner();
    session.finish(
        crud::update::<_, PricingPlan, _>(
            store.pricing.as_ref(),
            &id,
            |row| update.apply(row),
            "pricing plan",
        )
        .await,
    )
}

pub async fn delete_plan(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    session.finish(crud::delete(store.pricing.as_ref(), &id, "pricing plan").await)
}
