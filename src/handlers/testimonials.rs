use actix_web::{HttpResponse, Responder, web};

use super::{ListResponse, crud};
use crate::auth::middleware::AdminSession;
use crate::content::testimonials::{Testimonial, fetch_testimonials};
use crate::models::testimonials::{CreateTestimonial, UpdateTestimonial};
use crate::store::ContentStore;

/// GET /api/testimonials
pub async fn get_testimonials(store: web::Data<ContentStore>) -> impl Responder {
    let fetched = fetch_testimonials(store.testimonials.as_ref()).await;
    HttpResponse::Ok().json(ListResponse::new(fetched, "témoignages"))
}

pub async fn admin_list_testimonials(
    session: AdminSession,
    store: web::Data<ContentStore>,
) -> HttpResponse {
    session.finish(crud::list::<_, Testimonial>(store.testimonials.as_ref(), "testimonial").await)
}

pub async fn admin_get_testimonial(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    session.finish(
        crud::get::<_, Testimonial>(store.testimonials.as_ref(), &id, "testimonial").await,
    )
}

pub async fn create_testimonial(
    session: AdminSession,
    store: web::Data<ContentStore>,
    body: web::Json<CreateTestimonial>,
) -> HttpResponse {
    let row = body.into_inner().into_row();
    session.finish(
        crud::create::<_, Testimonial>(store.testimonials.as_ref(), row, "testimonial").await,
    )
}

pub async fn update_testimonial(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
    body: web::Json<UpdateTestimonial>,
) -> HttpResponse {
    let id = path.into_inner();
    let update = body.into_inner();
    session.finish(
        crud::update::<_, Testimonial, _>(
            store.testimonials.as_ref(),
            &id,
            |row| update.apply(row),
            "testimonial",
        )
        .await,
    )
}

pub async fn delete_testimonial(
    session: AdminSession,
    store: web::Data<ContentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    session.finish(crud::delete(store.testimonials.as_ref(), &id, "testimonial").await)
}
