//! [`RemoteTable`] over a direct Postgres connection, delegating to the
//! per-table query functions in `crate::db`.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::{RemoteTable, StoreError};
use crate::db::{
    pricing as pricing_db, projects as project_db, resources as resource_db,
    services as service_db, testimonials as testimonial_db,
};
use crate::models::{pricing, projects, resources, services, testimonials};

#[async_trait]
impl RemoteTable<services::Model> for DatabaseConnection {
    async fn select_newest_first(&self) -> Result<Vec<services::Model>, StoreError> {
        Ok(service_db::get_all_services(self).await?)
    }

    async fn select_any(&self) -> Result<Option<services::Model>, StoreError> {
        Ok(service_db::get_any_service(self).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<services::Model>, StoreError> {
        Ok(service_db::get_service_by_id(self, id).await?)
    }

    async fn insert(
        &self,
        rows: Vec<services::Model>,
    ) -> Result<Vec<services::Model>, StoreError> {
        Ok(service_db::insert_services(self, rows).await?)
    }

    async fn update(
        &self,
        row: services::Model,
    ) -> Result<Option<services::Model>, StoreError> {
        Ok(service_db::update_service(self, row).await?)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        Ok(service_db::delete_service(self, id).await?.rows_affected)
    }
}

#[async_trait]
impl RemoteTable<projects::Model> for DatabaseConnection {
    async fn select_newest_first(&self) -> Result<Vec<projects::Model>, StoreError> {
        Ok(project_db::get_all_projects(self).await?)
    }

    async fn select_any(&self) -> Result<Option<projects::Model>, StoreError> {
        Ok(project_db::get_any_project(self).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<projects::Model>, StoreError> {
        Ok(project_db::get_project_by_id(self, id).await?)
    }

    async fn insert(
        &self,
        rows: Vec<projects::Model>,
    ) -> Result<Vec<projects::Model>, StoreError> {
        Ok(project_db::insert_projects(self, rows).await?)
    }

    async fn update(
        &self,
        row: projects::Model,
    ) -> Result<Option<projects::Model>, StoreError> {
        Ok(project_db::update_project(self, row).await?)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        Ok(project_db::delete_project(self, id).await?.rows_affected)
    }
}

#[async_trait]
impl RemoteTable<testimonials::Model> for DatabaseConnection {
    async fn select_newest_first(&self) -> Result<Vec<testimonials::Model>, StoreError> {
        Ok(testimonial_db::get_all_testimonials(self).await?)
    }

    async fn select_any(&self) -> Result<Option<testimonials::Model>, StoreError> {
        Ok(testimonial_db::get_any_testimonial(self).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<testimonials::Model>, StoreError> {
        Ok(testimonial_db::get_testimonial_by_id(self, id).await?)
    }

    async fn insert(
        &self,
        rows: Vec<testimonials::Model>,
    ) -> Result<Vec<testimonials::Model>, StoreError> {
        Ok(testimonial_db::insert_testimonials(self, rows).await?)
    }

    async fn update(
        &self,
        row: testimonials::Model,
    ) -> Result<Option<testimonials::Model>, StoreError> {
        Ok(testimonial_db::update_testimonial(self, row).await?)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        Ok(testimonial_db::delete_testimonial(self, id).await?.rows_affected)
    }
}

#[async_trait]
impl RemoteTable<resources::Model> for DatabaseConnection {
    async fn select_newest_first(&self) -> Result<Vec<resources::Model>, StoreError> {
        Ok(resource_db::get_all_resources(self).await?)
    }

    async fn select_any(&self) -> Result<Option<resources::Model>, StoreError> {
        Ok(resource_db::get_any_resource(self).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<resources::Model>, StoreError> {
        Ok(resource_db::get_resource_by_id(self, id).await?)
    }

    async fn insert(
        &self,
        rows: Vec<resources::Model>,
    ) -> Result<Vec<resources::Model>, StoreError> {
        Ok(resource_db::insert_resources(self, rows).await?)
    }

    async fn update(
        &self,
        row: resources::Model,
    ) -> Result<Option<resources::Model>, StoreError> {
        Ok(resource_db::update_resource(self, row).await?)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        Ok(resource_db::delete_resource(self, id).await?.rows_affected)
    }
}

#[async_trait]
impl RemoteTable<pricing::Model> for DatabaseConnection {
    async fn select_newest_first(&self) -> Result<Vec<pricing::Model>, StoreError> {
        Ok(pricing_db::get_all_plans(self).await?)
    }

    async fn select_any(&self) -> Result<Option<pricing::Model>, StoreError> {
        Ok(pricing_db::get_any_plan(self).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<pricing::Model>, StoreError> {
        Ok(pricing_db::get_plan_by_id(self, id).await?)
    }

    async fn insert(&self, rows: Vec<pricing::Model>) -> Result<Vec<pricing::Model>, StoreError> {
        Ok(pricing_db::insert_plans(self, rows).await?)
    }

    async fn update(&self, row: pricing::Model) -> Result<Option<pricing::Model>, StoreError> {
        Ok(pricing_db::update_plan(self, row).await?)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        Ok(pricing_db::delete_plan(self, id).await?.rows_affected)
    }
}
