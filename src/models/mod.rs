pub mod pricing;
pub mod projects;
pub mod resources;
pub mod services;
pub mod testimonials;
