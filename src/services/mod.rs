//! Service layer for business logic
//!
//! These services are what the boundary collaborators (HTTP routes, CLI,
//! admin tools) call into.

mod analytics_service;
mod code_generator;
mod link_service;
mod redirect;

pub use analytics_service::*;
pub use code_generator::*;
pub use link_service::*;
pub use redirect::*;
