//! 业务逻辑服务层

mod form_controller;
mod status_service;

pub use form_controller::FormController;
pub use status_service::StatusService;
