pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod entity_view;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod modal;
pub mod rest_client;
pub mod storage;
