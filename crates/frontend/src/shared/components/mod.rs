pub mod confirm_delete_modal;
pub mod notification_toast;
pub mod pagination_controls;
pub mod search_form;
pub mod table;
