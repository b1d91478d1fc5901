pub mod add_form;
pub mod dashboard;
pub mod quiz_view;
pub mod review_list;
