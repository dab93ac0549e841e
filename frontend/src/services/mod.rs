pub mod course_data;
pub mod date_utils;
pub mod logging;
pub mod navigation;
