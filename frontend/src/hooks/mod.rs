pub mod use_courses;
