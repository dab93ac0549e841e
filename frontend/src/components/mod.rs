pub mod course_card;
pub mod course_card_skeleton;
pub mod icons;
