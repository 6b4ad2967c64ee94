pub mod dashboard;
pub mod r#match;
pub mod player;
