mod data;
mod link;
mod models;

pub use link::{Link, LinkTarget};
pub use models::{
    CourseEntry, Education, Footer, Grade, Photo, Portfolio, ProjectEntry, SkillEntry, SkillLevel,
};
