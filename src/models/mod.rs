pub mod about;
pub mod achievement;
pub mod blog;
pub mod certification;
pub mod contact;
pub mod education;
pub mod experience;
pub mod message;
pub mod profile;
pub mod project;
pub mod resume;
pub mod skill;
pub mod social;
pub mod testimonial;
pub mod user;

pub use about::*;
pub use achievement::*;
pub use blog::*;
pub use certification::*;
pub use contact::*;
pub use education::*;
pub use experience::*;
pub use message::*;
pub use profile::*;
pub use project::*;
pub use resume::*;
pub use skill::*;
pub use social::*;
pub use testimonial::*;
pub use user::*;
