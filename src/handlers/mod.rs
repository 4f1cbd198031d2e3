pub mod auth;
pub mod message;
pub mod resource;
pub mod singleton;
pub mod upload;

pub use auth::{login, me};
pub use message::{mark_read, unread};
pub use resource::{
    bulk_create, create_item, delete_item, get_item, list_items, list_published, update_item,
};
pub use singleton::{get_singleton, update_singleton};
pub use upload::upload_file;

use crate::models::{
    About, Achievement, Blog, Certification, Contact, Education, Experience, Message, Profile,
    Project, Resume, Skill, SocialLink, Testimonial,
};
use crate::resource::{Collection, Resource};
use crate::schema::FieldSpec;

/// Field table the backend validates incoming payloads against
pub fn fields_for(collection: Collection) -> &'static [FieldSpec] {
    match collection {
        Collection::Profile => Profile::FIELDS,
        Collection::About => About::FIELDS,
        Collection::Skills => Skill::FIELDS,
        Collection::Projects => Project::FIELDS,
        Collection::Achievements => Achievement::FIELDS,
        Collection::Education => Education::FIELDS,
        Collection::Certifications => Certification::FIELDS,
        Collection::Experience => Experience::FIELDS,
        Collection::Blogs => Blog::FIELDS,
        Collection::Testimonials => Testimonial::FIELDS,
        Collection::Resume => Resume::FIELDS,
        Collection::Contact => Contact::FIELDS,
        Collection::Social => SocialLink::FIELDS,
        Collection::Messages => Message::FIELDS,
    }
}
