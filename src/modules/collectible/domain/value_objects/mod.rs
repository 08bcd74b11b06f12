pub mod custom_attributes;
pub mod image_data;
pub mod related_subject;

pub use custom_attributes::{CollectibleCustomAttributes, Sale};
pub use image_data::{CollectibleImages, ImageData};
pub use related_subject::{RelatedSubject, SubjectKind};
