//! Content module - CMS content types, media resolution and normalization

mod form;
mod media;
mod normalize;
pub mod types;

pub use form::{ContactForm, FormError};
pub use media::{resolve_media, resolve_media_list, Media, MediaFormat, MediaFormats};
pub use normalize::{normalize_partner, normalize_project};
pub use types::{
    About, ContactInfo, ContactSubmission, Footer, Homepage, Partner, PartnerData, Project,
    ProjectData, SubmissionStatus,
};
