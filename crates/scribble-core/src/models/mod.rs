//! Data models for Scribble

mod note;
mod settings;
mod user;

pub use note::{
    ListOfErrors, Note, NoteDraft, NoteDraftErrors, NoteId, NoteSummary, CONTENT_MAX_LENGTH,
    TITLE_MAX_LENGTH,
};
pub use settings::ThemeMode;
pub use user::{
    user_image_src, ImageRef, OwnerNotes, User, UserId, UserImage, DEFAULT_USER_IMAGE,
};
