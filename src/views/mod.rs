pub mod editor;
pub mod landing;
pub mod preview;
