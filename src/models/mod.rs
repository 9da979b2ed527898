pub mod landing;

pub use landing::{CleanedLanding, MassCategory, RawLanding};
