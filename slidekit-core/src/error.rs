use slidekit_model::DotId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("gallery host has no slides")]
    NoSlides,
    #[error("gallery is already initialized")]
    AlreadyInitialized,
    #[error("gallery has been torn down")]
    TornDown,
    #[error("host built {built} dot indicators for {slides} slides")]
    DotCountMismatch { built: usize, slides: usize },
    #[error("host returned {0} for more than one slide")]
    DuplicateDot(DotId),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
