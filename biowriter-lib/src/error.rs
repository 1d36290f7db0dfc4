use thiserror::Error;

/// Errors raised by bio rendering
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BioError {
    #[error("Unknown platform '{0}'. Expected one of: twitter, instagram, youtube, linkedin, farcaster, bluesky")]
    UnknownPlatform(String),
}
