use thiserror::Error;

/// Errors raised while parsing or ordering versions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version string \"{raw}\"")]
    Parse { raw: String },

    #[error("Cannot compare version \"{left}\" with \"{right}\"")]
    Compare { left: String, right: String },
}

pub type Result<T> = std::result::Result<T, VersionError>;
