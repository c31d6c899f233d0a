//! Error types for the parking bringup composer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubstitutionError {
    #[error("Undefined launch configuration: '{0}'. Did you forget to declare it or pass it as name:=value?")]
    UndefinedVariable(String),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),

    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),

    #[error("Executable '{executable}' not found in package '{package}'")]
    ExecutableNotFound {
        package: String,
        executable: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
