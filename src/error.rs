use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("SKILL.md not found in {}", .dir.display())]
    MissingSkillMd { dir: PathBuf },

    #[error("Failed to write archive {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SkillError {
    pub(crate) fn archive(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| SkillError::Archive { path, source }
    }
}

pub type Result<T> = std::result::Result<T, SkillError>;
