// crates/meetup-cli/src/services/content.rs - Content Directory Service
//
// All file system interaction lives here: the precondition checks on the
// site's content directory and the single write of the rendered article.
// The service knows HOW to place the file; what goes in it is decided by
// the core crate.

use std::fs;
use std::path::PathBuf;

use meetup_core::{EventError, EventResult};
use tracing::info;

/// File operations against the site's content directory.
pub struct ContentDir {
    root: PathBuf,
}

impl ContentDir {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Compute the article path for a date key, checking every precondition.
    ///
    /// Checks, in order: the content root exists, it is a directory, and
    /// `<date>-meetup.md` is absent. This runs twice per generation: once
    /// as the resolver's preflight so a doomed run fails before the user
    /// answers any prompts, and again inside [`Self::write_article`] in
    /// case the file appeared while the prompts were open. The double
    /// check is a best-effort guard, not a lock.
    pub fn event_path(&self, date_key: &str) -> EventResult<PathBuf> {
        if !self.root.exists() {
            return Err(EventError::ContentDirectoryMissing(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(EventError::ContentPathNotDirectory(self.root.clone()));
        }

        let path = self.root.join(format!("{date_key}-meetup.md"));
        if path.exists() {
            return Err(EventError::EventFileAlreadyExists(path));
        }
        Ok(path)
    }

    /// Re-check preconditions and write the article, with a trailing newline.
    pub fn write_article(&self, date_key: &str, article: &str) -> EventResult<PathBuf> {
        let path = self.event_path(date_key)?;

        let mut contents = article.to_string();
        if !contents.ends_with('\n') {
            contents.push('\n');
        }
        fs::write(&path, contents)?;

        info!(path = %path.display(), "wrote event article");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn content_dir(tmp: &TempDir) -> ContentDir {
        ContentDir::new(tmp.path().join("content"))
    }

    #[test]
    fn test_missing_content_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = content_dir(&tmp);

        let err = dir.event_path("2025-06-10").unwrap_err();
        assert!(matches!(err, EventError::ContentDirectoryMissing(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_content_path_must_be_a_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("content"), "not a directory").unwrap();
        let dir = content_dir(&tmp);

        let err = dir.event_path("2025-06-10").unwrap_err();
        assert!(matches!(err, EventError::ContentPathNotDirectory(_)));
    }

    #[test]
    fn test_event_path_names_file_after_date() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("content")).unwrap();
        let dir = content_dir(&tmp);

        let path = dir.event_path("2025-06-10").unwrap();
        assert!(path.ends_with("content/2025-06-10-meetup.md"));
    }

    #[test]
    fn test_existing_article_is_never_overwritten() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("content")).unwrap();
        let dir = content_dir(&tmp);

        let first = dir.write_article("2025-06-10", "original article").unwrap();
        let err = dir.write_article("2025-06-10", "replacement").unwrap_err();
        assert!(matches!(err, EventError::EventFileAlreadyExists(_)));
        assert_eq!(fs::read_to_string(first).unwrap(), "original article\n");
    }

    #[test]
    fn test_write_appends_exactly_one_trailing_newline() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("content")).unwrap();
        let dir = content_dir(&tmp);

        let path = dir.write_article("2025-06-10", "body without newline").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "body without newline\n");

        let path = dir.write_article("2025-06-11", "body with newline\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "body with newline\n");
    }

    #[test]
    fn test_different_dates_do_not_conflict() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("content")).unwrap();
        let dir = content_dir(&tmp);

        dir.write_article("2025-06-10", "june").unwrap();
        dir.write_article("2025-07-08", "july").unwrap();
        assert!(tmp.path().join("content/2025-06-10-meetup.md").exists());
        assert!(tmp.path().join("content/2025-07-08-meetup.md").exists());
    }
}
