use flashstack_core::{CoreError, Deck};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub mod codec;
pub mod paths;

pub use codec::{parse_stack, render_stack};

/// A stack file on disk together with the backup location used while saving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackFile {
    path: PathBuf,
    backup: PathBuf,
}

impl StackFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let backup = paths::default_backup_path(&path);
        Self { path, backup }
    }

    pub fn with_backup(path: impl Into<PathBuf>, backup: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: backup.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup
    }

    /// `Ok(None)` when the path does not name an existing file.
    pub fn try_load(&self) -> Result<Option<Deck>, CoreError> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        let deck = parse_stack(&text);
        log::info!("loaded {} card(s) from {}", deck.count(), self.path.display());
        Ok(Some(deck))
    }

    /// Like [`try_load`](Self::try_load), but a missing file yields an empty deck.
    pub fn load(&self) -> Result<Deck, CoreError> {
        match self.try_load()? {
            Some(deck) => Ok(deck),
            None => {
                log::info!("{} not found, starting empty", self.path.display());
                Ok(Deck::new())
            }
        }
    }

    /// Overwrites the file with `deck`, one line per card.
    pub fn save(&self, deck: &Deck) -> Result<(), CoreError> {
        let text = render_stack(deck);
        write_with_backup(&self.path, &self.backup, |w| w.write_all(text.as_bytes()))?;
        log::info!("saved {} card(s) to {}", deck.count(), self.path.display());
        Ok(())
    }
}

/// Copies the current file aside, writes the new contents through a temporary
/// file that is renamed over `path`, then drops the copy.
///
/// If `write` or the rename fails, `path` still holds its previous contents.
/// The backup is only removed after a successful write. A symlinked `path` is
/// written through to its target, and the target keeps its permissions.
fn write_with_backup<F>(path: &Path, backup: &Path, write: F) -> Result<(), io::Error>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let had_original = path.is_file();
    let target = if had_original {
        fs::canonicalize(path)?
    } else {
        path.to_path_buf()
    };
    if same_file(&target, backup)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("backup {} is the file being saved", backup.display()),
        ));
    }

    let permissions = if had_original {
        fs::copy(&target, backup)?;
        log::debug!("backed up {} to {}", target.display(), backup.display());
        Some(fs::metadata(&target)?.permissions())
    } else {
        None
    };

    let mut tmp = NamedTempFile::new_in(paths::parent_dir(&target))?;
    let file: &mut dyn Write = tmp.as_file_mut();
    write(file)?;
    tmp.flush()?;
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| e.error)?;

    if had_original {
        fs::remove_file(backup)?;
    }
    Ok(())
}

fn same_file(target: &Path, backup: &Path) -> Result<bool, io::Error> {
    if target == backup {
        return Ok(true);
    }
    if !backup.exists() || !target.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(target)? == fs::canonicalize(backup)?)
}
