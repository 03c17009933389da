use crate::errors::Result;
use crate::prompt::Terminal;
use ignore::WalkBuilder;
use rand::Rng;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Offers random files under `root` for deletion until one is gone
pub struct FilePicker<'a, G: Rng> {
    root: &'a Path,
    rng: &'a mut G,
}

impl<'a, G: Rng> FilePicker<'a, G> {
    pub fn new(root: &'a Path, rng: &'a mut G) -> Self {
        Self { root, rng }
    }

    /// Returns the path that was deleted, or `None` if there was nothing to offer
    ///
    /// The tree is walked once; candidates are not refreshed between picks.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        terminal: &mut Terminal<I, O>,
    ) -> Result<Option<PathBuf>> {
        let candidates = list_files(self.root);
        log::debug!("{} candidates under {}", candidates.len(), self.root.display());

        if candidates.is_empty() {
            terminal.say("Nothing here to delete.")?;
            return Ok(None);
        }

        self.offer(&candidates, terminal).map(Some)
    }

    /// Keep offering random `candidates` until one is deleted
    ///
    /// `candidates` must not be empty.
    pub fn offer<I: BufRead, O: Write>(
        &mut self,
        candidates: &[PathBuf],
        terminal: &mut Terminal<I, O>,
    ) -> Result<PathBuf> {
        loop {
            let pick = &candidates[self.rng.gen_range(0..candidates.len())];
            let question = format!("Would you like to delete {} instead? (Y/n)", pick.display());

            if !terminal.confirm(&question, true)? {
                continue;
            }

            match fs::remove_file(self.root.join(pick)) {
                Ok(()) => {
                    log::info!("🗑️  Deleted {}", pick.display());
                    return Ok(pick.clone());
                }
                Err(e) => {
                    log::debug!("Cannot delete {}: {}", pick.display(), e);
                    terminal.say("Nevermind, that file seems useful.")?;
                }
            }
        }
    }
}

/// Every non-directory entry below `root`, relative to it
///
/// Hidden and ignored files count too. Unreadable subtrees are skipped.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root).standard_filters(false).build();

    let mut files = walker
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| !ft.is_dir()))
        .map(|entry| {
            let path = entry.path();
            path.strip_prefix(root).unwrap_or(path).to_path_buf()
        })
        .collect::<Vec<_>>();

    files.sort();
    files
}
