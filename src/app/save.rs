//! Persistence commands: save, save as, open, import and export.

use std::path::Path;

use super::*;

impl App {
    /// Saves under the current name. Fails on an untitled document.
    pub fn save(&mut self) -> Result<()> {
        if self.document.is_untitled() {
            return Err(Error::Untitled);
        }
        let name = self.document.filename.clone();
        self.write_document(name)
    }

    /// Saves under `name` and adopts it once the write succeeds.
    pub fn save_as(&mut self, name: &str) -> Result<()> {
        self.write_document(codec::normalize_name(name))
    }

    fn write_document(&mut self, name: String) -> Result<()> {
        let path = codec::document_path(&name);
        codec::save(&path, self.document.buffer.lines(), &self.document.meta)?;
        self.set_status(&format!("Saved {}", name));
        self.document.mark_saved(name);
        Ok(())
    }

    /// Loads `name` into the editor. A missing file starts a new document
    /// under that name.
    pub fn open(&mut self, name: &str) -> Result<()> {
        let name = codec::normalize_name(name);
        let loaded = codec::load(&codec::document_path(&name), self.config.clock24h)?;
        if loaded.existed {
            self.set_status(&format!("Opened {}", name));
        } else {
            self.set_status(&format!("New document {}", name));
        }
        self.document.replace(loaded.lines, loaded.meta, name);
        self.scroll_offset = 0;
        Ok(())
    }

    /// Replaces the content with a plain text file. Metadata resets and the
    /// document becomes untitled; it is dirty unless the file was missing.
    pub fn import(&mut self, path: &str) -> Result<()> {
        let loaded = codec::import(Path::new(path), self.config.clock24h)?;
        self.document.replace(loaded.lines, loaded.meta, String::new());
        self.scroll_offset = 0;
        if loaded.existed {
            self.document.dirty = true;
            self.set_status(&format!("Imported {}", path));
        } else {
            self.set_status(&format!("{} not found, started a new document", path));
        }
        Ok(())
    }

    /// Writes the content without metadata to `<name>_clean.txt`.
    pub fn export(&mut self, name: &str) -> Result<()> {
        let path = codec::export_path(name);
        codec::export(&path, self.document.buffer.lines())?;
        self.set_status(&format!("Exported to {}", path.display()));
        Ok(())
    }
}
