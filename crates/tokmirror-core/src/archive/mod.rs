mod pattern;

pub use pattern::MemberPattern;

use crate::{Error, Result};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// An uploaded data-export archive held fully in memory.
///
/// Member names are captured once at open time, in the archive's internal
/// listing order. Callers must not depend on which of several matching
/// members is chosen, only that at most one is.
pub struct ExportArchive {
    zip: ZipArchive<Cursor<Vec<u8>>>,
    names: Vec<String>,
}

impl ExportArchive {
    /// Open an in-memory zip container
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        tracing::debug!("Opening export archive ({} bytes)", bytes.len());

        let mut zip = ZipArchive::new(Cursor::new(bytes))?;
        let mut names = Vec::with_capacity(zip.len());
        for index in 0..zip.len() {
            names.push(zip.by_index_raw(index)?.name().to_string());
        }

        tracing::info!("Opened export archive with {} members", names.len());

        Ok(Self { zip, names })
    }

    /// Member names in the archive's internal listing order
    pub fn member_names(&self) -> &[String] {
        &self.names
    }

    /// Find the first member whose name matches the pattern
    pub fn find_member(&self, pattern: &MemberPattern) -> Option<&str> {
        self.names
            .iter()
            .find(|name| pattern.matches(name))
            .map(String::as_str)
    }

    /// Read a member and decode it as UTF-8 text
    pub fn read_text(&mut self, name: &str) -> Result<String> {
        tracing::debug!("Reading archive member: {}", name);

        let mut member = self.zip.by_name(name)?;
        let mut bytes = Vec::new();
        member.read_to_end(&mut bytes)?;

        String::from_utf8(bytes).map_err(|_| Error::Decode(name.to_string()))
    }
}
