use std::io::Write;
use std::path::Path;

/// The fundamental rewrite primitive: replace a byte span of an in-memory buffer.
///
/// Every pass compiles down to a sequence of splices computed from a scan cursor.
/// A splice is applied immediately and the caller re-scans from the returned
/// offset, so no offset is ever reused across a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "Splice does nothing until apply() is called"]
pub struct Splice {
    /// Starting byte offset (inclusive)
    pub byte_start: usize,
    /// Ending byte offset (exclusive)
    pub byte_end: usize,
    /// New text to insert at [byte_start, byte_end)
    pub new_text: String,
}

impl Splice {
    pub fn new(byte_start: usize, byte_end: usize, new_text: impl Into<String>) -> Self {
        Self {
            byte_start,
            byte_end,
            new_text: new_text.into(),
        }
    }

    /// Pure insertion at `offset`.
    pub fn insert(offset: usize, new_text: impl Into<String>) -> Self {
        Self::new(offset, offset, new_text)
    }

    /// Pure deletion of [byte_start, byte_end).
    pub fn delete(byte_start: usize, byte_end: usize) -> Self {
        Self::new(byte_start, byte_end, String::new())
    }

    /// Check the span against `text`: ordered, in bounds, on char boundaries.
    pub fn fits(&self, text: &str) -> bool {
        self.byte_start <= self.byte_end
            && self.byte_end <= text.len()
            && text.is_char_boundary(self.byte_start)
            && text.is_char_boundary(self.byte_end)
    }

    /// Apply this splice in place and return the offset just past the inserted text.
    ///
    /// Spans come from scans over the same buffer and always sit on ASCII
    /// delimiters; a span that does not fit leaves the buffer unchanged.
    pub fn apply(self, text: &mut String) -> usize {
        if !self.fits(text) {
            debug_assert!(false, "splice {:?} does not fit buffer", self);
            return self.byte_start.min(text.len());
        }
        let resume = self.byte_start + self.new_text.len();
        text.replace_range(self.byte_start..self.byte_end, &self.new_text);
        resume
    }
}

/// Atomic file write: tempfile + fsync + rename.
///
/// Either the full write succeeds or the original file is left untouched.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    // Create tempfile in same directory to ensure same filesystem
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_splice_replace_returns_resume_offset() {
        let mut text = String::from("fl_color(c);");
        let resume = Splice::new(0, 8, "setcolor").apply(&mut text);
        assert_eq!(text, "setcolor(c);");
        assert_eq!(resume, 8);
    }

    #[test]
    fn test_splice_insert_and_delete() {
        let mut text = String::from("ab");
        let resume = Splice::insert(1, "XYZ").apply(&mut text);
        assert_eq!(text, "aXYZb");
        assert_eq!(resume, 4);

        let resume = Splice::delete(1, 4).apply(&mut text);
        assert_eq!(text, "ab");
        assert_eq!(resume, 1);
    }

    #[test]
    fn test_splice_fits_rejects_bad_ranges() {
        let text = "héllo";
        assert!(Splice::new(0, 1, "").fits(text));
        assert!(!Splice::new(2, 1, "").fits(text));
        assert!(!Splice::new(0, 40, "").fits(text));
        // byte 2 is inside the two-byte 'é'
        assert!(!Splice::new(0, 2, "").fits(text));
    }

    #[test]
    fn test_atomic_write_integration() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("test.cxx");
        fs::write(&file_path, b"original content").unwrap();

        atomic_write(&file_path, b"modified content").unwrap();

        let new_content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(new_content, "modified content");
    }
}
