//! File I/O for coordinate-list matrix files
//!
//! Whole-file reads and writes only. Loading reads the file into memory (or
//! memory-maps it with the `mmap` feature) and hands the text to the core
//! parser. Saving writes a sibling temporary file and renames it over the
//! destination, so a partially written output never appears at `path`.

use std::fs;
use std::path::{Path, PathBuf};

use spmat_core::{parse_matrix, HeaderPolicy, MatrixElement, SparseMatrix};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// Entry points for reading and writing matrix files
pub struct MatrixFile;

impl MatrixFile {
    /// Load and parse a matrix file
    pub fn load<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        config: &EngineConfig,
    ) -> Result<SparseMatrix<T>> {
        let path = path.as_ref();

        if config.use_mmap {
            #[cfg(feature = "mmap")]
            return Self::load_mapped(path, config.header_policy);
            #[cfg(not(feature = "mmap"))]
            warn!("built without the mmap feature, reading into memory instead");
        }

        let bytes = fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| Error::Encoding {
            path: path.to_path_buf(),
        })?;

        Self::parse(path, &text, config.header_policy)
    }

    #[cfg(feature = "mmap")]
    fn load_mapped<T: MatrixElement>(path: &Path, policy: HeaderPolicy) -> Result<SparseMatrix<T>> {
        let read_error = |source| Error::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = fs::File::open(path).map_err(read_error)?;
        let len = file.metadata().map_err(read_error)?.len();
        if len == 0 {
            return Self::parse(path, "", policy);
        }

        // SAFETY: read-only mapping, dropped before this function returns
        let mmap = unsafe { memmap2::MmapOptions::new().map(&file) }.map_err(read_error)?;
        debug!(path = %path.display(), bytes = mmap.len(), "mapped input file");

        let text = std::str::from_utf8(&mmap).map_err(|_| Error::Encoding {
            path: path.to_path_buf(),
        })?;
        Self::parse(path, text, policy)
    }

    fn parse<T: MatrixElement>(
        path: &Path,
        text: &str,
        policy: HeaderPolicy,
    ) -> Result<SparseMatrix<T>> {
        let matrix = parse_matrix::<T>(text, policy).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "failed to parse matrix");
        })?;

        info!(
            path = %path.display(),
            shape = %matrix.shape(),
            nnz = matrix.nnz(),
            dtype = %T::data_type(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Serialize `matrix` and write it to `path`, replacing any existing file
    pub fn save<T: MatrixElement, P: AsRef<Path>>(path: P, matrix: &SparseMatrix<T>) -> Result<()> {
        let path = path.as_ref();
        let temp_path = temp_path_for(path);
        let write_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Err(source) = fs::write(&temp_path, matrix.to_text()) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_error(source));
        }
        if let Err(source) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_error(source));
        }

        info!(
            path = %path.display(),
            shape = %matrix.shape(),
            nnz = matrix.nnz(),
            "saved matrix"
        );
        Ok(())
    }
}

/// Hidden sibling of `path` used as the staging file for [`MatrixFile::save`]
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "matrix".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::Shape;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_load_buffered() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "a.txt", "rows=2\ncols=2\n(0,0,1)\n(1,1,2)\n");

        let m = MatrixFile::load::<f64, _>(&path, &EngineConfig::default()).unwrap();
        assert_eq!(m.shape(), Shape::new(2, 2));
        assert_eq!(m.get(1, 1), 2.0);
    }

    #[cfg(feature = "mmap")]
    #[test]
    fn test_load_mapped_matches_buffered() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "a.txt", "rows=3\ncols=3\n(2, 0, 1.5)\n(0, 2, -3)");

        let buffered = MatrixFile::load::<f64, _>(&path, &EngineConfig::default()).unwrap();
        let mapped =
            MatrixFile::load::<f64, _>(&path, &EngineConfig::default().with_mmap(true)).unwrap();
        assert_eq!(buffered, mapped);

        let empty = write_input(&dir, "empty.txt", "");
        let m = MatrixFile::load::<f64, _>(&empty, &EngineConfig::default().with_mmap(true))
            .unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = MatrixFile::load::<f64, _>(dir.path().join("nope.txt"), &EngineConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.txt");
        fs::write(&path, [b'r', 0xff, 0xfe, b'\n']).unwrap();

        let err = MatrixFile::load::<f64, _>(&path, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Encoding { .. }));
    }

    #[test]
    fn test_save_writes_canonical_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let m = SparseMatrix::from_triplets(11, 2, [(10, 0, 1.0), (2, 1, 2.5)]).unwrap();

        MatrixFile::save(&path, &m).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "rows=11\ncols=2\n(10, 0, 1)\n(2, 1, 2.5)");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "out.txt", "old contents that are longer than the new");
        let m: SparseMatrix<i64> = SparseMatrix::new(0, 0);

        MatrixFile::save(&path, &m).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "rows=0\ncols=0");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        let m: SparseMatrix = SparseMatrix::identity(2);

        let err = MatrixFile::save(&path, &m).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let temp = temp_path_for(Path::new("/data/result.txt"));
        assert_eq!(temp, PathBuf::from("/data/.result.txt.tmp"));
    }
}
