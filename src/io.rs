// io.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::RegionError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// A buffered input file that transparently decompresses gzip, detected
/// by the magic bytes rather than the extension.
pub struct InputStream {
    filepath: PathBuf,
}

impl InputStream {
    pub fn new(filepath: &Path) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }

    fn is_gzipped(file: &mut File) -> Result<bool, RegionError> {
        let mut header = [0u8; 2];
        let n = file.read(&mut header)?;
        file.rewind()?;
        Ok(n == 2 && header == GZIP_MAGIC)
    }

    pub fn reader(&self) -> Result<Box<dyn BufRead>, RegionError> {
        let mut file = File::open(&self.filepath)?;
        let reader: Box<dyn BufRead> = if Self::is_gzipped(&mut file)? {
            Box::new(BufReader::with_capacity(
                DEFAULT_BUFFER_SIZE,
                GzDecoder::new(file),
            ))
        } else {
            Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
        };
        Ok(reader)
    }
}

/// A buffered output target: a file (gzip-compressed when the path ends in
/// `.gz`) or stdout when no path is given.
pub struct OutputStream {
    filepath: Option<PathBuf>,
}

impl OutputStream {
    pub fn new(filepath: Option<impl AsRef<Path>>) -> Self {
        Self {
            filepath: filepath.map(|p| p.as_ref().to_path_buf()),
        }
    }

    fn should_compress(&self) -> bool {
        self.filepath
            .as_ref()
            .and_then(|p| p.extension())
            .is_some_and(|ext| ext == "gz")
    }

    pub fn writer(&self) -> Result<Box<dyn Write>, RegionError> {
        match &self.filepath {
            Some(path) => {
                let file = File::create(path)?;
                let writer: Box<dyn Write> = if self.should_compress() {
                    Box::new(BufWriter::with_capacity(
                        DEFAULT_BUFFER_SIZE,
                        GzEncoder::new(file, Compression::default()),
                    ))
                } else {
                    Box::new(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
                };
                Ok(writer)
            }
            None => Ok(Box::new(BufWriter::with_capacity(
                DEFAULT_BUFFER_SIZE,
                io::stdout(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_plain_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        std::fs::write(&path, "chr1\t0\t10\n").unwrap();

        let mut line = String::new();
        InputStream::new(&path)
            .reader()
            .unwrap()
            .read_line(&mut line)
            .unwrap();
        assert_eq!(line, "chr1\t0\t10\n");
    }

    #[test]
    fn test_gzip_detected_by_magic() {
        let dir = tempfile::tempdir().unwrap();
        // Extension is deliberately not .gz; detection is content-based.
        let path = dir.path().join("data.txt");
        let file = File::create(&path).unwrap();
        let mut enc = GzEncoder::new(file, Compression::default());
        enc.write_all(b"chr2\t5\t15\n").unwrap();
        enc.finish().unwrap();

        let mut line = String::new();
        InputStream::new(&path)
            .reader()
            .unwrap()
            .read_line(&mut line)
            .unwrap();
        assert_eq!(line, "chr2\t5\t15\n");
    }

    #[test]
    fn test_output_gz_extension_compresses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bed.gz");
        {
            let stream = OutputStream::new(Some(&path));
            let mut w = stream.writer().unwrap();
            writeln!(w, "chr1\t0\t100").unwrap();
        }
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &GZIP_MAGIC);
    }
}
