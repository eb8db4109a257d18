use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpStream;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const STORE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score store i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("score store returned a malformed value: {0:?}")]
    Malformed(String),
}

/// Remote accessor over a single integer: read the highest score,
/// overwrite the highest score. Whether the store keeps only the
/// higher of old and new values is its own policy, never the
/// client's.
pub trait ScoreStore {
    fn read_highest_score(&mut self) -> Result<u64, StoreError>;
    fn write_highest_score(&mut self, score: u64) -> Result<(), StoreError>;
}

/// Line protocol over TCP, one connection per operation: `GET\n` is
/// answered with a decimal value line, `SET <n>\n` expects no reply.
pub struct TcpScoreStore {
    addr: String,
}

impl TcpScoreStore {
    pub fn new(addr: impl Into<String>) -> Self {
        TcpScoreStore { addr: addr.into() }
    }

    fn connect(&self) -> Result<TcpStream, StoreError> {
        let stream = TcpStream::connect(&self.addr)?;
        stream.set_read_timeout(Some(STORE_TIMEOUT))?;
        stream.set_write_timeout(Some(STORE_TIMEOUT))?;
        Ok(stream)
    }
}

impl ScoreStore for TcpScoreStore {
    fn read_highest_score(&mut self) -> Result<u64, StoreError> {
        let mut stream = self.connect()?;
        stream.write_all(b"GET\n")?;

        let mut line = String::new();
        BufReader::new(stream).read_line(&mut line)?;
        let value = line.trim();
        value.parse().map_err(|_| StoreError::Malformed(value.to_string()))
    }

    fn write_highest_score(&mut self, score: u64) -> Result<(), StoreError> {
        let mut stream = self.connect()?;
        stream.write_all(format!("SET {}\n", score).as_bytes())?;
        Ok(())
    }
}

/// Plain-text file fallback for playing without a score server. A
/// missing file reads as zero.
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }
}

impl ScoreStore for FileScoreStore {
    fn read_highest_score(&mut self) -> Result<u64, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(err.into()),
        };

        let value = contents.trim();
        value.parse().map_err(|_| StoreError::Malformed(value.to_string()))
    }

    fn write_highest_score(&mut self, score: u64) -> Result<(), StoreError> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// In-memory store. Overwrites unconditionally, like the remote one.
#[derive(Default)]
pub struct MemoryScoreStore {
    value: u64,
}

impl MemoryScoreStore {
    pub fn new(value: u64) -> Self {
        MemoryScoreStore { value }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read_highest_score(&mut self) -> Result<u64, StoreError> {
        Ok(self.value)
    }

    fn write_highest_score(&mut self, score: u64) -> Result<(), StoreError> {
        self.value = score;
        Ok(())
    }
}
