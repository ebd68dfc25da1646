use crate::error::{AnalyzeError, DecodeError, StorageFault};
use math::positions::PackedKey;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const COUNT_BLOCKS: &str = "SELECT COUNT(*) FROM blocks";
const SELECT_POSITIONS: &str = "SELECT pos FROM blocks";

///a read-only connection to a `map.sqlite` file, closed when dropped
pub struct MapStorage {
    path: PathBuf,
    size_bytes: u64,
    connection: Connection,
}

impl MapStorage {
    ///open the file read-only, a missing file is an error and is never created
    pub fn open(path: &Path) -> Result<Self, AnalyzeError> {
        let metadata = fs::metadata(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AnalyzeError::unavailable(path, StorageFault::Missing),
            _ => AnalyzeError::unavailable(path, err),
        })?;
        if !metadata.is_file() {
            return Err(AnalyzeError::unavailable(path, StorageFault::NotAFile));
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let connection = Connection::open_with_flags(path, flags).map_err(|err| AnalyzeError::unavailable(path, err))?;
        log::debug!("opened {} ({} bytes)", path.display(), metadata.len());

        Ok(Self {
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
            connection,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    ///size of the file when it was opened
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    ///call `visit` with the index and key of every stored block, and return the row count of the table.
    ///the count and the keys are read in the same transaction, so they agree with each other
    pub fn for_each_key<F>(&mut self, mut visit: F) -> Result<u64, AnalyzeError>
    where
        F: FnMut(u64, PackedKey) -> Result<(), AnalyzeError>,
    {
        let path = self.path.clone();
        let unavailable = |err: rusqlite::Error| AnalyzeError::unavailable(&path, err);

        let transaction = self.connection.transaction().map_err(unavailable)?;
        let total: i64 = transaction
            .query_row(COUNT_BLOCKS, [], |row| row.get(0))
            .map_err(unavailable)?;

        let mut visited = 0u64;
        {
            let mut statement = transaction.prepare(SELECT_POSITIONS).map_err(unavailable)?;
            let mut rows = statement.query([]).map_err(unavailable)?;
            while let Some(row) = rows.next().map_err(unavailable)? {
                let key = match row.get_ref(0).map_err(unavailable)? {
                    ValueRef::Integer(key) => key,
                    other => {
                        return Err(DecodeError::NotAnInteger {
                            record: visited,
                            found: other.data_type().to_string(),
                        }
                        .into())
                    }
                };
                visit(visited, key)?;
                visited += 1;
            }
        }
        transaction.commit().map_err(unavailable)?;

        let total = total as u64;
        if visited != total {
            log::warn!("blocks table reported {total} rows but {visited} were read");
        }
        Ok(total)
    }
}
