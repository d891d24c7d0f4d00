use crate::csv_rows::read_rows;
use crate::{Error, Row};
use std::collections::HashMap;

/// Anything able to hand out the rows of a GTFS file
///
/// Opening archives, directories or urls is up to the implementor.
pub trait RowSource {
    /// The rows of the file (e.g. `"stops.txt"`), `None` if the file is not present
    fn rows(&self, file_name: &str) -> Result<Option<Vec<Row>>, Error>;
}

impl RowSource for HashMap<String, Vec<Row>> {
    fn rows(&self, file_name: &str) -> Result<Option<Vec<Row>>, Error> {
        Ok(self.get(file_name).cloned())
    }
}

/// In-memory csv content, by file name
///
/// ```
/// use gtfs_records::{CsvTables, RowSource};
/// let tables = CsvTables::default().with("levels.txt", "level_id,level_index\nL0,0\n");
/// let rows = tables.rows("levels.txt")?.unwrap();
/// assert_eq!(Some("L0"), rows[0].get("level_id"));
/// assert!(tables.rows("stops.txt")?.is_none());
/// # Ok::<(), gtfs_records::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct CsvTables {
    files: HashMap<String, Vec<u8>>,
}

impl CsvTables {
    /// Adds (or replaces) the content of a file
    pub fn insert<N: Into<String>, C: Into<Vec<u8>>>(&mut self, file_name: N, content: C) {
        self.files.insert(file_name.into(), content.into());
    }

    /// Adds (or replaces) the content of a file and returns the tables. Can be chained
    pub fn with<N: Into<String>, C: Into<Vec<u8>>>(mut self, file_name: N, content: C) -> Self {
        self.insert(file_name, content);
        self
    }

    /// Names of all the files, sorted
    pub fn files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.files.keys().map(|f| f.as_str()).collect();
        files.sort_unstable();
        files
    }
}

impl RowSource for CsvTables {
    fn rows(&self, file_name: &str) -> Result<Option<Vec<Row>>, Error> {
        self.files
            .get(file_name)
            .map(|content| read_rows(content.as_slice(), file_name))
            .transpose()
    }
}
