use crate::libs::data_storage::DataStorage;
use crate::libs::error::StoreError;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "eodlog.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db, StoreError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;

        // Required for tasks.report_id ON DELETE CASCADE to take effect.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(Db { conn })
    }
}
