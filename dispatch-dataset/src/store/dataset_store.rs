use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::dataset::{BookingRecord, DatasetRow, ParticipantRecord};
use crate::store::{fs, StoreError};

/// file-backed table store for the dataset pipeline: raw event logs are read
/// from one directory, processed outputs are written to another. callers pass
/// logical filenames and stay out of the path-handling business.
pub struct DatasetStore {
    raw_dir: PathBuf,
    processed_dir: PathBuf,
}

impl DatasetStore {
    pub fn new<P: AsRef<Path>>(raw_dir: P, processed_dir: P) -> DatasetStore {
        DatasetStore {
            raw_dir: raw_dir.as_ref().to_path_buf(),
            processed_dir: processed_dir.as_ref().to_path_buf(),
        }
    }

    /// reads the raw booking log into typed rows
    pub fn read_bookings(&self, filename: &str) -> Result<Vec<BookingRecord>, StoreError> {
        self.read_raw(filename, &BookingRecord::REQUIRED_COLUMNS)
    }

    /// reads the raw participant log into typed rows
    pub fn read_participants(&self, filename: &str) -> Result<Vec<ParticipantRecord>, StoreError> {
        self.read_raw(filename, &ParticipantRecord::REQUIRED_COLUMNS)
    }

    /// reads a raw CSV into typed rows, verifying the required header columns
    /// up front so an absent column surfaces as a schema error rather than a
    /// per-row deserialization failure.
    fn read_raw<T: DeserializeOwned>(
        &self,
        filename: &str,
        required_columns: &[&str],
    ) -> Result<Vec<T>, StoreError> {
        let path = self.raw_dir.join(filename);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&path)
            .map_err(|e| StoreError::CsvReadError {
                filename: filename.to_string(),
                source: e,
            })?;
        let headers = reader
            .headers()
            .map_err(|e| StoreError::CsvReadError {
                filename: filename.to_string(),
                source: e,
            })?
            .clone();
        for column in required_columns {
            if !headers.iter().any(|header| header == *column) {
                return Err(StoreError::MissingColumnError {
                    filename: filename.to_string(),
                    column: column.to_string(),
                });
            }
        }
        reader
            .into_deserialize::<T>()
            .map(|row| {
                row.map_err(|e| StoreError::CsvReadError {
                    filename: filename.to_string(),
                    source: e,
                })
            })
            .collect()
    }

    /// writes the processed dataset all-or-nothing: rows are serialized to a
    /// temp file beside the destination and renamed into place once complete,
    /// so a failed run never leaves a partial dataset. the label column is
    /// written under `target_column`.
    pub fn write_dataset(
        &self,
        filename: &str,
        rows: &[DatasetRow],
        target_column: &str,
    ) -> Result<(), StoreError> {
        fs::create_dirs(&self.processed_dir)?;
        let final_path = self.processed_dir.join(filename);
        let temp_path = self.processed_dir.join(format!("{}.tmp", filename));

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&temp_path)
            .map_err(|e| StoreError::CsvWriteError {
                filename: filename.to_string(),
                source: e,
            })?;
        writer
            .write_record(Self::dataset_header(target_column))
            .map_err(|e| StoreError::CsvWriteError {
                filename: filename.to_string(),
                source: e,
            })?;
        for row in rows {
            writer.serialize(row).map_err(|e| StoreError::CsvWriteError {
                filename: filename.to_string(),
                source: e,
            })?;
        }
        writer.flush().map_err(|e| StoreError::PersistError {
            filename: filename.to_string(),
            source: e,
        })?;
        drop(writer);

        std::fs::rename(&temp_path, &final_path).map_err(|e| StoreError::PersistError {
            filename: filename.to_string(),
            source: e,
        })
    }

    /// output header in [DatasetRow] field order; the label column carries
    /// its configured name
    fn dataset_header(target_column: &str) -> Vec<&str> {
        vec![
            "order_id",
            "trip_distance",
            "pickup_latitude",
            "pickup_longitude",
            "driver_latitude",
            "driver_longitude",
            "booking_status",
            "driver_id",
            "event_timestamp",
            "participant_status",
            target_column,
            "event_hour",
            "driver_distance",
            "historical_trip_count",
        ]
    }
}
