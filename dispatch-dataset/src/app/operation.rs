//! dataset construction operations wiring the cleaning, joining, labeling,
//! and feature steps into a single batch run over the raw event logs.
use clap::Subcommand;
use serde::{Deserialize, Serialize};

use super::PipelineConfig;
use crate::dataset::clean_ops::{clean_bookings, clean_participants};
use crate::dataset::label_ops::create_target;
use crate::dataset::merge_ops::merge_dataset;
use crate::feature::{
    driver_distance_to_pickup, driver_historical_completed_bookings, hour_of_day,
};
use crate::store::DatasetStore;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum DatasetOperation {
    /// clean the raw logs, join them, label them, and write the
    /// feature-augmented training dataset
    BuildDataset {
        /// raw booking log filename within the raw data directory
        #[arg(long, default_value_t=String::from("booking_log.csv"))]
        booking_file: String,
        /// raw participant log filename within the raw data directory
        #[arg(long, default_value_t=String::from("participant_log.csv"))]
        participant_file: String,
        /// output filename within the processed data directory
        #[arg(long, default_value_t=String::from("dataset.csv"))]
        output_file: String,
    },
}

impl DatasetOperation {
    pub fn run(&self, config: &PipelineConfig) {
        match self {
            DatasetOperation::BuildDataset {
                booking_file,
                participant_file,
                output_file,
            } => {
                let store = DatasetStore::new(&config.raw_data_dir, &config.processed_data_dir);
                let bookings = store
                    .read_bookings(booking_file)
                    .expect("failed reading booking log");
                let participants = store
                    .read_participants(participant_file)
                    .expect("failed reading participant log");
                log::info!(
                    "read {} booking rows, {} participant rows",
                    bookings.len(),
                    participants.len()
                );

                let bookings = clean_bookings(bookings);
                let participants = clean_participants(participants);
                let dataset = create_target(merge_dataset(bookings, participants));

                // distance and hour are order-independent; the historical
                // completion count needs the label in place and runs last
                let dataset = driver_distance_to_pickup(dataset);
                let dataset = hour_of_day(dataset);
                let dataset = driver_historical_completed_bookings(dataset)
                    .expect("failed computing historical completions");

                store
                    .write_dataset(output_file, &dataset, &config.target)
                    .expect("failed writing dataset");
                log::info!("wrote {} dataset rows to {}", dataset.len(), output_file);
            }
        }
    }
}
