pub mod participant;

pub use participant::{Column, Field, PageData, Participant, COLUMNS, COLUMN_COUNT};
