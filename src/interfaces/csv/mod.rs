pub mod batch;
pub mod payment_reader;
pub mod receipt_writer;
