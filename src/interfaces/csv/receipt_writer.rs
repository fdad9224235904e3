use crate::domain::receipt::Receipt;
use crate::error::Result;
use std::io::Write;

/// Writes receipts as CSV (`gateway,amount`), header first.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        self.writer.serialize(receipt)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
