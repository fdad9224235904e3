use super::payment_reader::PaymentReader;
use super::receipt_writer::ReceiptWriter;
use crate::application::dispatcher::PaymentDispatcher;
use crate::application::registry::GatewayRegistry;
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::{Read, Write};

/// A row that produced no receipt.
#[derive(Debug)]
pub enum BatchFailure {
    /// The row could not be parsed (including invalid amounts); no gateway was called.
    Read(PaymentError),
    /// The gateway was unknown or the charge failed.
    Payment(PaymentError),
}

/// Charges every request from `reader` and writes one receipt per successful row.
///
/// Rows with an empty gateway cell use `default_gateway`. One dispatcher is built
/// per gateway id and reused for later rows. Row-level failures are handed to
/// `on_failure` and processing continues; only writer errors abort the batch.
///
/// Returns the number of receipts written.
pub async fn run_batch<R, W, F>(
    registry: &GatewayRegistry,
    reader: PaymentReader<R>,
    writer: &mut ReceiptWriter<W>,
    default_gateway: &str,
    mut on_failure: F,
) -> Result<usize>
where
    R: Read,
    W: Write,
    F: FnMut(BatchFailure),
{
    let mut dispatchers: HashMap<String, PaymentDispatcher> = HashMap::new();
    let mut written = 0;

    for request_result in reader.requests() {
        let request = match request_result {
            Ok(request) => request,
            Err(e) => {
                on_failure(BatchFailure::Read(e));
                continue;
            }
        };

        let id = request
            .gateway
            .unwrap_or_else(|| default_gateway.to_string())
            .trim()
            .to_lowercase();
        let dispatcher = match dispatchers.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => match registry.dispatcher_for(entry.key()) {
                Ok(dispatcher) => entry.insert(dispatcher),
                Err(e) => {
                    on_failure(BatchFailure::Payment(e));
                    continue;
                }
            },
        };

        match dispatcher.make_payment(request.amount).await {
            Ok(receipt) => {
                writer.write_receipt(&receipt)?;
                written += 1;
            }
            Err(e) => on_failure(BatchFailure::Payment(e)),
        }
    }

    writer.flush()?;
    Ok(written)
}
