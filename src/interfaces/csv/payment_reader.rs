use crate::domain::amount::Amount;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a batch payment file.
///
/// `gateway` may be left empty, in which case the caller's default gateway applies.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub gateway: Option<String>,
    pub amount: Amount,
}

/// Reads payment requests from a CSV source with a `gateway, amount` header.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests, one per row.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "gateway, amount\nstripe, 1000\nrazorpay, 2000.5";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.gateway.as_deref(), Some("stripe"));
        assert_eq!(first.amount, Amount::new(dec!(1000)).unwrap());
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.amount, Amount::new(dec!(2000.5)).unwrap());
    }

    #[test]
    fn test_reader_keeps_amount_text_exact() {
        let data = "gateway, amount\nstripe, 2000.50\nstripe, 1234567890.123456789\nstripe, 99999999999999999999";
        let reader = PaymentReader::new(data.as_bytes());
        let amounts: Vec<String> = reader
            .requests()
            .map(|result| result.unwrap().amount.to_string())
            .collect();

        assert_eq!(
            amounts,
            vec!["2000.50", "1234567890.123456789", "99999999999999999999"]
        );
    }

    #[test]
    fn test_reader_empty_gateway_is_none() {
        let data = "gateway, amount\n, 10";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.requests().collect();

        assert_eq!(results[0].as_ref().unwrap().gateway, None);
    }

    #[test]
    fn test_reader_rejects_negative_amount() {
        let data = "gateway, amount\nstripe, -10\nstripe, abc\nstripe, 5";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.requests().collect();

        assert!(results[0].is_err());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
