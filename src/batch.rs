//! Batch driver shared by the three probes.
//!
//! Items are probed one at a time in input order. A probe never fails at the
//! batch level: whatever happens to one item ends up in its own result.

use std::future::Future;
use std::time::Instant;

use crate::initialization::ProbeLogger;

/// A per-item query against an external service.
pub trait Prober {
    /// Result for one identifier, success or failure.
    type Output;

    /// Probes one identifier. Implementations must fold every failure into
    /// `Self::Output`.
    fn probe(&self, identifier: &str) -> impl Future<Output = Self::Output>;

    /// Whether `output` describes a failed probe (used for the run summary).
    fn is_failure(&self, _output: &Self::Output) -> bool {
        false
    }
}

/// Probes every identifier sequentially.
///
/// # Returns
///
/// One output per identifier, in input order.
pub async fn run_batch<P: Prober>(
    prober: &P,
    identifiers: &[String],
    logger: &ProbeLogger,
) -> Vec<P::Output> {
    let start_time = Instant::now();
    let total = identifiers.len();
    let mut results = Vec::with_capacity(total);
    let mut failed = 0usize;

    for (index, identifier) in identifiers.iter().enumerate() {
        logger.debug(format_args!("Probing {}/{}: {}", index + 1, total, identifier));
        let output = prober.probe(identifier).await;
        if prober.is_failure(&output) {
            failed += 1;
        }
        results.push(output);
    }

    let elapsed_secs = start_time.elapsed().as_secs_f64();
    logger.info(format_args!(
        "Processed {} item{} ({} failed) in {:.2} seconds",
        total,
        if total == 1 { "" } else { "s" },
        failed,
        elapsed_secs
    ));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Echoes the identifier back and remembers the call order.
    #[derive(Default)]
    struct Echo {
        calls: RefCell<Vec<String>>,
    }

    impl Prober for Echo {
        type Output = Result<String, String>;

        async fn probe(&self, identifier: &str) -> Self::Output {
            self.calls.borrow_mut().push(identifier.to_string());
            if identifier.starts_with("bad") {
                Err(format!("cannot probe {identifier}"))
            } else {
                Ok(identifier.to_uppercase())
            }
        }

        fn is_failure(&self, output: &Self::Output) -> bool {
            output.is_err()
        }
    }

    #[tokio::test]
    async fn test_run_batch_preserves_order_and_count() {
        let prober = Echo::default();
        let ids: Vec<String> = ["b.com", "bad.example", "a.com", "b.com"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let results = run_batch(&prober, &ids, &ProbeLogger::silent()).await;

        assert_eq!(results.len(), ids.len());
        assert_eq!(results[0], Ok("B.COM".to_string()));
        assert!(results[1].is_err());
        assert_eq!(results[2], Ok("A.COM".to_string()));
        assert_eq!(results[3], Ok("B.COM".to_string()));
        assert_eq!(*prober.calls.borrow(), ids);
    }

    #[tokio::test]
    async fn test_run_batch_empty_input() {
        let results = run_batch(&Echo::default(), &[], &ProbeLogger::silent()).await;
        assert!(results.is_empty());
    }
}
