use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use token_holders::{
    BlockRange, CompositeReportHandler, HolderDataSource, HolderRecord, HoldersError,
    HoldersReport, JsonReportHandler, NormalizedHolder, ReportHandler, TokenHoldersFetcher,
};

const TOKEN: &str = "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984";

/// In-memory source that records how it was called
struct MockSource {
    response: Result<Vec<HolderRecord>, String>,
    calls: AtomicUsize,
    last_range: Mutex<Option<BlockRange>>,
    last_address: Mutex<Option<String>>,
}

impl MockSource {
    fn with_records(records: Vec<HolderRecord>) -> Self {
        Self {
            response: Ok(records),
            calls: AtomicUsize::new(0),
            last_range: Mutex::new(None),
            last_address: Mutex::new(None),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_range: Mutex::new(None),
            last_address: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolderDataSource for MockSource {
    async fn fetch_holder_list(
        &self,
        token_address: &str,
        range: BlockRange,
    ) -> Result<Vec<HolderRecord>, HoldersError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_address.lock().unwrap() = Some(token_address.to_string());
        *self.last_range.lock().unwrap() = Some(range);
        match &self.response {
            Ok(records) => Ok(records.clone()),
            Err(message) => Err(HoldersError::Source(message.clone())),
        }
    }
}

/// Handler that keeps every report it sees
#[derive(Default)]
struct RecordingHandler {
    reports: Mutex<Vec<HoldersReport>>,
    errors: Mutex<Vec<String>>,
}

#[async_trait]
impl ReportHandler for RecordingHandler {
    async fn handle_report(&self, report: &HoldersReport) -> anyhow::Result<()> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}

fn sample_records() -> Vec<HolderRecord> {
    vec![
        HolderRecord::new("0x00000000000000000000000000000000000000a1", "50000000000000000000"),
        HolderRecord::new("0x00000000000000000000000000000000000000a2", "150000000000000000000"),
        HolderRecord::new("0x00000000000000000000000000000000000000a3", "99900000000000000000"),
        HolderRecord::new("0x00000000000000000000000000000000000000a4", "1500000000000000000"),
        HolderRecord::new("0x00000000000000000000000000000000000000a5", "100000000000000000000"),
        HolderRecord::new("0x00000000000000000000000000000000000000a6", "7"),
    ]
}

#[tokio::test]
async fn invalid_address_never_reaches_source() {
    let source = Arc::new(MockSource::with_records(sample_records()));
    let fetcher = TokenHoldersFetcher::new(source.clone(), 18);

    let result = fetcher
        .get_token_holders("not-an-address", BlockRange::default())
        .await;

    assert!(matches!(result, Err(HoldersError::InvalidAddress(_))));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn report_fetch_sends_canonical_address_once() {
    let source = Arc::new(MockSource::with_records(sample_records()));
    let fetcher = TokenHoldersFetcher::new(source.clone(), 18);

    let report = fetcher
        .fetch_report(&TOKEN[2..], BlockRange::default(), 5, 100.0)
        .await
        .unwrap();

    assert_eq!(report.token_address, TOKEN);
    assert_eq!(source.calls(), 1);
    assert_eq!(source.last_address.lock().unwrap().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn multibyte_address_is_rejected_without_fetch() {
    let source = Arc::new(MockSource::with_records(sample_records()));
    let fetcher = TokenHoldersFetcher::new(source.clone(), 18);

    let result = fetcher
        .fetch_report("aaaaa\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}", BlockRange::default(), 5, 100.0)
        .await;

    assert!(matches!(result, Err(HoldersError::InvalidAddress(_))));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn source_error_propagates_unchanged() {
    let source = Arc::new(MockSource::failing("NOTOK"));
    let fetcher = TokenHoldersFetcher::new(source.clone(), 18);

    let err = fetcher
        .get_token_holders(TOKEN, BlockRange::default())
        .await
        .unwrap_err();

    assert_eq!(err.source_message(), Some("NOTOK"));
    assert_eq!(err.to_string(), "API Error: NOTOK");
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn normalizes_in_source_order() {
    let source = Arc::new(MockSource::with_records(sample_records()));
    let fetcher = TokenHoldersFetcher::new(source.clone(), 18);

    let holders = fetcher
        .get_token_holders(TOKEN, BlockRange::new(5, 10))
        .await
        .unwrap();

    let balances: Vec<&str> = holders.iter().map(|h| h.balance.as_str()).collect();
    assert_eq!(balances, vec!["50.0", "150.0", "99.9", "1.5", "100.0", "0.000000000000000007"]);
    assert_eq!(*source.last_range.lock().unwrap(), Some(BlockRange::new(5, 10)));
}

#[tokio::test]
async fn malformed_quantity_fails_whole_call() {
    let mut records = sample_records();
    records.push(HolderRecord::new("0x00000000000000000000000000000000000000b1", "12e5"));
    let fetcher = TokenHoldersFetcher::new(Arc::new(MockSource::with_records(records)), 18);

    let result = fetcher.get_token_holders(TOKEN, BlockRange::default()).await;

    assert!(matches!(
        result,
        Err(HoldersError::MalformedQuantity { ref quantity, .. }) if quantity == "12e5"
    ));
}

#[tokio::test]
async fn report_counts_major_holders() {
    let fetcher = TokenHoldersFetcher::new(Arc::new(MockSource::with_records(sample_records())), 18);

    let report = fetcher
        .fetch_report(TOKEN, BlockRange::default(), 5, 100.0)
        .await
        .unwrap();

    assert_eq!(report.token_address, TOKEN);
    assert_eq!(report.total_holders, 6);
    assert_eq!(report.top_holders.len(), 5);
    assert_eq!(report.top_holders[0], NormalizedHolder::new(
        "0x00000000000000000000000000000000000000a1",
        "50.0",
    ));
    assert_eq!(report.holders_above_min, 2);
}

#[tokio::test]
async fn empty_holder_list_yields_empty_report() {
    let fetcher = TokenHoldersFetcher::new(Arc::new(MockSource::with_records(vec![])), 18);

    let report = fetcher
        .fetch_report(TOKEN, BlockRange::default(), 5, 100.0)
        .await
        .unwrap();

    assert!(report.is_empty());
    assert!(report.top_holders.is_empty());
    assert_eq!(report.holders_above_min, 0);
}

#[tokio::test]
async fn composite_forwards_to_every_handler() {
    let fetcher = TokenHoldersFetcher::new(Arc::new(MockSource::with_records(sample_records())), 18);
    let report = fetcher
        .fetch_report(TOKEN, BlockRange::default(), 2, 0.0)
        .await
        .unwrap();

    let first = Arc::new(RecordingHandler::default());
    let second = Arc::new(RecordingHandler::default());
    let mut composite = CompositeReportHandler::new();
    composite.add_handler(first.clone());
    composite.add_handler(second.clone());

    composite.handle_report(&report).await.unwrap();
    composite.handle_error(&anyhow::anyhow!("boom")).await;

    for handler in [&first, &second] {
        assert_eq!(handler.reports.lock().unwrap().len(), 1);
        assert_eq!(handler.reports.lock().unwrap()[0].holders_above_min, 6);
        assert_eq!(*handler.errors.lock().unwrap(), vec!["boom".to_string()]);
    }
}

#[tokio::test]
async fn json_handler_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holders.json");
    let fetcher = TokenHoldersFetcher::new(Arc::new(MockSource::with_records(sample_records())), 18);
    let report = fetcher
        .fetch_report(TOKEN, BlockRange::new(1, 2), 3, 100.0)
        .await
        .unwrap();

    JsonReportHandler::new(&path).handle_report(&report).await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["token_address"], TOKEN);
    assert_eq!(written["total_holders"], 6);
    assert_eq!(written["holders_above_min"], 2);
    assert_eq!(written["block_range"]["end_block"], 2);
    assert_eq!(written["top_holders"][1]["balance"], "150.0");
}
