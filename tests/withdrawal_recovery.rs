//! End-to-end behavior of identifier resolution and withdrawal recovery
//! against a scripted mock backend.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use unifex::error::{Error, ParseError, Result};
use unifex::prelude::*;
use unifex::withdrawal::CURRENCY_ID_PARAM;

/// Outcome script for successive withdrawal submissions.
#[derive(Clone)]
enum Step {
    Accept,
    RejectMalformed,
    RejectUnverifiedAddress,
    Hang,
    /// Accept, but only after a short delay; used to hold the in-flight
    /// window open for duplicate tests.
    AcceptSlow,
}

struct MockExchange {
    submissions: AtomicU32,
    script: Mutex<VecDeque<Step>>,
    seen_identifiers: Mutex<Vec<String>>,
    /// Scripts the native currency metadata mapping: `None` simulates the
    /// missing-field defect the override table exists to work around.
    native_mapping: Option<&'static str>,
}

impl MockExchange {
    fn new(script: Vec<Step>) -> Self {
        Self {
            submissions: AtomicU32::new(0),
            script: Mutex::new(script.into()),
            seen_identifiers: Mutex::new(Vec::new()),
            native_mapping: None,
        }
    }

    fn with_native_mapping(mut self, id: &'static str) -> Self {
        self.native_mapping = Some(id);
        self
    }

    fn submissions(&self) -> u32 {
        self.submissions.load(Ordering::SeqCst)
    }

    fn seen_identifiers(&self) -> Vec<String> {
        self.seen_identifiers.lock().unwrap().clone()
    }
}

impl Backend for MockExchange {
    fn id(&self) -> &str {
        "bitmart"
    }
    fn name(&self) -> &str {
        "BitMart"
    }
    fn capabilities(&self) -> Capabilities {
        Capabilities::FUNDING_SET | Capabilities::CURRENCY_ID_MAPPING
    }
}

#[async_trait]
impl Funding for MockExchange {
    async fn fetch_deposit_address(&self, code: &str) -> Result<DepositAddress> {
        Ok(DepositAddress::new(code.to_string(), "0xdeposit".to_string()))
    }

    async fn fetch_deposit_address_on_network(
        &self,
        code: &str,
        network: &str,
    ) -> Result<DepositAddress> {
        let mut address = DepositAddress::new(code.to_string(), "0xdeposit".to_string());
        address.network = Some(network.to_string());
        Ok(address)
    }

    async fn withdraw(&self, params: WithdrawParams) -> Result<Transaction> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        if let Some(id) = params.params.get(CURRENCY_ID_PARAM) {
            self.seen_identifiers.lock().unwrap().push(id.clone());
        }
        let step = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Step::Accept);
        match step {
            Step::Accept => Ok(accepted(&params)),
            Step::AcceptSlow => {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(accepted(&params))
            }
            Step::RejectMalformed => Err(ParseError::null_value("currency.networks.id").into()),
            Step::RejectUnverifiedAddress => {
                Err(Error::backend("60100", "Address is not verified"))
            }
            Step::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                unreachable!("hung submission should be cut off by the timeout")
            }
        }
    }

    async fn fetch_withdrawals(
        &self,
        _code: Option<&str>,
        _since: Option<i64>,
        _limit: Option<u32>,
    ) -> Result<Vec<Transaction>> {
        Ok(vec![])
    }

    fn currency_id(&self, _code: &str, _network: Option<&str>) -> Result<String> {
        match self.native_mapping {
            Some(id) => Ok(id.to_string()),
            None => Err(ParseError::null_value("currency.networks.id").into()),
        }
    }
}

fn accepted(params: &WithdrawParams) -> Transaction {
    Transaction::new(
        "w-777".to_string(),
        TransactionType::Withdrawal,
        params.amount,
        params.currency.clone(),
        TransactionStatus::Pending,
    )
}

fn orchestrator() -> WithdrawalOrchestrator {
    WithdrawalOrchestrator::new(
        NetworkCodeResolver::with_builtin_overrides(),
        OrchestratorConfig {
            attempt_timeout: Duration::from_millis(200),
        },
    )
}

fn usdt(network: &str) -> WithdrawParams {
    WithdrawParams::new("USDT", dec!(100), "TDestAddr001").network(network)
}

#[tokio::test]
async fn override_hits_send_configured_identifiers() {
    for (network, expected) in [
        ("BEP20", "USDT-BSC_BNB"),
        ("TRC20", "USDT-TRX"),
        ("ERC20", "USDT-ETH"),
    ] {
        let backend = MockExchange::new(vec![Step::Accept]);
        let result = orchestrator()
            .withdraw(&backend, usdt(network))
            .await
            .unwrap();
        assert!(result.succeeded());
        assert_eq!(backend.seen_identifiers(), vec![expected.to_string()]);
    }
}

#[tokio::test]
async fn override_miss_synthesizes_identifier() {
    let backend = MockExchange::new(vec![Step::Accept]);
    let params = WithdrawParams::new("DOGE", dec!(500), "DAddr").network("DOGE");
    let result = orchestrator().withdraw(&backend, params).await.unwrap();

    assert!(result.succeeded());
    assert_eq!(backend.seen_identifiers(), vec!["DOGE-DOGE".to_string()]);
}

#[tokio::test]
async fn native_mapping_used_when_no_override_applies() {
    let backend = MockExchange::new(vec![Step::Accept]).with_native_mapping("BTC-NATIVE");
    let params = WithdrawParams::new("BTC", dec!(1), "bc1addr").network("BTC");
    let result = orchestrator().withdraw(&backend, params).await.unwrap();

    assert!(result.succeeded());
    assert_eq!(backend.seen_identifiers(), vec!["BTC-NATIVE".to_string()]);
}

#[tokio::test]
async fn malformed_identifier_recovers_on_second_submission() {
    let backend = MockExchange::new(vec![Step::RejectMalformed, Step::Accept]);
    let result = orchestrator()
        .withdraw(&backend, usdt("TRC20"))
        .await
        .unwrap();

    assert_eq!(result.status, WithdrawalStatus::Succeeded);
    assert_eq!(result.attempts, 2);
    assert!(result.recovered);
    assert_eq!(backend.submissions(), 2);
    let tx = result.transaction.unwrap();
    assert!(tx.is_withdrawal());
    assert_eq!(tx.amount, dec!(100));
}

#[tokio::test]
async fn terminal_business_failure_submits_once() {
    let backend = MockExchange::new(vec![Step::RejectUnverifiedAddress, Step::Accept]);
    let result = orchestrator()
        .withdraw(&backend, usdt("TRC20"))
        .await
        .unwrap();

    assert_eq!(result.status, WithdrawalStatus::Failed);
    assert_eq!(result.attempts, 1);
    assert_eq!(backend.submissions(), 1);
    let failure = result.failure.unwrap();
    assert_eq!(failure.kind, FailureKind::TerminalBusiness);
    assert!(!failure.submission_state_unknown);
    assert!(failure.source.to_string().contains("60100"));
}

#[tokio::test]
async fn timeout_fails_with_submission_state_unknown() {
    let backend = MockExchange::new(vec![Step::Hang, Step::Accept]);
    let result = orchestrator()
        .withdraw(&backend, usdt("TRC20"))
        .await
        .unwrap();

    assert_eq!(result.status, WithdrawalStatus::Failed);
    assert_eq!(result.attempts, 1);
    assert_eq!(backend.submissions(), 1);
    let failure = result.failure.unwrap();
    assert_eq!(failure.kind, FailureKind::Ambiguous);
    assert!(failure.submission_state_unknown);
}

#[tokio::test]
async fn concurrent_duplicates_submit_exactly_once() {
    let orchestrator = Arc::new(orchestrator());
    let backend = Arc::new(MockExchange::new(vec![
        Step::AcceptSlow,
        Step::Accept,
        Step::Accept,
        Step::Accept,
    ]));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let orchestrator = Arc::clone(&orchestrator);
        let backend = Arc::clone(&backend);
        handles.push(tokio::spawn(async move {
            orchestrator.withdraw(backend.as_ref(), usdt("TRC20")).await
        }));
    }

    let mut accepted = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(result) => {
                assert!(result.succeeded());
                accepted += 1;
            }
            Err(err) => {
                assert!(err.is_duplicate_in_flight());
                rejected += 1;
            }
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(rejected, 3);
    assert_eq!(backend.submissions(), 1);
}

#[tokio::test]
async fn resolver_never_fails_for_valid_currency() {
    let resolver = NetworkCodeResolver::with_builtin_overrides();
    let backend = MockExchange::new(vec![]);

    for (currency, network) in [
        ("USDT", Some("TRC20")),
        ("USDT", None),
        ("NEWCOIN", Some("NEWNET")),
        ("NEWCOIN", None),
    ] {
        let id = resolver.resolve(&backend, currency, network).unwrap();
        assert!(!id.is_empty(), "{currency}/{network:?}");
    }
}

#[tokio::test]
async fn full_flow_sell_then_withdraw() {
    // A session-shaped flow: check balance, sell a percentage, withdraw the
    // proceeds, each against the uniform layer only.
    use unifex::types::{Balance, MarketOrderParams, Ticker};

    struct TradingExchange {
        inner: MockExchange,
    }

    impl Backend for TradingExchange {
        fn id(&self) -> &str {
            self.inner.id()
        }
        fn name(&self) -> &str {
            self.inner.name()
        }
        fn capabilities(&self) -> Capabilities {
            Capabilities::all_known()
        }
    }

    #[async_trait]
    impl MarketData for TradingExchange {
        async fn fetch_ticker(&self, symbol: &str) -> Result<Ticker> {
            Ok(Ticker::new(symbol.to_string(), dec!(2)))
        }
    }

    #[async_trait]
    impl Account for TradingExchange {
        async fn fetch_balance(&self) -> Result<Balance> {
            let mut balance = Balance::new();
            balance.set("AAA", BalanceEntry::new(dec!(200), dec!(0)));
            balance.set("USDT", BalanceEntry::new(dec!(50), dec!(0)));
            Ok(balance)
        }
    }

    #[async_trait]
    impl Trading for TradingExchange {
        async fn create_market_order(&self, params: MarketOrderParams) -> Result<Order> {
            let amount = match params.amount {
                OrderAmount::Exact(a) | OrderAmount::QuoteCost(a) => a,
                OrderAmount::PercentageOfHoldings(p) => p,
            };
            Ok(Order::new(
                "o-1".to_string(),
                params.symbol,
                params.side,
                amount,
                OrderStatus::Closed,
            ))
        }
    }

    #[async_trait]
    impl Funding for TradingExchange {
        async fn fetch_deposit_address(&self, code: &str) -> Result<DepositAddress> {
            self.inner.fetch_deposit_address(code).await
        }
        async fn fetch_deposit_address_on_network(
            &self,
            code: &str,
            network: &str,
        ) -> Result<DepositAddress> {
            self.inner.fetch_deposit_address_on_network(code, network).await
        }
        async fn withdraw(&self, params: WithdrawParams) -> Result<Transaction> {
            self.inner.withdraw(params).await
        }
        async fn fetch_withdrawals(
            &self,
            code: Option<&str>,
            since: Option<i64>,
            limit: Option<u32>,
        ) -> Result<Vec<Transaction>> {
            self.inner.fetch_withdrawals(code, since, limit).await
        }
        fn currency_id(&self, code: &str, network: Option<&str>) -> Result<String> {
            self.inner.currency_id(code, network)
        }
    }

    let exchange = TradingExchange {
        inner: MockExchange::new(vec![Step::Accept]),
    };

    let service = QuoteBalanceService::default();
    let price = service.get_price(&exchange, "AAA").await.unwrap();
    assert_eq!(price, dec!(2));

    let executor = OrderExecutor::default();
    let order = executor
        .place_market_order(
            &exchange,
            "AAA",
            OrderSide::Sell,
            OrderAmount::PercentageOfHoldings(dec!(25)),
        )
        .await
        .unwrap();
    assert_eq!(order.amount, dec!(50));

    let result = orchestrator()
        .withdraw(&exchange, usdt("ERC20"))
        .await
        .unwrap();
    assert!(result.succeeded());
    assert_eq!(exchange.inner.seen_identifiers(), vec!["USDT-ETH".to_string()]);
}
