//! Thin service layer over the backend traits.
//!
//! [`QuoteBalanceService`] answers price and balance questions;
//! [`OrderExecutor`] turns user-level order intents (sell a percentage of
//! holdings, spend a quote amount) into the exact market orders backends
//! accept. Balance snapshots are always fetched fresh at decision time,
//! never cached.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::traits::{Account, MarketData, Trading};
use crate::types::{BalanceEntry, MarketOrderParams, Order, OrderAmount, OrderSide};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Price and balance lookups with symbol qualification.
///
/// Bare token symbols are qualified against a default quote currency, so
/// callers can say "BTC" and mean "BTC/USDT".
#[derive(Debug, Clone)]
pub struct QuoteBalanceService {
    default_quote: String,
}

impl Default for QuoteBalanceService {
    fn default() -> Self {
        Self::new("USDT")
    }
}

impl QuoteBalanceService {
    /// Creates a service qualifying bare symbols against the given quote
    /// currency.
    pub fn new(default_quote: &str) -> Self {
        Self {
            default_quote: default_quote.to_uppercase(),
        }
    }

    /// The configured default quote currency.
    pub fn default_quote(&self) -> &str {
        &self.default_quote
    }

    /// Qualifies a symbol: `"BTC"` becomes `"BTC/USDT"`, full pairs pass
    /// through unchanged.
    pub fn qualify_symbol(&self, symbol: &str) -> Result<String> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(Error::market_not_found("symbol is empty"));
        }
        if symbol.contains('/') {
            Ok(symbol.to_uppercase())
        } else {
            Ok(format!(
                "{}/{}",
                symbol.to_uppercase(),
                self.default_quote
            ))
        }
    }

    /// Fetches the last traded price for a symbol.
    pub async fn get_price(&self, backend: &dyn MarketData, symbol: &str) -> Result<Decimal> {
        let symbol = self.qualify_symbol(symbol)?;
        let ticker = backend.fetch_ticker(&symbol).await?;
        debug!(backend = backend.id(), %symbol, last = %ticker.last, "price lookup");
        Ok(ticker.last)
    }

    /// Fetches a fresh balance entry for a currency.
    pub async fn get_balance(&self, backend: &dyn Account, currency: &str) -> Result<BalanceEntry> {
        let currency = currency.trim().to_uppercase();
        if currency.is_empty() {
            return Err(Error::invalid_currency("currency code is empty"));
        }
        backend.get_balance(&currency).await
    }
}

/// Places market orders, normalizing user-level amount intents.
#[derive(Debug, Clone, Default)]
pub struct OrderExecutor {
    service: QuoteBalanceService,
}

impl OrderExecutor {
    /// Creates an executor over the given service.
    pub fn new(service: QuoteBalanceService) -> Self {
        Self { service }
    }

    /// Places a market order after normalizing the amount and pre-checking
    /// the balance.
    ///
    /// Percentage amounts are valid for sells only and are normalized
    /// against a balance snapshot fetched immediately before placement.
    /// Sells of an exact amount and buys by quote cost are pre-checked
    /// against free balance; an exact-amount buy passes through, since its
    /// quote cost is not known until the backend fills it.
    pub async fn place_market_order<B>(
        &self,
        backend: &B,
        symbol: &str,
        side: OrderSide,
        amount: OrderAmount,
    ) -> Result<Order>
    where
        B: Account + Trading + ?Sized,
    {
        let symbol = self.service.qualify_symbol(symbol)?;
        let (base, quote) = split_symbol(&symbol)?;
        validate_amount(&amount)?;

        let resolved = match (side, amount) {
            (OrderSide::Sell, OrderAmount::PercentageOfHoldings(pct)) => {
                let entry = backend.get_balance(base).await?;
                let sell_amount = entry.free * pct / HUNDRED;
                if sell_amount <= Decimal::ZERO {
                    return Err(Error::insufficient_balance(format!(
                        "no free {base} to sell"
                    )));
                }
                debug!(%symbol, %pct, free = %entry.free, amount = %sell_amount, "percentage sell normalized");
                OrderAmount::Exact(sell_amount)
            }
            (OrderSide::Buy, OrderAmount::PercentageOfHoldings(_)) => {
                return Err(Error::invalid_request(
                    "percentage amounts apply to sells only; buy by quote cost instead",
                ));
            }
            (OrderSide::Sell, OrderAmount::Exact(a)) => {
                let entry = backend.get_balance(base).await?;
                if entry.free < a {
                    return Err(Error::insufficient_balance(format!(
                        "sell needs {a} {base}, free {}",
                        entry.free
                    )));
                }
                OrderAmount::Exact(a)
            }
            (OrderSide::Buy, OrderAmount::QuoteCost(cost)) => {
                let entry = backend.get_balance(quote).await?;
                if entry.free < cost {
                    return Err(Error::insufficient_balance(format!(
                        "buy needs {cost} {quote}, free {}",
                        entry.free
                    )));
                }
                OrderAmount::QuoteCost(cost)
            }
            (_, other) => other,
        };

        let order = backend
            .create_market_order(MarketOrderParams::new(&symbol, side, resolved))
            .await?;
        info!(
            backend = backend.id(),
            %symbol,
            %side,
            order_id = %order.id,
            "market order placed"
        );
        Ok(order)
    }
}

fn split_symbol(symbol: &str) -> Result<(&str, &str)> {
    symbol
        .split_once('/')
        .filter(|(base, quote)| !base.is_empty() && !quote.is_empty())
        .ok_or_else(|| Error::market_not_found(format!("malformed symbol: {symbol}")))
}

fn validate_amount(amount: &OrderAmount) -> Result<()> {
    match amount {
        OrderAmount::Exact(a) | OrderAmount::QuoteCost(a) if *a <= Decimal::ZERO => Err(
            Error::invalid_request(format!("order amount must be positive, got {a}")),
        ),
        OrderAmount::PercentageOfHoldings(pct)
            if *pct <= Decimal::ZERO || *pct > HUNDRED =>
        {
            Err(Error::invalid_request(format!(
                "percentage must be in (0, 100], got {pct}"
            )))
        }
        _ => Ok(()),
    }
}
