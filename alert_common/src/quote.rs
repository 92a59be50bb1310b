//! Quote data model.
//!
//! A `Quote` is fetched once per iteration and discarded afterwards. It carries the
//! session's open price and the live price; construction rejects values that would
//! make the variation formula divide by zero or produce NaN.

use crate::error::AlertError;
use crate::ticker::Ticker;

/// Open and live price for one ticker at poll time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    open_price: f64,
    current_price: f64,
}

impl Quote {
    /// Validate and build a quote.
    ///
    /// - open_price: price at market open; must be finite and strictly positive.
    /// - current_price: live price; must be finite and strictly positive.
    pub fn new(open_price: f64, current_price: f64) -> Result<Self, AlertError> {
        if !open_price.is_finite() || open_price <= 0.0 {
            return Err(AlertError::InvalidQuote(format!(
                "open price must be a positive number, got {}",
                open_price
            )));
        }
        if !current_price.is_finite() || current_price <= 0.0 {
            return Err(AlertError::InvalidQuote(format!(
                "current price must be a positive number, got {}",
                current_price
            )));
        }
        Ok(Quote {
            open_price,
            current_price,
        })
    }

    /// Price at market open.
    pub fn open_price(&self) -> f64 {
        self.open_price
    }

    /// Live price at poll time.
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Signed fraction `(current - open) / open`.
    pub fn variation(&self) -> f64 {
        (self.current_price - self.open_price) / self.open_price
    }
}

/// Source of live quotes.
///
/// Implementations fail with `AlertError::QuoteFetch` when the provider is
/// unreachable or answers with malformed data, and with `AlertError::InvalidQuote`
/// when the open price is missing or zero.
pub trait QuoteSource {
    /// Fetch the current quote for `ticker`.
    fn fetch(&self, ticker: &Ticker) -> Result<Quote, AlertError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variation_is_relative_to_open() {
        let quote = Quote::new(100.0, 101.0).unwrap();
        assert_eq!(quote.variation(), 0.01);

        let quote = Quote::new(150.0, 148.0).unwrap();
        assert!((quote.variation() - (-0.013333)).abs() < 1e-6);
    }

    #[test]
    fn zero_open_price_is_invalid() {
        let err = Quote::new(0.0, 101.0).unwrap_err();
        assert!(matches!(err, AlertError::InvalidQuote(_)));
    }

    #[test]
    fn non_finite_prices_are_invalid() {
        assert!(matches!(
            Quote::new(f64::NAN, 1.0),
            Err(AlertError::InvalidQuote(_))
        ));
        assert!(matches!(
            Quote::new(10.0, f64::INFINITY),
            Err(AlertError::InvalidQuote(_))
        ));
        assert!(matches!(
            Quote::new(10.0, 0.0),
            Err(AlertError::InvalidQuote(_))
        ));
    }
}
