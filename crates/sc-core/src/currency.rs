//! Currency metadata.
//!
//! Rate indexes carry the currency they are denominated in. Only the
//! handful of fields the rest of the workspace reads are kept here.

/// A currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    /// Full name, e.g. `"U.S. dollar"`.
    pub name: &'static str,
    /// ISO 4217 code, e.g. `"USD"`.
    pub code: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
}

/// U.S. dollar.
pub static USD: Currency = Currency {
    name: "U.S. dollar",
    code: "USD",
    symbol: "$",
};

/// Euro.
pub static EUR: Currency = Currency {
    name: "European Euro",
    code: "EUR",
    symbol: "\u{20ac}",
};

/// British pound sterling.
pub static GBP: Currency = Currency {
    name: "British pound sterling",
    code: "GBP",
    symbol: "\u{a3}",
};

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
