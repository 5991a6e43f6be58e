//! Tracked UNCTAD indicators.

use serde::{Deserialize, Serialize};

use crate::columns;

/// Indicator code for annual digital services exports.
pub const EXPORTS_CODE: &str = "UNCTAD_DE_DIG_SERVTRADE_ANN_EXP";
/// Indicator code for annual digital services imports.
pub const IMPORTS_CODE: &str = "UNCTAD_DE_DIG_SERVTRADE_ANN_IMP";

/// A measured quantity carried through to the panel as its own column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Indicator {
    Exports,
    Imports,
}

impl Indicator {
    /// All tracked indicators in output column order.
    pub const ALL: [Indicator; 2] = [Indicator::Exports, Indicator::Imports];

    /// Source indicator code in the raw extract.
    pub fn code(self) -> &'static str {
        match self {
            Indicator::Exports => EXPORTS_CODE,
            Indicator::Imports => IMPORTS_CODE,
        }
    }

    /// Public panel column name (values in USD millions).
    pub fn column(self) -> &'static str {
        match self {
            Indicator::Exports => columns::EXPORTS,
            Indicator::Imports => columns::IMPORTS,
        }
    }

    /// Column name of the regional total for this measure.
    pub fn total_column(self) -> &'static str {
        match self {
            Indicator::Exports => columns::EXPORTS_TOTAL,
            Indicator::Imports => columns::IMPORTS_TOTAL,
        }
    }

    /// Looks up an indicator by its exact source code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|indicator| indicator.code() == code)
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_matches_exact_codes() {
        assert_eq!(
            Indicator::from_code("UNCTAD_DE_DIG_SERVTRADE_ANN_EXP"),
            Some(Indicator::Exports)
        );
        assert_eq!(
            Indicator::from_code("UNCTAD_DE_DIG_SERVTRADE_ANN_IMP"),
            Some(Indicator::Imports)
        );
        assert_eq!(Indicator::from_code("unctad_de_dig_servtrade_ann_exp"), None);
        assert_eq!(Indicator::from_code("UNCTAD_DE_ICT_GOODS"), None);
    }

    #[test]
    fn columns_follow_output_schema() {
        assert_eq!(
            Indicator::Exports.column(),
            "dig_services_exports_usd_millions"
        );
        assert_eq!(
            Indicator::Imports.total_column(),
            "dig_services_imports_usd_millions_total"
        );
    }
}
