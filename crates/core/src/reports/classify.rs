//! Balance sheet classification rules.
//!
//! An asset is fixed when its name appears in the configured label set;
//! otherwise the numeric account code decides (below the threshold is
//! current). Liabilities split current/long-term by an analogous code
//! threshold. The rule is configuration, not code - see
//! [`saldo_shared::config::ReportConfig`].

use saldo_shared::config::ReportConfig;

use crate::catalog::Account;

/// Balance sheet asset section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    /// Current assets (cash, receivables, prepaids, ...).
    Current,
    /// Fixed assets (equipment, accumulated depreciation, ...).
    Fixed,
}

/// Balance sheet liability section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiabilityClass {
    /// Current liabilities.
    Current,
    /// Long-term liabilities.
    LongTerm,
}

/// Classifies an asset account into current or fixed.
///
/// Label match wins; otherwise accounts whose numeric code is below the
/// configured limit are current. Non-numeric codes classify as current
/// (they parse to zero).
#[must_use]
pub fn classify_asset(config: &ReportConfig, account: &Account) -> AssetClass {
    if config
        .fixed_asset_labels
        .iter()
        .any(|label| label == &account.name)
    {
        return AssetClass::Fixed;
    }

    if account.numeric_code() < config.current_asset_code_limit {
        AssetClass::Current
    } else {
        AssetClass::Fixed
    }
}

/// Classifies a liability account into current or long-term by code
/// threshold.
#[must_use]
pub fn classify_liability(config: &ReportConfig, account: &Account) -> LiabilityClass {
    if account.numeric_code() < config.current_liability_code_limit {
        LiabilityClass::Current
    } else {
        LiabilityClass::LongTerm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AccountType;
    use rstest::rstest;
    use saldo_shared::types::AccountId;

    fn account(code: &str, name: &str, account_type: AccountType) -> Account {
        Account {
            id: AccountId::new(),
            code: code.to_string(),
            name: name.to_string(),
            account_type,
            is_active: true,
        }
    }

    #[rstest]
    #[case("1100", "Kas", AssetClass::Current)]
    #[case("1499", "Piutang Usaha", AssetClass::Current)]
    #[case("1500", "Kendaraan", AssetClass::Fixed)]
    #[case("1600", "Gedung", AssetClass::Fixed)]
    fn test_asset_code_threshold(
        #[case] code: &str,
        #[case] name: &str,
        #[case] expected: AssetClass,
    ) {
        let config = ReportConfig::default();
        let acc = account(code, name, AccountType::Asset);
        assert_eq!(classify_asset(&config, &acc), expected);
    }

    #[test]
    fn test_label_match_overrides_code() {
        let config = ReportConfig::default();
        // Code says current, label says fixed; the label wins.
        let acc = account("1300", "Peralatan Outbond", AccountType::Asset);
        assert_eq!(classify_asset(&config, &acc), AssetClass::Fixed);

        let contra = account("1400", "Akumulasi Penyusutan", AccountType::Asset);
        assert_eq!(classify_asset(&config, &contra), AssetClass::Fixed);
    }

    #[test]
    fn test_non_numeric_code_is_current() {
        let config = ReportConfig::default();
        let acc = account("CASH", "Petty Cash", AccountType::Asset);
        assert_eq!(classify_asset(&config, &acc), AssetClass::Current);
    }

    #[rstest]
    #[case("2100", LiabilityClass::Current)]
    #[case("2499", LiabilityClass::Current)]
    #[case("2500", LiabilityClass::LongTerm)]
    #[case("2600", LiabilityClass::LongTerm)]
    fn test_liability_code_threshold(#[case] code: &str, #[case] expected: LiabilityClass) {
        let config = ReportConfig::default();
        let acc = account(code, "Utang", AccountType::Liability);
        assert_eq!(classify_liability(&config, &acc), expected);
    }

    #[test]
    fn test_custom_config() {
        let config = ReportConfig {
            fixed_asset_labels: vec!["Vehicles".to_string()],
            current_asset_code_limit: 1200,
            current_liability_code_limit: 2200,
        };

        let acc = account("1300", "Inventory", AccountType::Asset);
        assert_eq!(classify_asset(&config, &acc), AssetClass::Fixed);

        let vehicle = account("1100", "Vehicles", AccountType::Asset);
        assert_eq!(classify_asset(&config, &vehicle), AssetClass::Fixed);

        let loan = account("2300", "Bank Loan", AccountType::Liability);
        assert_eq!(classify_liability(&config, &loan), LiabilityClass::LongTerm);
    }
}
