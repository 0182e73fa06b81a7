//! Franchise market definitions.
//!
//! Provides:
//! - `RegionCode`: the closed set of markets, in display order
//! - `RegionEntry`: per-market contact, currency and business-model data
//! - `RegionRegistry`: process-wide, read-only lookup table

use crate::i18n::Locale;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// A franchise market.
///
/// `ALL` is the display order used for region lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionCode {
    SanFrancisco,
    HongKong,
    Singapore,
    China,
}

impl RegionCode {
    pub const ALL: [RegionCode; 4] = [
        RegionCode::SanFrancisco,
        RegionCode::HongKong,
        RegionCode::Singapore,
        RegionCode::China,
    ];

    /// Parse a URL path segment. Case-sensitive, no normalization.
    pub fn from_code(code: &str) -> Option<RegionCode> {
        Self::ALL.into_iter().find(|region| region.as_str() == code)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionCode::SanFrancisco => "san-francisco",
            RegionCode::HongKong => "hong-kong",
            RegionCode::Singapore => "singapore",
            RegionCode::China => "china",
        }
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string with one value per supported locale.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub zh: &'static str,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &'static str {
        if locale == Locale::CHINESE {
            self.zh
        } else {
            self.en
        }
    }
}

/// Minimum order commitment for markets that require one.
#[derive(Debug, Clone, Serialize)]
pub struct MinimumPurchase {
    pub amount: u64,
    pub currency: &'static str,
    pub note: Option<LocalizedText>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionEntry {
    pub code: RegionCode,
    pub display_name: LocalizedText,
    pub city: LocalizedText,
    pub country: LocalizedText,
    /// IANA timezone name
    pub timezone: &'static str,
    pub currency: &'static str,
    pub contact_phone: &'static str,
    pub contact_email: &'static str,
    /// Set only for markets that do not use the default franchise model
    pub business_model: Option<LocalizedText>,
    pub minimum_purchase: Option<MinimumPurchase>,
}

/// Global region registry singleton.
pub struct RegionRegistry {
    regions: HashMap<RegionCode, RegionEntry>,
}

static REGISTRY: OnceLock<RegionRegistry> = OnceLock::new();

impl RegionRegistry {
    pub fn get() -> &'static RegionRegistry {
        REGISTRY.get_or_init(|| RegionRegistry {
            regions: RegionCode::ALL
                .into_iter()
                .map(|code| (code, region_entry(code)))
                .collect(),
        })
    }

    /// Look up a market. Never fails: every `RegionCode` has an entry.
    pub fn lookup(&self, code: RegionCode) -> &RegionEntry {
        &self.regions[&code]
    }

    /// Check an untrusted code (e.g. a URL segment).
    pub fn is_valid(&self, code: &str) -> bool {
        RegionCode::from_code(code).is_some()
    }

    /// All markets in display order.
    pub fn all_codes(&self) -> Vec<RegionCode> {
        RegionCode::ALL.to_vec()
    }
}

/// Built-in market data.
fn region_entry(code: RegionCode) -> RegionEntry {
    match code {
        RegionCode::SanFrancisco => RegionEntry {
            code,
            display_name: LocalizedText {
                en: "San Francisco",
                zh: "旧金山",
            },
            city: LocalizedText {
                en: "San Francisco",
                zh: "旧金山",
            },
            country: LocalizedText {
                en: "United States",
                zh: "美国",
            },
            timezone: "America/Los_Angeles",
            currency: "USD",
            contact_phone: "(415) 351-6363",
            contact_email: "staff@unincore.us",
            business_model: None,
            minimum_purchase: None,
        },
        RegionCode::HongKong => RegionEntry {
            code,
            display_name: LocalizedText {
                en: "Hong Kong",
                zh: "香港",
            },
            city: LocalizedText {
                en: "Hong Kong",
                zh: "香港",
            },
            country: LocalizedText {
                en: "Hong Kong SAR",
                zh: "中国香港",
            },
            timezone: "Asia/Hong_Kong",
            currency: "HKD",
            contact_phone: "+852 XXXX XXXX",
            contact_email: "hk@unincore.us",
            business_model: None,
            minimum_purchase: None,
        },
        RegionCode::Singapore => RegionEntry {
            code,
            display_name: LocalizedText {
                en: "Singapore",
                zh: "新加坡",
            },
            city: LocalizedText {
                en: "Singapore",
                zh: "新加坡",
            },
            country: LocalizedText {
                en: "Singapore",
                zh: "新加坡",
            },
            timezone: "Asia/Singapore",
            currency: "SGD",
            contact_phone: "+65 XXXX XXXX",
            contact_email: "sg@unincore.us",
            business_model: None,
            minimum_purchase: None,
        },
        RegionCode::China => RegionEntry {
            code,
            display_name: LocalizedText {
                en: "China",
                zh: "中国",
            },
            city: LocalizedText {
                en: "Shanghai",
                zh: "上海",
            },
            country: LocalizedText {
                en: "China",
                zh: "中国",
            },
            timezone: "Asia/Shanghai",
            currency: "CNY",
            contact_phone: "+86 XXX XXXX XXXX",
            contact_email: "cn@unincore.us",
            business_model: Some(LocalizedText {
                en: "Distributor Partnership",
                zh: "经销商合作模式",
            }),
            minimum_purchase: Some(MinimumPurchase {
                amount: 168_000,
                currency: "USD",
                note: Some(LocalizedText {
                    en: "Recommended initial purchase for market entry",
                    zh: "建议初始采购量以进入市场",
                }),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        assert!(std::ptr::eq(RegionRegistry::get(), RegionRegistry::get()));
    }

    #[test]
    fn test_lookup_matches_code_for_every_region() {
        let registry = RegionRegistry::get();
        for code in RegionCode::ALL {
            assert_eq!(registry.lookup(code).code, code);
        }
    }

    #[test]
    fn test_all_codes_fixed_order() {
        assert_eq!(
            RegionRegistry::get().all_codes(),
            vec![
                RegionCode::SanFrancisco,
                RegionCode::HongKong,
                RegionCode::Singapore,
                RegionCode::China,
            ]
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: std::collections::HashSet<_> = RegionCode::ALL
            .iter()
            .map(|code| code.as_str())
            .collect();
        assert_eq!(codes.len(), RegionCode::ALL.len());
    }

    #[test]
    fn test_is_valid() {
        let registry = RegionRegistry::get();
        assert!(registry.is_valid("san-francisco"));
        assert!(registry.is_valid("china"));
        assert!(!registry.is_valid("tokyo"));
        assert!(!registry.is_valid(""));
    }

    #[test]
    fn test_is_valid_is_case_sensitive() {
        let registry = RegionRegistry::get();
        assert!(!registry.is_valid("China"));
        assert!(!registry.is_valid("HONG-KONG"));
    }

    #[test]
    fn test_from_code_round_trips_as_str() {
        assert_eq!(RegionCode::from_code("hong-kong"), Some(RegionCode::HongKong));
        assert_eq!(RegionCode::HongKong.to_string(), "hong-kong");
    }

    #[test]
    fn test_serializes_as_kebab_case() {
        let json = serde_json::to_string(&RegionCode::SanFrancisco).unwrap();
        assert_eq!(json, "\"san-francisco\"");
    }

    #[test]
    fn test_only_china_has_business_model_override() {
        let registry = RegionRegistry::get();
        let china = registry.lookup(RegionCode::China);
        let model = china.business_model.as_ref().unwrap();
        assert_eq!(model.get(Locale::ENGLISH), "Distributor Partnership");
        assert_eq!(model.get(Locale::CHINESE), "经销商合作模式");

        for code in [
            RegionCode::SanFrancisco,
            RegionCode::HongKong,
            RegionCode::Singapore,
        ] {
            assert!(registry.lookup(code).business_model.is_none());
            assert!(registry.lookup(code).minimum_purchase.is_none());
        }
    }

    #[test]
    fn test_china_minimum_purchase() {
        let purchase = RegionRegistry::get()
            .lookup(RegionCode::China)
            .minimum_purchase
            .as_ref()
            .unwrap();
        assert_eq!(purchase.amount, 168_000);
        assert_eq!(purchase.currency, "USD");
        assert!(purchase.note.is_some());
    }

    #[test]
    fn test_localized_text_per_locale() {
        let hk = RegionRegistry::get().lookup(RegionCode::HongKong);
        assert_eq!(hk.country.get(Locale::ENGLISH), "Hong Kong SAR");
        assert_eq!(hk.country.get(Locale::CHINESE), "中国香港");
    }
}
