//! Page data for the locale and region pages.
//!
//! Pages are served as JSON documents assembled from the region registry and
//! the translation table; rendering is left to the client.

use crate::i18n::strings::{ContactStrings, FooterStrings};
use crate::i18n::Locale;
use crate::regions::{RegionCode, RegionEntry, RegionRegistry};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub struct LanguageSwitch {
    pub flag: &'static str,
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct RegionCard {
    pub code: RegionCode,
    pub name: &'static str,
    pub country: &'static str,
    pub currency: &'static str,
    pub contact_email: &'static str,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Labels {
    pub country: &'static str,
    pub currency: &'static str,
    pub contact: &'static str,
    pub learn_more: &'static str,
}

/// `GET /{lang}`
#[derive(Debug, Serialize)]
pub struct RegionSelectionPage {
    pub lang: Locale,
    pub html_lang: &'static str,
    pub brand: &'static str,
    pub home_href: String,
    pub switch: LanguageSwitch,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub intro: &'static str,
    pub labels: Labels,
    pub regions: Vec<RegionCard>,
    pub why_title: &'static str,
    pub highlights: Vec<Highlight>,
    pub footer: &'static FooterStrings,
}

#[derive(Debug, Serialize)]
pub struct RegionLabels {
    pub city: &'static str,
    pub country: &'static str,
    pub currency: &'static str,
    pub phone: &'static str,
    pub contact: &'static str,
    pub business_model: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MinimumPurchaseView {
    pub label: &'static str,
    pub amount: u64,
    pub currency: &'static str,
    pub note: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct RegionDetail {
    pub code: RegionCode,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub timezone: &'static str,
    pub currency: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub business_model: Option<&'static str>,
    pub minimum_purchase: Option<MinimumPurchaseView>,
}

/// `GET /{lang}/{region}`
#[derive(Debug, Serialize)]
pub struct RegionPage {
    pub lang: Locale,
    pub html_lang: &'static str,
    pub brand: &'static str,
    pub home_href: String,
    pub switch: LanguageSwitch,
    pub labels: RegionLabels,
    pub region: RegionDetail,
    pub contact: &'static ContactStrings,
    pub contact_endpoint: &'static str,
    pub footer: &'static FooterStrings,
}

fn language_switch(locale: Locale, suffix: &str) -> LanguageSwitch {
    let other = locale.other();
    LanguageSwitch {
        flag: locale.strings().nav.switch_flag,
        label: other.native_name(),
        href: format!("/{}{}", other, suffix),
    }
}

fn region_card(locale: Locale, entry: &RegionEntry) -> RegionCard {
    RegionCard {
        code: entry.code,
        name: entry.display_name.get(locale),
        country: entry.country.get(locale),
        currency: entry.currency,
        contact_email: entry.contact_email,
        href: format!("/{}/{}", locale, entry.code),
    }
}

pub fn region_selection_page(locale: Locale) -> RegionSelectionPage {
    let strings = locale.strings();
    let registry = RegionRegistry::get();

    RegionSelectionPage {
        lang: locale,
        html_lang: locale.html_lang(),
        brand: strings.nav.brand,
        home_href: format!("/{}", locale),
        switch: language_switch(locale, ""),
        title: strings.market.title,
        subtitle: strings.market.subtitle,
        intro: strings.market.intro,
        labels: Labels {
            country: strings.market.country_label,
            currency: strings.market.currency_label,
            contact: strings.market.contact_label,
            learn_more: strings.market.learn_more,
        },
        regions: registry
            .all_codes()
            .into_iter()
            .map(|code| region_card(locale, registry.lookup(code)))
            .collect(),
        why_title: strings.why.title,
        highlights: vec![
            Highlight {
                title: strings.why.experience_title,
                body: strings.why.experience_body,
            },
            Highlight {
                title: strings.why.roi_title,
                body: strings.why.roi_body,
            },
            Highlight {
                title: strings.why.support_title,
                body: strings.why.support_body,
            },
        ],
        footer: &strings.footer,
    }
}

pub fn region_page(locale: Locale, code: RegionCode) -> RegionPage {
    let strings = locale.strings();
    let entry = RegionRegistry::get().lookup(code);

    RegionPage {
        lang: locale,
        html_lang: locale.html_lang(),
        brand: strings.nav.brand,
        home_href: format!("/{}", locale),
        // Switching language keeps the selected market
        switch: language_switch(locale, &format!("/{}", code)),
        labels: RegionLabels {
            city: strings.market.city_label,
            country: strings.market.country_label,
            currency: strings.market.currency_label,
            phone: strings.market.phone_label,
            contact: strings.market.contact_label,
            business_model: strings.market.business_model_label,
        },
        region: RegionDetail {
            code,
            name: entry.display_name.get(locale),
            city: entry.city.get(locale),
            country: entry.country.get(locale),
            timezone: entry.timezone,
            currency: entry.currency,
            phone: entry.contact_phone,
            email: entry.contact_email,
            business_model: entry.business_model.as_ref().map(|m| m.get(locale)),
            minimum_purchase: entry.minimum_purchase.as_ref().map(|p| MinimumPurchaseView {
                label: strings.market.minimum_purchase_label,
                amount: p.amount,
                currency: p.currency,
                note: p.note.as_ref().map(|n| n.get(locale)),
            }),
        },
        contact: &strings.contact,
        contact_endpoint: "/api/contact",
        footer: &strings.footer,
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

/// GET /{lang}
pub async fn get_region_selection(Path(lang): Path<String>) -> Response {
    match Locale::from_code(&lang) {
        Ok(locale) => Json(region_selection_page(locale)).into_response(),
        Err(_) => not_found(),
    }
}

/// GET /{lang}/{region}
pub async fn get_region_page(Path((lang, region)): Path<(String, String)>) -> Response {
    let Ok(locale) = Locale::from_code(&lang) else {
        return not_found();
    };

    match RegionCode::from_code(&region) {
        Some(code) => Json(region_page(locale, code)).into_response(),
        None => not_found(),
    }
}

/// Fallback for unmatched routes
pub async fn fallback() -> Response {
    not_found()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_page_lists_regions_in_order() {
        let page = region_selection_page(Locale::ENGLISH);
        let codes: Vec<_> = page.regions.iter().map(|card| card.code).collect();
        assert_eq!(codes, RegionRegistry::get().all_codes());
        assert_eq!(page.regions[0].href, "/en/san-francisco");
        assert_eq!(page.regions[0].name, "San Francisco");
    }

    #[test]
    fn test_selection_page_chinese() {
        let page = region_selection_page(Locale::CHINESE);
        assert_eq!(page.title, "选择您的市场");
        assert_eq!(page.regions[3].name, "中国");
        assert_eq!(page.regions[3].href, "/zh/china");
        assert_eq!(page.highlights.len(), 3);
    }

    #[test]
    fn test_selection_page_switch_points_at_other_locale() {
        let page = region_selection_page(Locale::ENGLISH);
        assert_eq!(page.switch.href, "/zh");
        assert_eq!(page.switch.label, "中文");
        assert_eq!(page.switch.flag, "🇨🇳");
    }

    #[test]
    fn test_region_page_china_has_distributor_model() {
        let page = region_page(Locale::ENGLISH, RegionCode::China);
        assert_eq!(page.region.city, "Shanghai");
        assert_eq!(page.region.business_model, Some("Distributor Partnership"));

        let purchase = page.region.minimum_purchase.unwrap();
        assert_eq!(purchase.amount, 168_000);
        assert_eq!(purchase.label, "Minimum Purchase");
    }

    #[test]
    fn test_region_page_without_overrides() {
        let page = region_page(Locale::CHINESE, RegionCode::Singapore);
        assert_eq!(page.region.name, "新加坡");
        assert!(page.region.business_model.is_none());
        assert!(page.region.minimum_purchase.is_none());
        assert_eq!(page.contact.failure, "发送失败，请重试或直接联系我们");
    }

    #[test]
    fn test_region_page_switch_keeps_region() {
        let page = region_page(Locale::CHINESE, RegionCode::HongKong);
        assert_eq!(page.switch.href, "/en/hong-kong");
    }

    #[test]
    fn test_region_page_serializes_region_code() {
        let page = region_page(Locale::ENGLISH, RegionCode::HongKong);
        let value = serde_json::to_value(page).unwrap();
        assert_eq!(value["region"]["code"], "hong-kong");
        assert_eq!(value["labels"]["business_model"], "Business Model");
        assert_eq!(value["lang"], "en");
        assert_eq!(value["contact_endpoint"], "/api/contact");
    }
}
