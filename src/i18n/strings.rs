//! Localized display strings, one struct per page section.
//!
//! Every entry is a named field, so a missing or misspelled key is a compile
//! error instead of an empty string at runtime. Entries containing `{name}`
//! style placeholders are filled with [`fill`].

use serde::Serialize;

/// Navigation bar
#[derive(Debug, Clone, Serialize)]
pub struct NavStrings {
    pub brand: &'static str,
    /// Flag shown next to the switch link (points at the other language)
    pub switch_flag: &'static str,
}

/// Region selection page and region cards
#[derive(Debug, Clone, Serialize)]
pub struct MarketStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub intro: &'static str,
    pub country_label: &'static str,
    pub city_label: &'static str,
    pub currency_label: &'static str,
    pub contact_label: &'static str,
    pub phone_label: &'static str,
    pub business_model_label: &'static str,
    pub minimum_purchase_label: &'static str,
    pub learn_more: &'static str,
}

/// "Why choose us" highlights
#[derive(Debug, Clone, Serialize)]
pub struct WhyStrings {
    pub title: &'static str,
    pub experience_title: &'static str,
    pub experience_body: &'static str,
    pub roi_title: &'static str,
    pub roi_body: &'static str,
    pub support_title: &'static str,
    pub support_body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterStrings {
    pub tagline: &'static str,
    pub rights: &'static str,
}

/// Contact form shown on region pages
#[derive(Debug, Clone, Serialize)]
pub struct ContactStrings {
    pub title: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub phone_label: &'static str,
    pub message_label: &'static str,
    pub submit: &'static str,
    pub success: &'static str,
    /// Shown when dispatch fails; never includes internal error detail
    pub failure: &'static str,
}

/// Inquiry notification email sent to staff
#[derive(Debug, Clone, Serialize)]
pub struct NotificationStrings {
    /// Placeholders: {name}
    pub subject: &'static str,
    pub heading: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub phone_label: &'static str,
    pub message_label: &'static str,
    pub submitted_label: &'static str,
    /// chrono format string for the submission timestamp (UTC)
    pub timestamp_format: &'static str,
}

/// All localized strings for a locale
#[derive(Debug, Clone, Serialize)]
pub struct Translations {
    pub nav: NavStrings,
    pub market: MarketStrings,
    pub why: WhyStrings,
    pub footer: FooterStrings,
    pub contact: ContactStrings,
    pub notification: NotificationStrings,
}

impl Translations {
    /// Every entry as `(section.field, value)`, for validation.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let Translations {
            nav,
            market,
            why,
            footer,
            contact,
            notification,
        } = self;

        vec![
            ("nav.brand", nav.brand),
            ("nav.switch_flag", nav.switch_flag),
            ("market.title", market.title),
            ("market.subtitle", market.subtitle),
            ("market.intro", market.intro),
            ("market.country_label", market.country_label),
            ("market.city_label", market.city_label),
            ("market.currency_label", market.currency_label),
            ("market.contact_label", market.contact_label),
            ("market.phone_label", market.phone_label),
            ("market.business_model_label", market.business_model_label),
            ("market.minimum_purchase_label", market.minimum_purchase_label),
            ("market.learn_more", market.learn_more),
            ("why.title", why.title),
            ("why.experience_title", why.experience_title),
            ("why.experience_body", why.experience_body),
            ("why.roi_title", why.roi_title),
            ("why.roi_body", why.roi_body),
            ("why.support_title", why.support_title),
            ("why.support_body", why.support_body),
            ("footer.tagline", footer.tagline),
            ("footer.rights", footer.rights),
            ("contact.title", contact.title),
            ("contact.name_label", contact.name_label),
            ("contact.email_label", contact.email_label),
            ("contact.phone_label", contact.phone_label),
            ("contact.message_label", contact.message_label),
            ("contact.submit", contact.submit),
            ("contact.success", contact.success),
            ("contact.failure", contact.failure),
            ("notification.subject", notification.subject),
            ("notification.heading", notification.heading),
            ("notification.name_label", notification.name_label),
            ("notification.email_label", notification.email_label),
            ("notification.phone_label", notification.phone_label),
            ("notification.message_label", notification.message_label),
            ("notification.submitted_label", notification.submitted_label),
            ("notification.timestamp_format", notification.timestamp_format),
        ]
    }
}

/// Replace `{key}` placeholders in a template.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{}}}", key), value)
    })
}

// ==================== English Strings ====================

pub static ENGLISH_STRINGS: Translations = Translations {
    nav: NavStrings {
        brand: "UNI&CORE",
        switch_flag: "🇨🇳",
    },
    market: MarketStrings {
        title: "Select Your Market",
        subtitle: "UNI&CORE Korean Beauty Lounge Franchise Opportunities",
        intro: "We offer franchise opportunities in multiple cities. Select your market of \
interest to learn about detailed franchise information, investment returns, and support programs.",
        country_label: "Country/Region",
        city_label: "City",
        currency_label: "Currency",
        contact_label: "Contact",
        phone_label: "Phone",
        business_model_label: "Business Model",
        minimum_purchase_label: "Minimum Purchase",
        learn_more: "Learn More",
    },
    why: WhyStrings {
        title: "Why Choose UNI&CORE?",
        experience_title: "Premium Korean Experience",
        experience_body: "Authentic Korean beauty care and leisure services",
        roi_title: "High ROI",
        roi_body: "Proven business model with stable returns",
        support_title: "Comprehensive Support",
        support_body: "Full guidance from site selection to operations",
    },
    footer: FooterStrings {
        tagline: "Korean Beauty Lounge · Global Franchise Opportunities",
        rights: "All rights reserved",
    },
    contact: ContactStrings {
        title: "Contact Us",
        name_label: "Name",
        email_label: "Email",
        phone_label: "Phone",
        message_label: "Message",
        submit: "Submit",
        success: "Thank you! We will contact you soon.",
        failure: "Failed to send, please try again or contact us directly",
    },
    notification: NotificationStrings {
        subject: "New Franchise Inquiry - {name}",
        heading: "New Franchise Inquiry",
        name_label: "Name:",
        email_label: "Email:",
        phone_label: "Phone:",
        message_label: "Message:",
        submitted_label: "Submitted:",
        timestamp_format: "%-m/%-d/%Y, %-I:%M:%S %p UTC",
    },
};

// ==================== Chinese Strings ====================

pub static CHINESE_STRINGS: Translations = Translations {
    nav: NavStrings {
        brand: "UNI&CORE",
        switch_flag: "🇺🇸",
    },
    market: MarketStrings {
        title: "选择您的市场",
        subtitle: "UNI&CORE 韩式美容休闲吧加盟机会",
        intro: "我们在多个城市提供加盟机会。选择您感兴趣的市场，了解详细的加盟信息、投资回报和支持计划。",
        country_label: "国家/地区",
        city_label: "城市",
        currency_label: "货币",
        contact_label: "联系方式",
        phone_label: "电话",
        business_model_label: "商业模式",
        minimum_purchase_label: "最低采购额",
        learn_more: "了解详情",
    },
    why: WhyStrings {
        title: "为什么选择 UNI&CORE？",
        experience_title: "韩式高端体验",
        experience_body: "正宗的韩式美容护理和休闲服务",
        roi_title: "高投资回报",
        roi_body: "经验证的商业模式，稳定的收益",
        support_title: "全方位支持",
        support_body: "从选址到运营的全程指导",
    },
    footer: FooterStrings {
        tagline: "韩式美容休闲吧 · 全球加盟机会",
        rights: "版权所有",
    },
    contact: ContactStrings {
        title: "联系我们",
        name_label: "姓名",
        email_label: "邮箱",
        phone_label: "电话",
        message_label: "留言",
        submit: "提交",
        success: "感谢您的咨询！我们会尽快与您联系。",
        failure: "发送失败，请重试或直接联系我们",
    },
    notification: NotificationStrings {
        subject: "新的加盟咨询 - {name}",
        heading: "新的加盟咨询",
        name_label: "姓名：",
        email_label: "邮箱：",
        phone_label: "电话：",
        message_label: "留言：",
        submitted_label: "提交时间：",
        timestamp_format: "%Y/%-m/%-d %H:%M:%S UTC",
    },
};
