pub mod config;
pub mod contact;
pub mod i18n;
pub mod mailer;
pub mod pages;
pub mod regions;
pub mod routing;
pub mod server;
