use std::collections::HashMap;
use std::fmt;

use actix_web::{http::header, web, FromRequest, HttpRequest};
use futures::future::{ready, Ready};

pub const ENTITY_NOT_FOUND_ERROR: &str = "entity_not_found";
pub const ENTITY_NOT_EXIST_ERROR: &str = "entity_not_exist";
pub const TAG_WAS_CREATED_MESSAGE: &str = "tag_was_created";
pub const TAG_WAS_DELETED_MESSAGE: &str = "tag_was_deleted";
pub const INTERNAL_ERROR_MESSAGE: &str = "internal_error";

/// Locales the service ships message bundles for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Pick the first supported language out of an `Accept-Language`
    /// header value. q-weights are ignored; listed order wins.
    pub fn from_accept_language(header: &str) -> Option<Locale> {
        header
            .split(',')
            .filter_map(|part| {
                let tag = part.split(';').next()?.trim();
                let primary = tag.split('-').next()?;
                match primary.to_ascii_lowercase().as_str() {
                    "en" => Some(Locale::En),
                    "ru" => Some(Locale::Ru),
                    _ => None,
                }
            })
            .next()
    }
}

// Extractor resolving the request locale from Accept-Language, falling
// back to the configured default.
impl FromRequest for Locale {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let fallback = req
            .app_data::<web::Data<crate::AppState>>()
            .map(|state| state.default_locale)
            .unwrap_or_default();

        let locale = req
            .headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(Locale::from_accept_language)
            .unwrap_or(fallback);

        ready(Ok(locale))
    }
}

/// Message-key to localized-string lookup over embedded bundles.
///
/// Templates use `{0}` for the single positional argument. Unknown keys
/// fall back to the English bundle, then to the key itself.
pub struct LocaleService {
    bundles: HashMap<Locale, HashMap<String, String>>,
}

impl LocaleService {
    pub fn new() -> anyhow::Result<Self> {
        let mut bundles = HashMap::new();
        bundles.insert(Locale::En, serde_json::from_str(include_str!("../locales/en.json"))?);
        bundles.insert(Locale::Ru, serde_json::from_str(include_str!("../locales/ru.json"))?);
        Ok(LocaleService { bundles })
    }

    pub fn message(&self, locale: Locale, key: &str) -> String {
        self.bundles
            .get(&locale)
            .and_then(|bundle| bundle.get(key))
            .or_else(|| self.bundles.get(&Locale::En).and_then(|bundle| bundle.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn message_with(&self, locale: Locale, key: &str, arg: impl fmt::Display) -> String {
        self.message(locale, key).replace("{0}", &arg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_language_picks_first_supported_tag() {
        assert_eq!(Locale::from_accept_language("ru-RU,ru;q=0.9,en;q=0.8"), Some(Locale::Ru));
        assert_eq!(Locale::from_accept_language("en-US,en;q=0.5"), Some(Locale::En));
        assert_eq!(Locale::from_accept_language("de-DE,fr;q=0.9"), None);
        assert_eq!(Locale::from_accept_language("de-DE, ru;q=0.7"), Some(Locale::Ru));
    }

    #[test]
    fn message_interpolates_positional_argument() {
        let locales = LocaleService::new().unwrap();
        let message = locales.message_with(Locale::En, TAG_WAS_CREATED_MESSAGE, 7);
        assert!(message.contains("7"), "expected id in message: {message}");
    }

    #[test]
    fn russian_bundle_is_used_when_requested() {
        let locales = LocaleService::new().unwrap();
        let en = locales.message_with(Locale::En, ENTITY_NOT_FOUND_ERROR, 42);
        let ru = locales.message_with(Locale::Ru, ENTITY_NOT_FOUND_ERROR, 42);
        assert_ne!(en, ru);
        assert!(ru.contains("42"));
    }

    #[test]
    fn unknown_key_falls_back_to_the_key() {
        let locales = LocaleService::new().unwrap();
        assert_eq!(locales.message(Locale::En, "no_such_key"), "no_such_key");
    }
}
