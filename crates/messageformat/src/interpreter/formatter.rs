//! Formatter configuration and the user-facing formatting API.

use std::fmt;
use std::sync::Arc;

use bon::bon;
use tracing::debug;

use crate::Args;
use crate::interpreter::coerce::Booleans;
use crate::interpreter::date::{DateFormatter, EnglishDates, date_formatter_for};
use crate::interpreter::evaluator::eval_tree;
use crate::interpreter::plural::{CategorySelector, CldrPluralRules};
use crate::interpreter::{ConfigError, EvalContext, FormatError, KindRegistry};
use crate::parser::{DEFAULT_MAX_DEPTH, ParseTree};

/// Culture used when none is configured.
pub const DEFAULT_CULTURE: &str = "en";

/// Formats parse trees against argument maps.
///
/// A formatter owns the active category selector, the date locale, the
/// registry of custom kinds and the boolean policy. Configuration changes go
/// through `&mut self`, so they cannot overlap with a formatting call; a
/// configured formatter can be shared between threads.
///
/// # Example
///
/// ```
/// use messageformat::{Formatter, params, parse};
///
/// let formatter = Formatter::builder().culture("de").build().unwrap();
/// let tree = parse("{N, plural, one{# Datei} other{# Dateien}}").unwrap();
///
/// assert_eq!(formatter.format_map(&tree, &params! { "N" => 1 }).unwrap(), "1 Datei");
/// assert_eq!(formatter.format_map(&tree, &params! { "N" => 3 }).unwrap(), "3 Dateien");
/// ```
pub struct Formatter {
    selector: Option<Arc<dyn CategorySelector>>,
    culture: Option<String>,
    dates: Arc<dyn DateFormatter>,
    date_locale: String,
    kinds: Arc<KindRegistry>,
    booleans: Booleans,
    max_depth: usize,
}

#[bon]
impl Formatter {
    /// Build a formatter.
    ///
    /// An explicit `selector` takes precedence over `culture`; with neither,
    /// English rules are used. `date_locale` defaults to English.
    ///
    /// # Errors
    ///
    /// `UnknownCulture` or `UnknownDateLocale` for unsupported identifiers.
    #[builder]
    pub fn new(
        #[builder(into)] culture: Option<String>,
        selector: Option<Arc<dyn CategorySelector>>,
        #[builder(into)] date_locale: Option<String>,
        kinds: Option<Arc<KindRegistry>>,
        #[builder(default)] booleans: Booleans,
        #[builder(default = DEFAULT_MAX_DEPTH)] max_depth: usize,
    ) -> Result<Self, ConfigError> {
        let (selector, culture) = match selector {
            Some(selector) => (selector, None),
            None => {
                let culture = culture.unwrap_or_else(|| DEFAULT_CULTURE.to_string());
                let rules: Arc<dyn CategorySelector> =
                    Arc::new(CldrPluralRules::try_new(&culture)?);
                (rules, Some(culture))
            }
        };
        let date_locale = date_locale.unwrap_or_else(|| DEFAULT_CULTURE.to_string());
        let dates = date_formatter_for(&date_locale)?;

        debug!(?culture, %date_locale, ?booleans, max_depth, "configured formatter");
        Ok(Self {
            selector: Some(selector),
            culture,
            dates,
            date_locale,
            kinds: kinds.unwrap_or_default(),
            booleans,
            max_depth,
        })
    }
}

impl Default for Formatter {
    /// English plural rules and dates.
    fn default() -> Self {
        Self {
            selector: Some(Arc::new(CldrPluralRules::english())),
            culture: Some(DEFAULT_CULTURE.to_string()),
            dates: Arc::new(EnglishDates),
            date_locale: DEFAULT_CULTURE.to_string(),
            kinds: Arc::default(),
            booleans: Booleans::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Formatter {
    /// A formatter with no category selector.
    ///
    /// Formatting a `plural` or `selectordinal` with a bound value fails with
    /// `UndefinedPluralFunc` until one is set.
    pub fn bare() -> Self {
        Self {
            selector: None,
            culture: None,
            ..Self::default()
        }
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Format a tree with no arguments.
    pub fn format(&self, tree: &ParseTree) -> Result<String, FormatError> {
        self.format_map(tree, &Args::new())
    }

    /// Format a tree against `args`.
    ///
    /// Stops at the first error; no partial output is returned.
    pub fn format_map(&self, tree: &ParseTree, args: &Args) -> Result<String, FormatError> {
        let mut ctx = EvalContext::with_max_depth(args, self.max_depth).with_booleans(self.booleans);
        let mut out = String::new();
        eval_tree(tree, self, &mut ctx, "", &mut out)?;
        Ok(out)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Switch to the CLDR rules for `culture`.
    pub fn set_culture(&mut self, culture: impl Into<String>) -> Result<(), ConfigError> {
        let culture = culture.into();
        self.selector = Some(Arc::new(CldrPluralRules::try_new(&culture)?));
        debug!(%culture, "set culture");
        self.culture = Some(culture);
        Ok(())
    }

    /// Replace the category selector.
    ///
    /// # Errors
    ///
    /// `PluralFunctionRequired` for `None`; the current selector is kept.
    pub fn set_plural_function(
        &mut self,
        selector: Option<Arc<dyn CategorySelector>>,
    ) -> Result<(), ConfigError> {
        let selector = selector.ok_or(ConfigError::PluralFunctionRequired)?;
        self.selector = Some(selector);
        self.culture = None;
        Ok(())
    }

    /// Switch the date locale.
    pub fn set_date_locale(&mut self, locale: impl Into<String>) -> Result<(), ConfigError> {
        let locale = locale.into();
        self.dates = date_formatter_for(&locale)?;
        debug!(date_locale = %locale, "set date locale");
        self.date_locale = locale;
        Ok(())
    }

    pub fn set_booleans(&mut self, booleans: Booleans) {
        self.booleans = booleans;
    }

    /// The culture whose rules are active, if the selector came from one.
    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    pub fn date_locale(&self) -> &str {
        &self.date_locale
    }

    pub fn booleans(&self) -> Booleans {
        self.booleans
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn has_selector(&self) -> bool {
        self.selector.is_some()
    }

    // =========================================================================
    // Strategy Access
    // =========================================================================

    pub(crate) fn selector(&self) -> Option<&dyn CategorySelector> {
        self.selector.as_deref()
    }

    pub(crate) fn dates(&self) -> &dyn DateFormatter {
        self.dates.as_ref()
    }

    /// The registry of custom kinds this formatter formats.
    pub fn kinds(&self) -> &KindRegistry {
        &self.kinds
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("culture", &self.culture)
            .field("has_selector", &self.selector.is_some())
            .field("date_locale", &self.date_locale)
            .field("kinds", &self.kinds)
            .field("booleans", &self.booleans)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
