//! Pattern checks on extracted receipt fields
//!
//! Validation only counts how many stacked lines of each field look right;
//! it never rejects a field.

use regex::Regex;
use serde::Serialize;
use tracing::info;

use super::receipt::ReceiptFields;
use crate::config::FieldSettings;
use crate::error::{ReaderError, Result};

/// Compiled per-field patterns
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    name: Regex,
    quantity: Regex,
    price: Regex,
}

impl FieldPatterns {
    /// Compile the configured patterns
    pub fn compile(settings: &FieldSettings) -> Result<Self> {
        Ok(Self {
            name: compile_pattern("name", &settings.name_pattern)?,
            quantity: compile_pattern("quantity", &settings.quantity_pattern)?,
            price: compile_pattern("price", &settings.price_pattern)?,
        })
    }
}

/// Wrap the pattern so it must span the whole line
fn compile_pattern(field: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$"))
        .map_err(|source| ReaderError::InvalidPattern { field, source })
}

/// Number of lines in each field that matched its pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    pub valid_names: usize,
    pub valid_quantities: usize,
    pub valid_prices: usize,
}

impl FieldValidation {
    /// Count matching lines in every field
    pub fn check(fields: &ReceiptFields, patterns: &FieldPatterns) -> Self {
        let validation = Self {
            valid_names: count_matches(fields.names(), &patterns.name),
            valid_quantities: count_matches(fields.quantities(), &patterns.quantity),
            valid_prices: count_matches(fields.prices(), &patterns.price),
        };

        info!(
            "Valid lines - name: {}, quantity: {}, price: {}",
            validation.valid_names, validation.valid_quantities, validation.valid_prices
        );

        validation
    }
}

fn count_matches<'a>(lines: impl Iterator<Item = &'a str>, pattern: &Regex) -> usize {
    lines.filter(|line| pattern.is_match(line)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, quantity: &str, price: &str) -> ReceiptFields {
        ReceiptFields {
            name: name.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }

    fn default_patterns() -> FieldPatterns {
        FieldPatterns::compile(&FieldSettings::default()).unwrap()
    }

    #[test]
    fn test_default_patterns_accept_clean_lines() {
        let result = FieldValidation::check(
            &fields("Kopi Susu\nRoti 2", "1\n12", "Rp18000\nR5000"),
            &default_patterns(),
        );

        assert_eq!(
            result,
            FieldValidation {
                valid_names: 2,
                valid_quantities: 2,
                valid_prices: 2,
            }
        );
    }

    #[test]
    fn test_default_patterns_reject_noise() {
        let result = FieldValidation::check(
            &fields("Kopi-Susu\n Teh", "1x\n3", "18000\nRp18.000\nRp"),
            &default_patterns(),
        );

        assert_eq!(result.valid_names, 0);
        assert_eq!(result.valid_quantities, 1);
        assert_eq!(result.valid_prices, 0);
    }

    #[test]
    fn test_empty_line_never_matches() {
        let result = FieldValidation::check(&fields("", "", ""), &default_patterns());
        assert_eq!(result, FieldValidation::default());
    }

    #[test]
    fn test_unanchored_pattern_matches_whole_line() {
        let settings = FieldSettings {
            price_pattern: "[0-9]+".to_string(),
            ..Default::default()
        };
        let patterns = FieldPatterns::compile(&settings).unwrap();

        let result = FieldValidation::check(&fields("a", "1", "Rp100\n100"), &patterns);
        assert_eq!(result.valid_prices, 1);
    }

    #[test]
    fn test_alternation_prefers_whole_line() {
        let settings = FieldSettings {
            quantity_pattern: "[0-9]+|[0-9]+ pcs".to_string(),
            ..Default::default()
        };
        let patterns = FieldPatterns::compile(&settings).unwrap();

        let result = FieldValidation::check(&fields("Teh", "2 pcs\n3\n4 box", "Rp1"), &patterns);
        assert_eq!(result.valid_quantities, 2);
    }

    #[test]
    fn test_invalid_pattern() {
        let settings = FieldSettings {
            quantity_pattern: "[0-9".to_string(),
            ..Default::default()
        };

        let err = FieldPatterns::compile(&settings).unwrap_err();
        assert!(matches!(err, ReaderError::InvalidPattern { field: "quantity", .. }));
    }
}
