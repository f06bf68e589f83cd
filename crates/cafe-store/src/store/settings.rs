//! Cafe settings and display-currency formatting.

use tracing::info;

use cafe_core::currency::{format_price, to_display};
use cafe_core::validation::validate_settings_update;
use cafe_core::{CafeSettingsUpdate, Currency, Money};

use super::CafeStore;
use crate::error::StoreResult;

/// What an accepted settings update changed.
///
/// Views showing prices re-render when `currency_changed` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsChange {
    pub currency_changed: bool,
    pub tax_rate_changed: bool,
}

impl CafeStore {
    /// Validates and merges a partial settings update.
    ///
    /// Nothing is applied when any field is invalid.
    pub fn update_cafe_settings(&mut self, changes: CafeSettingsUpdate) -> StoreResult<SettingsChange> {
        validate_settings_update(&changes)?;

        let before = self.state.cafe_settings.clone();
        changes.apply(&mut self.state.cafe_settings);
        let after = &self.state.cafe_settings;

        let change = SettingsChange {
            currency_changed: before.currency_symbol != after.currency_symbol,
            tax_rate_changed: before.tax_rate != after.tax_rate,
        };

        if change.currency_changed {
            info!(
                from = before.currency_symbol.code(),
                to = after.currency_symbol.code(),
                "Display currency changed"
            );
        }
        info!(cafe = %after.cafe_name, tax_bps = after.tax_rate.bps(), "Cafe settings updated");

        Ok(change)
    }

    /// Current display currency.
    pub fn currency(&self) -> Currency {
        self.state.cafe_settings.currency_symbol
    }

    /// Formats a rupee amount in the display currency ("$8.40").
    pub fn format_price(&self, amount: Money) -> String {
        let settings = &self.state.cafe_settings;
        format_price(amount, settings.currency_symbol, &settings.rates())
    }

    /// A rupee amount converted to the display currency.
    pub fn display_amount(&self, amount: Money) -> f64 {
        let settings = &self.state.cafe_settings;
        to_display(amount, settings.currency_symbol, &settings.rates())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
