//! Giving: a fundraising progress bar and payment links.
//!
//! DESIGN
//! ======
//! Handles are entered by the ministry and rendered into public links.
//! Every link is built by percent-encoding the handle into a fixed URL
//! shape; nothing here talks to a payment provider.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::StorageKey;
use crate::{WidgetError, encode_component};

pub const STEP: u64 = 25;
pub const DEFAULT_GOAL: u64 = 2000;
pub const PAYPAL_FALLBACK: &str = "https://paypal.me/";
const QR_BASE: &str = "https://api.qrserver.com/v1/create-qr-code/?size=180x180&data=";

pub const RAISED: StorageKey<u64> = StorageKey::new("raised", u64::default);
pub const GOAL: StorageKey<u64> = StorageKey::new("goal", default_goal);
pub const PAY_METHOD: StorageKey<PayMethod> = StorageKey::new("pay.method", PayMethod::default);
pub const PAY_HANDLES: StorageKey<PayHandles> = StorageKey::new("pay.handles", PayHandles::default);

fn default_goal() -> u64 {
    DEFAULT_GOAL
}

// =============================================================================
// PROGRESS
// =============================================================================

/// Whole percent of `goal` raised, capped at 100. A zero goal counts as 1.
#[must_use]
pub fn progress_percent(raised: u64, goal: u64) -> u8 {
    let goal = goal.max(1);
    let pct = (u128::from(raised) * 100 + u128::from(goal) / 2) / u128::from(goal);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

/// Raise or lower the running total by one [`STEP`], never below zero.
#[must_use]
pub fn adjust(raised: u64, up: bool) -> u64 {
    if up { raised.saturating_add(STEP) } else { raised.saturating_sub(STEP) }
}

/// # Errors
///
/// Returns [`WidgetError::Invalid`] for a goal below 1.
pub fn validate_goal(goal: u64) -> Result<u64, WidgetError> {
    if goal == 0 {
        return Err(WidgetError::Invalid { field: "goal", reason: "must be at least 1".into() });
    }
    Ok(goal)
}

// =============================================================================
// METHODS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayMethod {
    #[default]
    CashApp,
    Venmo,
    PayPal,
    Btc,
    Mail,
}

impl PayMethod {
    pub const ALL: [Self; 5] = [Self::CashApp, Self::Venmo, Self::PayPal, Self::Btc, Self::Mail];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CashApp => "cashapp",
            Self::Venmo => "venmo",
            Self::PayPal => "paypal",
            Self::Btc => "btc",
            Self::Mail => "mail",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CashApp => "Cash App",
            Self::Venmo => "Venmo",
            Self::PayPal => "PayPal",
            Self::Btc => "Bitcoin (BTC)",
            Self::Mail => "Mailing Address",
        }
    }
}

impl fmt::Display for PayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayMethod {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| WidgetError::Invalid { field: "method", reason: format!("`{s}` is not one of cashapp, venmo, paypal, btc, mail") })
    }
}

// =============================================================================
// HANDLES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayHandles {
    /// Without the leading `$`.
    pub cashapp_tag: String,
    /// Without the leading `@`.
    pub venmo_handle: String,
    /// Full PayPal.me or checkout link.
    pub paypal_link: String,
    pub btc_address: String,
    pub mailing_address: String,
    #[serde(rename = "showQR")]
    pub show_qr: bool,
}

impl Default for PayHandles {
    fn default() -> Self {
        Self {
            cashapp_tag: "YourCashtag".into(),
            venmo_handle: "your-venmo".into(),
            paypal_link: "https://paypal.me/yourname".into(),
            btc_address: "bc1qexampleexampleexample".into(),
            mailing_address: "Your Name\n123 Example St\nLaFollette, TN 37766\nUnited States".into(),
            show_qr: true,
        }
    }
}

impl PayHandles {
    /// Set one handle by its CLI name.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Invalid`] for an unknown handle name or a
    /// `show-qr` value that is not a boolean.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), WidgetError> {
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "cashapp" | "cashapp-tag" => value.trim_start_matches('$').clone_into(&mut self.cashapp_tag),
            "venmo" | "venmo-handle" => value.trim_start_matches('@').clone_into(&mut self.venmo_handle),
            "paypal" | "paypal-link" => value.clone_into(&mut self.paypal_link),
            "btc" | "btc-address" => value.clone_into(&mut self.btc_address),
            "mail" | "mailing-address" => value.replace("\\n", "\n").clone_into(&mut self.mailing_address),
            "show-qr" => {
                self.show_qr = value.parse().map_err(|_| WidgetError::Invalid { field: "show-qr", reason: "expected true or false".into() })?;
            }
            other => {
                return Err(WidgetError::Invalid { field: "handle", reason: format!("unknown handle `{other}`") });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn cash_app_url(&self) -> String {
        format!("https://cash.app/${}", encode_component(&self.cashapp_tag))
    }

    #[must_use]
    pub fn cashtag(&self) -> String {
        format!("${}", self.cashapp_tag)
    }

    #[must_use]
    pub fn venmo_url(&self) -> String {
        format!("https://venmo.com/u/{}", encode_component(&self.venmo_handle))
    }

    #[must_use]
    pub fn paypal_url(&self) -> &str {
        match self.paypal_link.trim() {
            "" => PAYPAL_FALLBACK,
            link => link,
        }
    }

    #[must_use]
    pub fn bitcoin_uri(&self) -> String {
        format!("bitcoin:{}", encode_component(&self.btc_address))
    }

    /// The shareable target for `method`: a URL, a URI, or the mailing
    /// address itself.
    #[must_use]
    pub fn target(&self, method: PayMethod) -> String {
        match method {
            PayMethod::CashApp => self.cash_app_url(),
            PayMethod::Venmo => self.venmo_url(),
            PayMethod::PayPal => self.paypal_url().to_owned(),
            PayMethod::Btc => self.bitcoin_uri(),
            PayMethod::Mail => self.mailing_address.clone(),
        }
    }
}

/// Image URL of a QR code encoding `data`.
#[must_use]
pub fn qr_url(data: &str) -> String {
    format!("{QR_BASE}{}", encode_component(data))
}

#[cfg(test)]
#[path = "giving_test.rs"]
mod tests;
