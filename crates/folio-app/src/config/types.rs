//! Configuration types for Folio
//!
//! Defines:
//! - `Settings` - Controller settings (`[settings]` table of `site.toml`)
//! - Related sub-types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Controller settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub reveal: RevealSettings,

    #[serde(default)]
    pub messages: MessageSettings,
}

/// Fixed cosmetic delays, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingSettings {
    /// How long the `theme-transition` class stays on after a toggle
    #[serde(default = "default_theme_transition_ms")]
    pub theme_transition_ms: u64,

    /// Delay before a freshly inserted notification slides in
    #[serde(default = "default_slide_in_ms")]
    pub notification_slide_in_ms: u64,

    /// Time a notification stays visible before auto-dismissal
    #[serde(default = "default_notification_ms")]
    pub notification_duration_ms: u64,

    /// Slide-out duration before a dismissed notification is detached
    #[serde(default = "default_hide_ms")]
    pub notification_hide_ms: u64,

    /// Caret visibility flip interval
    #[serde(default = "default_caret_blink_ms")]
    pub caret_blink_ms: u64,

    /// Per-card animation delay step of the section reveal
    #[serde(default = "default_stagger_ms")]
    pub reveal_stagger_ms: u64,

    /// Simulated contact delivery time
    #[serde(default = "default_contact_delay_ms")]
    pub contact_delay_ms: u64,
}

impl TimingSettings {
    pub fn theme_transition(&self) -> Duration {
        Duration::from_millis(self.theme_transition_ms)
    }

    pub fn notification_slide_in(&self) -> Duration {
        Duration::from_millis(self.notification_slide_in_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    pub fn notification_hide(&self) -> Duration {
        Duration::from_millis(self.notification_hide_ms)
    }

    pub fn caret_blink(&self) -> Duration {
        Duration::from_millis(self.caret_blink_ms)
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            theme_transition_ms: default_theme_transition_ms(),
            notification_slide_in_ms: default_slide_in_ms(),
            notification_duration_ms: default_notification_ms(),
            notification_hide_ms: default_hide_ms(),
            caret_blink_ms: default_caret_blink_ms(),
            reveal_stagger_ms: default_stagger_ms(),
            contact_delay_ms: default_contact_delay_ms(),
        }
    }
}

fn default_theme_transition_ms() -> u64 {
    300
}

fn default_slide_in_ms() -> u64 {
    100
}

fn default_notification_ms() -> u64 {
    5000
}

fn default_hide_ms() -> u64 {
    300
}

fn default_caret_blink_ms() -> u64 {
    500
}

fn default_stagger_ms() -> u64 {
    100
}

fn default_contact_delay_ms() -> u64 {
    2000
}

/// Responsive layout settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LayoutSettings {
    /// Widest viewport (px) that still counts as mobile
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,

    /// Background translation per scrolled pixel
    #[serde(default = "default_parallax_factor")]
    pub parallax_factor: f64,
}

impl LayoutSettings {
    pub fn is_narrow(&self, viewport_width: u32) -> bool {
        viewport_width <= self.mobile_breakpoint
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            parallax_factor: default_parallax_factor(),
        }
    }
}

fn default_mobile_breakpoint() -> u32 {
    1024
}

fn default_parallax_factor() -> f64 {
    0.1
}

/// Intersection observer options for the reveal animation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RevealSettings {
    /// Visible fraction that counts as "entered"
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Pixels shaved off the bottom of the viewport
    #[serde(default = "default_bottom_margin_px")]
    pub bottom_margin_px: u32,
}

impl RevealSettings {
    /// `rootMargin` string for the observer.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            bottom_margin_px: default_bottom_margin_px(),
        }
    }
}

fn default_threshold() -> f64 {
    0.1
}

fn default_bottom_margin_px() -> u32 {
    50
}

/// User-facing copy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageSettings {
    #[serde(default = "default_contact_success")]
    pub contact_success: String,

    #[serde(default = "default_contact_failure")]
    pub contact_failure: String,

    #[serde(default = "default_newsletter_success")]
    pub newsletter_success: String,

    #[serde(default = "default_newsletter_invalid")]
    pub newsletter_invalid: String,

    /// Submit button label while a contact message is being sent
    #[serde(default = "default_sending_label")]
    pub sending_label: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            contact_success: default_contact_success(),
            contact_failure: default_contact_failure(),
            newsletter_success: default_newsletter_success(),
            newsletter_invalid: default_newsletter_invalid(),
            sending_label: default_sending_label(),
        }
    }
}

fn default_contact_success() -> String {
    "Thank you for your message! I'll get back to you soon.".to_string()
}

fn default_contact_failure() -> String {
    "Sorry, your message could not be sent. Please try again later.".to_string()
}

fn default_newsletter_success() -> String {
    "Thank you for subscribing to the newsletter!".to_string()
}

fn default_newsletter_invalid() -> String {
    "Please enter a valid email address.".to_string()
}

fn default_sending_label() -> String {
    "Sending...".to_string()
}
