//! Connection quality classification.
//!
//! Browsers expose a best-effort network snapshot (online flag, connection
//! type, effective connection class, round-trip estimate, downlink). The
//! values are reported by the browser and never verified here; this module
//! only gives them types and maps a snapshot to a coarse quality rating.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical connection type as reported by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum ConnectionType {
    Wifi,
    Cellular,
    Ethernet,
    Bluetooth,
    None,
    #[default]
    Unknown,
    /// Any value this crate does not know about, kept verbatim.
    Other(String),
}

impl ConnectionType {
    /// Browser string for this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Wifi => "wifi",
            Self::Cellular => "cellular",
            Self::Ethernet => "ethernet",
            Self::Bluetooth => "bluetooth",
            Self::None => "none",
            Self::Unknown => "unknown",
            Self::Other(s) => s,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::Wifi => "WiFi",
            Self::Cellular => "Cellular",
            Self::Ethernet => "Ethernet",
            Self::Bluetooth => "Bluetooth",
            Self::None => "No connection",
            Self::Unknown => "Unknown",
            Self::Other(s) => s,
        }
    }
}

impl FromStr for ConnectionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "wifi" => Self::Wifi,
            "cellular" => Self::Cellular,
            "ethernet" => Self::Ethernet,
            "bluetooth" => Self::Bluetooth,
            "none" => Self::None,
            "" | "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for ConnectionType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl From<ConnectionType> for String {
    fn from(t: ConnectionType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective connection class (`navigator.connection.effectiveType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum EffectiveType {
    Slow2g,
    TwoG,
    ThreeG,
    FourG,
    #[default]
    Unknown,
}

impl EffectiveType {
    /// Browser string for this class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slow2g => "slow-2g",
            Self::TwoG => "2g",
            Self::ThreeG => "3g",
            Self::FourG => "4g",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Slow2g => "Very slow (2G)",
            Self::TwoG => "Slow (2G)",
            Self::ThreeG => "Medium (3G)",
            Self::FourG => "Fast (4G)",
            Self::Unknown => "Unknown",
        }
    }
}

impl FromStr for EffectiveType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "slow-2g" => Self::Slow2g,
            "2g" => Self::TwoG,
            "3g" => Self::ThreeG,
            "4g" => Self::FourG,
            _ => Self::Unknown,
        })
    }
}

impl From<String> for EffectiveType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl From<EffectiveType> for String {
    fn from(t: EffectiveType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for EffectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single browser-reported connection snapshot.
///
/// Field names follow the browser API when (de)serialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ConnectionInfo {
    pub online: bool,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub connection_type: Option<ConnectionType>,
    pub effective_type: Option<EffectiveType>,
    /// Declared downlink in Mbit/s.
    #[cfg_attr(feature = "serde", serde(rename = "downlink"))]
    pub downlink_mbps: Option<f64>,
    /// Round-trip estimate in milliseconds.
    #[cfg_attr(feature = "serde", serde(rename = "rtt"))]
    pub rtt_ms: Option<u32>,
    pub save_data: bool,
}

impl Default for ConnectionInfo {
    fn default() -> Self {
        Self {
            online: true,
            connection_type: None,
            effective_type: None,
            downlink_mbps: None,
            rtt_ms: None,
            save_data: false,
        }
    }
}

impl ConnectionInfo {
    /// A snapshot for a browser that reports being offline.
    pub fn offline() -> Self {
        Self {
            online: false,
            ..Self::default()
        }
    }

    /// Parse a snapshot from its JSON form.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether any field from the network-information API is present.
    pub fn has_network_details(&self) -> bool {
        self.connection_type.is_some()
            || self.effective_type.is_some()
            || self.downlink_mbps.is_some()
            || self.rtt_ms.is_some()
    }

    /// Classify this snapshot. See [`ConnectionQuality::classify`].
    pub fn quality(&self, api_available: bool) -> ConnectionQuality {
        ConnectionQuality::classify(self, api_available)
    }

    /// Round-trip estimate, treating zero as "not reported".
    fn reported_rtt(&self) -> Option<u32> {
        self.rtt_ms.filter(|&rtt| rtt > 0)
    }
}

/// Coarse connection quality rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConnectionQuality {
    Offline,
    /// Online, but the browser exposes no network information.
    Online,
    Excellent,
    Good,
    Poor,
    Slow,
}

impl ConnectionQuality {
    /// Rate a snapshot.
    ///
    /// Offline wins over everything. Without the network-information API
    /// (`api_available == false`) an online browser is just [`Online`].
    /// Otherwise the effective type or the round-trip estimate picks the
    /// best matching band: 4g or rtt < 100 ms is excellent, 3g or < 300 ms
    /// good, 2g or < 1000 ms poor, anything else slow.
    ///
    /// [`Online`]: ConnectionQuality::Online
    ///
    /// # Examples
    ///
    /// ```
    /// use marklink::netinfo::{ConnectionInfo, ConnectionQuality, EffectiveType};
    ///
    /// let info = ConnectionInfo {
    ///     effective_type: Some(EffectiveType::ThreeG),
    ///     rtt_ms: Some(450),
    ///     ..ConnectionInfo::default()
    /// };
    /// assert_eq!(ConnectionQuality::classify(&info, true), ConnectionQuality::Good);
    /// ```
    pub fn classify(info: &ConnectionInfo, api_available: bool) -> Self {
        if !info.online {
            return Self::Offline;
        }
        if !api_available {
            return Self::Online;
        }

        let effective = info.effective_type;
        let rtt_below = |limit: u32| info.reported_rtt().is_some_and(|rtt| rtt < limit);

        if effective == Some(EffectiveType::FourG) || rtt_below(100) {
            Self::Excellent
        } else if effective == Some(EffectiveType::ThreeG) || rtt_below(300) {
            Self::Good
        } else if effective == Some(EffectiveType::TwoG) || rtt_below(1000) {
            Self::Poor
        } else {
            Self::Slow
        }
    }

    /// Machine-readable status.
    pub fn status(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Online => "online",
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Poor => "poor",
            Self::Slow => "slow",
        }
    }

    /// Human-readable status message.
    pub fn message(self) -> &'static str {
        match self {
            Self::Offline => "No connection",
            Self::Online => "Online",
            Self::Excellent => "Excellent connection",
            Self::Good => "Good connection",
            Self::Poor => "Weak connection",
            Self::Slow => "Slow connection",
        }
    }

    /// CSS color name used to display the rating.
    pub fn color(self) -> &'static str {
        match self {
            Self::Offline | Self::Slow => "red",
            Self::Online | Self::Excellent => "green",
            Self::Good => "yellowgreen",
            Self::Poor => "orange",
        }
    }
}

impl fmt::Display for ConnectionQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status())
    }
}
