// SPDX-License-Identifier: MPL-2.0
//! Typed section records.
//!
//! The content store holds one loosely-typed JSON blob per section key;
//! this module pins each key to a fixed, validated shape so a malformed
//! remote payload is rejected at the boundary instead of trusted blindly.
//! Field names serialize in camelCase to stay compatible with the stored
//! records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which content record to read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Hero,
    About,
    Services,
    Contact,
}

impl SectionKey {
    pub const ALL: [SectionKey; 4] = [
        SectionKey::Hero,
        SectionKey::About,
        SectionKey::Services,
        SectionKey::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::About => "about",
            SectionKey::Services => "services",
            SectionKey::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(SectionKey::Hero),
            "about" => Ok(SectionKey::About),
            "services" => Ok(SectionKey::Services),
            "contact" => Ok(SectionKey::Contact),
            other => Err(format!("unknown section key: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub tagline: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub location: String,
    pub location_tagline: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
    pub notable_events: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    pub weekday: String,
    pub saturday: String,
    pub sunday: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub phone: String,
    pub email: String,
    pub location: String,
    pub business_hours: BusinessHours,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesContent {
    pub title: String,
    pub description: String,
    pub items: Vec<ServiceItem>,
}

/// Closed union of every section record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Hero(HeroContent),
    About(AboutContent),
    Services(ServicesContent),
    Contact(ContactContent),
}

impl SectionContent {
    /// The key this record belongs under.
    pub fn key(&self) -> SectionKey {
        match self {
            SectionContent::Hero(_) => SectionKey::Hero,
            SectionContent::About(_) => SectionKey::About,
            SectionContent::Services(_) => SectionKey::Services,
            SectionContent::Contact(_) => SectionKey::Contact,
        }
    }

    /// Validates a raw store payload against the shape required by `key`.
    pub fn from_value(
        key: SectionKey,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        match key {
            SectionKey::Hero => serde_json::from_value(value).map(SectionContent::Hero),
            SectionKey::About => serde_json::from_value(value).map(SectionContent::About),
            SectionKey::Services => serde_json::from_value(value).map(SectionContent::Services),
            SectionKey::Contact => serde_json::from_value(value).map(SectionContent::Contact),
        }
    }

    /// Serializes the record back into the store's JSON form.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            SectionContent::Hero(c) => serde_json::to_value(c),
            SectionContent::About(c) => serde_json::to_value(c),
            SectionContent::Services(c) => serde_json::to_value(c),
            SectionContent::Contact(c) => serde_json::to_value(c),
        }
    }

    pub fn as_hero(&self) -> Option<&HeroContent> {
        match self {
            SectionContent::Hero(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_about(&self) -> Option<&AboutContent> {
        match self {
            SectionContent::About(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_services(&self) -> Option<&ServicesContent> {
        match self {
            SectionContent::Services(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_contact(&self) -> Option<&ContactContent> {
        match self {
            SectionContent::Contact(c) => Some(c),
            _ => None,
        }
    }
}
