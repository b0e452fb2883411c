use derive_more::{AsRef, Deref, Display, From, Into};
use palette::Srgb;
use palette::rgb::FromHexError;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct CategoryId(String);

crate::impl_string_newtype!(CategoryId);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct CategoryName(String);

crate::impl_string_newtype!(CategoryName);

#[derive(Error, Debug)]
#[error("invalid hex color '{input}': {source}")]
pub struct ColorError {
    input: String,
    source: FromHexError,
}

/// Display color of a slice, written as `#rrggbb` (or the `#rgb` shorthand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Srgb<u8>>()
            .map(Self)
            .map_err(|source| ColorError {
                input: s.to_string(),
                source,
            })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub color: HexColor,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: HexColor) -> Self {
        Self {
            id: CategoryId::new(id),
            name: CategoryName::new(name),
            description: String::new(),
            icon: String::new(),
            color,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Built-in wheel used when no config file provides categories.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|&(id, name, icon, color, description)| {
                Self::new(id, name, color)
                    .with_icon(icon)
                    .with_description(description)
            })
            .collect()
    }
}

const DEFAULT_CATEGORIES: &[(&str, &str, &str, HexColor, &str)] = &[
    (
        "sensory",
        "Sensory Experiences",
        "👂",
        HexColor::new(0x3a, 0x86, 0xff),
        "Noise, light, textures, smells and crowded spaces.",
    ),
    (
        "social",
        "Social Interaction",
        "👥",
        HexColor::new(0x83, 0x38, 0xec),
        "Conversations, group settings and reading other people.",
    ),
    (
        "communication",
        "Communication",
        "💬",
        HexColor::new(0xff, 0x00, 0x6e),
        "Expressing needs and understanding what others mean.",
    ),
    (
        "routine",
        "Routine & Change",
        "🔁",
        HexColor::new(0xfb, 0x56, 0x07),
        "Unexpected changes, transitions and new situations.",
    ),
    (
        "executive",
        "Executive Function",
        "🧩",
        HexColor::new(0xff, 0xbe, 0x0b),
        "Planning, starting tasks and switching between them.",
    ),
    (
        "emotional",
        "Emotional Regulation",
        "🌊",
        HexColor::new(0x06, 0xd6, 0xa0),
        "Recognising and managing strong feelings.",
    ),
    (
        "physical",
        "Physical Wellbeing",
        "🫀",
        HexColor::new(0x11, 0x8a, 0xb2),
        "Sleep, eating, movement and interoception.",
    ),
    (
        "energy",
        "Energy & Rest",
        "🔋",
        HexColor::new(0x07, 0x3b, 0x4c),
        "Recovery time and how quickly energy runs out.",
    ),
];
