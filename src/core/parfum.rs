//! Parfum - Core data structure
//!
//! A parfum is one record in the catalog document.
//!
//! # Key Properties
//! - **id**: decimal numeral as a string, unique in the catalog
//! - **notes**: top / middle / base layers, each an ordered list
//! - **gender**: Men, Women or Unisex (Unisex matches every gender filter)
//!
//! Unknown keys found in the file are kept in `extra` and written back untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Target gender of a parfum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    Unisex,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Men, Gender::Women, Gender::Unisex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Unisex => "Unisex",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            "unisex" => Ok(Gender::Unisex),
            _ => Err(Error::Validation(format!(
                "unknown gender '{}' (expected Men, Women or Unisex)",
                s
            ))),
        }
    }
}

/// Price bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRange {
    Low,
    Medium,
    MediumHigh,
    High,
    Luxury,
}

impl PriceRange {
    pub const ALL: [PriceRange; 5] = [
        PriceRange::Low,
        PriceRange::Medium,
        PriceRange::MediumHigh,
        PriceRange::High,
        PriceRange::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Low => "low",
            PriceRange::Medium => "medium",
            PriceRange::MediumHigh => "medium-high",
            PriceRange::High => "high",
            PriceRange::Luxury => "luxury",
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriceRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PriceRange::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| Error::Validation(format!("unknown price range '{}'", s)))
    }
}

/// How far the scent projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sillage {
    Light,
    Moderate,
    ModerateHeavy,
    Heavy,
}

impl Sillage {
    pub const ALL: [Sillage; 4] = [
        Sillage::Light,
        Sillage::Moderate,
        Sillage::ModerateHeavy,
        Sillage::Heavy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sillage::Light => "light",
            Sillage::Moderate => "moderate",
            Sillage::ModerateHeavy => "moderate-heavy",
            Sillage::Heavy => "heavy",
        }
    }
}

impl std::fmt::Display for Sillage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sillage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Sillage::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| Error::Validation(format!("unknown sillage '{}'", s)))
    }
}

/// Fragrance pyramid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notes {
    pub top: Vec<String>,
    pub middle: Vec<String>,
    pub base: Vec<String>,
}

impl Notes {
    /// Split comma-separated input into trimmed, non-empty notes
    pub fn parse_list(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Field values of a parfum that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewParfum {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub gender: Gender,
    pub notes: Notes,
    pub description: String,
    pub price_range: PriceRange,
    pub longevity: String,
    pub sillage: Sillage,
    pub season: String,
    pub occasion: String,
    pub year_released: i32,
}

/// A catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parfum {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub gender: Gender,
    pub notes: Notes,
    pub description: String,
    pub price_range: PriceRange,
    pub longevity: String,
    pub sillage: Sillage,
    pub season: String,
    pub occasion: String,
    pub year_released: i32,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Parfum {
    pub fn from_new(id: impl Into<String>, fields: NewParfum) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            brand: fields.brand,
            category: fields.category,
            gender: fields.gender,
            notes: fields.notes,
            description: fields.description,
            price_range: fields.price_range,
            longevity: fields.longevity,
            sillage: fields.sillage,
            season: fields.season,
            occasion: fields.occasion,
            year_released: fields.year_released,
            extra: BTreeMap::new(),
        }
    }

    /// The id as a decimal numeral, if it is one
    pub fn numeric_id(&self) -> Option<NumericId<'_>> {
        NumericId::parse(&self.id)
    }

    /// Case-insensitive substring match on name, brand, category, description
    pub fn matches(&self, needle_lower: &str) -> bool {
        [&self.name, &self.brand, &self.category, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }

    /// Shallow merge: every field set in `patch` replaces the current value
    pub fn apply(&mut self, patch: ParfumPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.brand {
            self.brand = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.gender {
            self.gender = v;
        }
        if let Some(v) = patch.notes {
            self.notes = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.price_range {
            self.price_range = v;
        }
        if let Some(v) = patch.longevity {
            self.longevity = v;
        }
        if let Some(v) = patch.sillage {
            self.sillage = v;
        }
        if let Some(v) = patch.season {
            self.season = v;
        }
        if let Some(v) = patch.occasion {
            self.occasion = v;
        }
        if let Some(v) = patch.year_released {
            self.year_released = v;
        }
    }
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParfumPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longevity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sillage: Option<Sillage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_released: Option<i32>,
}

impl ParfumPatch {
    pub fn is_empty(&self) -> bool {
        *self == ParfumPatch::default()
    }
}

/// The whole catalog file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub parfums: Vec<Parfum>,

    /// Reference list, informational only
    #[serde(default)]
    pub brands: Vec<String>,

    /// Reference list, informational only
    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A decimal id of any length, leading zeros stripped.
///
/// Ordered by magnitude, so ids never overflow a fixed-width integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericId<'a>(&'a str);

impl<'a> NumericId<'a> {
    pub fn parse(raw: &'a str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match raw.trim_start_matches('0') {
            "" => Some(Self("0")),
            digits => Some(Self(digits)),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// The numeral one greater, carrying through trailing nines
    pub fn succ(&self) -> String {
        let mut digits = self.0.as_bytes().to_vec();
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }

        let mut out = String::with_capacity(digits.len() + 1);
        if carry {
            out.push('1');
        }
        out.extend(digits.into_iter().map(char::from));
        out
    }
}

impl Ord for NumericId<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for NumericId<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Aggregate numbers for the stats view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_parfums: usize,
    pub total_brands: usize,
    pub total_categories: usize,
    pub by_gender: BTreeMap<String, usize>,
    pub by_price_range: BTreeMap<String, usize>,
}

impl CatalogDocument {
    pub fn len(&self) -> usize {
        self.parfums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parfums.is_empty()
    }

    pub fn search(&self, query: &str) -> Vec<Parfum> {
        let needle = query.to_lowercase();
        self.parfums
            .iter()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Parfum> {
        self.parfums.iter().find(|p| p.id == id)
    }

    /// Exact name lookup, used to resolve comparison targets
    pub fn get_by_name(&self, name: &str) -> Option<&Parfum> {
        self.parfums.iter().find(|p| p.name == name)
    }

    pub fn get_by_brand(&self, brand: &str) -> Vec<Parfum> {
        let wanted = brand.to_lowercase();
        self.parfums
            .iter()
            .filter(|p| p.brand.to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    pub fn get_by_category(&self, category: &str) -> Vec<Parfum> {
        let wanted = category.to_lowercase();
        self.parfums
            .iter()
            .filter(|p| p.category.to_lowercase().contains(&wanted))
            .cloned()
            .collect()
    }

    /// Unisex records satisfy every gender filter
    pub fn get_by_gender(&self, gender: &str) -> Vec<Parfum> {
        let wanted = gender.to_lowercase();
        self.parfums
            .iter()
            .filter(|p| p.gender.as_str().to_lowercase() == wanted || p.gender == Gender::Unisex)
            .cloned()
            .collect()
    }

    /// Next id: one past the largest numeric id, `"1"` for an empty catalog.
    /// Ids that are not decimal numerals do not take part.
    pub fn next_id(&self) -> String {
        let max = self.parfums.iter().filter_map(Parfum::numeric_id).max();
        match max {
            Some(n) => n.succ(),
            None => "1".to_string(),
        }
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total_parfums: self.parfums.len(),
            ..Default::default()
        };

        let mut brands = std::collections::BTreeSet::new();
        let mut categories = std::collections::BTreeSet::new();
        for p in &self.parfums {
            brands.insert(p.brand.as_str());
            categories.insert(p.category.as_str());
            *stats.by_gender.entry(p.gender.to_string()).or_insert(0) += 1;
            *stats
                .by_price_range
                .entry(p.price_range.to_string())
                .or_insert(0) += 1;
        }
        stats.total_brands = brands.len();
        stats.total_categories = categories.len();

        stats
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn new_parfum(name: &str, brand: &str, gender: Gender) -> NewParfum {
        NewParfum {
            name: name.to_string(),
            brand: brand.to_string(),
            category: "Floral Oriental".to_string(),
            gender,
            notes: Notes {
                top: vec!["Bergamot".to_string(), "Pink Pepper".to_string()],
                middle: vec!["Rose".to_string()],
                base: vec!["Vanilla".to_string(), "Musk".to_string()],
            },
            description: format!("{} by {}, a long-lasting signature scent", name, brand),
            price_range: PriceRange::High,
            longevity: "8-10 hours".to_string(),
            sillage: Sillage::Moderate,
            season: "all".to_string(),
            occasion: "casual".to_string(),
            year_released: 2015,
        }
    }

    pub fn document() -> CatalogDocument {
        CatalogDocument {
            parfums: vec![
                Parfum::from_new("1", new_parfum("Coco Mademoiselle", "Chanel", Gender::Women)),
                Parfum::from_new("2", new_parfum("Sauvage", "Dior", Gender::Men)),
                Parfum::from_new("3", new_parfum("Santal 33", "Le Labo", Gender::Unisex)),
            ],
            brands: vec!["Chanel".into(), "Dior".into(), "Le Labo".into()],
            categories: vec!["Floral Oriental".into()],
            extra: BTreeMap::new(),
        }
    }
}
