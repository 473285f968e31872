//! Curated context
//!
//! Field-reduced views of the catalog, one per consultation task. Only the
//! fields listed on each view ever leave the machine.

use serde::Serialize;

use crate::core::parfum::{CatalogDocument, Gender, Notes, Parfum, PriceRange, Sillage};
use crate::error::{Error, Result};

/// What the recommendation prompt sees of each parfum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub category: &'a str,
    pub gender: Gender,
    pub notes: &'a Notes,
    pub description: &'a str,
    pub price_range: PriceRange,
    pub longevity: &'a str,
    pub sillage: Sillage,
    pub season: &'a str,
    pub occasion: &'a str,
}

impl<'a> From<&'a Parfum> for RecommendationView<'a> {
    fn from(p: &'a Parfum) -> Self {
        Self {
            name: &p.name,
            brand: &p.brand,
            category: &p.category,
            gender: p.gender,
            notes: &p.notes,
            description: &p.description,
            price_range: p.price_range,
            longevity: &p.longevity,
            sillage: p.sillage,
            season: &p.season,
            occasion: &p.occasion,
        }
    }
}

/// Wrapper so the JSON block reads `{"parfums": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationContext<'a> {
    pub parfums: Vec<RecommendationView<'a>>,
}

pub fn recommendation_context(doc: &CatalogDocument) -> RecommendationContext<'_> {
    RecommendationContext {
        parfums: doc.parfums.iter().map(RecommendationView::from).collect(),
    }
}

/// One line per parfum: `name (brand) - category, gender`
pub fn summary_lines(doc: &CatalogDocument) -> Vec<String> {
    doc.parfums
        .iter()
        .map(|p| format!("{} ({}) - {}, {}", p.name, p.brand, p.category, p.gender))
        .collect()
}

/// What the comparison prompt sees of each side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub category: &'a str,
    pub gender: Gender,
    pub notes: &'a Notes,
    pub longevity: &'a str,
    pub sillage: Sillage,
    pub season: &'a str,
    pub occasion: &'a str,
}

impl<'a> From<&'a Parfum> for ComparisonView<'a> {
    fn from(p: &'a Parfum) -> Self {
        Self {
            name: &p.name,
            brand: &p.brand,
            category: &p.category,
            gender: p.gender,
            notes: &p.notes,
            longevity: &p.longevity,
            sillage: p.sillage,
            season: &p.season,
            occasion: &p.occasion,
        }
    }
}

/// Resolve both names by exact match. Fails on the first name that is missing.
pub fn comparison_pair<'a>(
    doc: &'a CatalogDocument,
    first: &str,
    second: &str,
) -> Result<(ComparisonView<'a>, ComparisonView<'a>)> {
    let a = doc
        .get_by_name(first)
        .ok_or_else(|| Error::NotFound(first.to_string()))?;
    let b = doc
        .get_by_name(second)
        .ok_or_else(|| Error::NotFound(second.to_string()))?;

    Ok((ComparisonView::from(a), ComparisonView::from(b)))
}
