//! Prompt rendering
//!
//! Deterministic system/user prompt pairs for each consultation task. The
//! same curated context and request always render the same text.

use std::fmt::Write;

use super::curate::{ComparisonView, RecommendationContext};
use crate::core::parfum::Gender;
use crate::error::{Error, Result};

/// A rendered system + user prompt pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// What the recommendation wizard collects from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceProfile {
    pub gender: Gender,
    pub occasions: Vec<String>,
    pub seasons: Vec<String>,
    pub budget: String,
    pub details: String,
}

impl PreferenceProfile {
    /// Request text handed to [`recommendation`]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Gender: {}", self.gender);
        let _ = writeln!(out, "Occasion: {}", join_or_any(&self.occasions));
        let _ = writeln!(out, "Season: {}", join_or_any(&self.seasons));
        let _ = writeln!(out, "Budget: {}", self.budget);
        let _ = write!(out, "Additional preferences: {}", self.details.trim());
        out
    }
}

fn join_or_any(items: &[String]) -> String {
    if items.is_empty() {
        "any".to_string()
    } else {
        items.join(", ")
    }
}

fn language_line(language: &str) -> String {
    format!(
        "Reply in natural, friendly {} and do not be overly formal.",
        language.trim()
    )
}

pub fn recommendation(
    context: &RecommendationContext<'_>,
    preferences: &str,
    language: &str,
) -> Result<Prompt> {
    let data = serde_json::to_string_pretty(context)
        .map_err(|e| Error::Internal(format!("cannot serialize catalog context: {}", e)))?;

    let mut system = String::new();
    system.push_str(
        "You are an AI Parfum Consultant who gives expert fragrance recommendations.\n",
    );
    system.push_str(
        "You know perfumery, fragrance notes and brands in depth, and you tailor advice to the person asking.\n",
    );
    system.push_str("\nAvailable parfums:\n");
    system.push_str(&data);
    system.push_str("\n\nRecommend the 2-3 parfums from this list that best fit the user's preferences.\n");
    system.push_str("Format each recommendation as:\n");
    system.push_str("1. Parfum name and brand\n");
    system.push_str("2. Why it fits\n");
    system.push_str("3. A short description of its character\n\n");
    system.push_str(&language_line(language));

    let user = format!(
        "My preferences: {}\n\nPlease recommend parfums that suit me and explain why.",
        preferences.trim()
    );

    Ok(Prompt { system, user })
}

pub fn question(summary: &[String], question: &str, language: &str) -> Prompt {
    let mut system = String::new();
    system.push_str("You are an AI Parfum Consultant and an expert in the world of fragrance.\n");
    system.push_str(
        "You answer questions about parfums, fragrance notes, brands, how to wear fragrance and related tips.\n",
    );
    system.push_str("\nParfums available in the catalog:\n");
    for line in summary {
        let _ = writeln!(system, "{}", line);
    }
    system.push_str(
        "\nIf the question is about a specific parfum, use general knowledge of that parfum and its brand.\n",
    );
    system.push_str("Answer informatively and helpfully.\n");
    system.push_str(
        "If the user asks about a parfum that is not in the catalog, give general advice or suggest alternatives from the catalog.\n\n",
    );
    system.push_str(&language_line(language));

    Prompt {
        system,
        user: question.trim().to_string(),
    }
}

fn append_comparison_entry(buf: &mut String, p: &ComparisonView<'_>) {
    let _ = writeln!(buf, "{} ({}):", p.name, p.brand);
    let _ = writeln!(buf, "- Category: {}", p.category);
    let _ = writeln!(buf, "- Gender: {}", p.gender);
    let _ = writeln!(buf, "- Top Notes: {}", p.notes.top.join(", "));
    let _ = writeln!(buf, "- Middle Notes: {}", p.notes.middle.join(", "));
    let _ = writeln!(buf, "- Base Notes: {}", p.notes.base.join(", "));
    let _ = writeln!(buf, "- Longevity: {}", p.longevity);
    let _ = writeln!(buf, "- Sillage: {}", p.sillage);
    let _ = writeln!(buf, "- Season: {}", p.season);
    let _ = writeln!(buf, "- Occasion: {}", p.occasion);
}

pub fn comparison(first: &ComparisonView<'_>, second: &ComparisonView<'_>, language: &str) -> Prompt {
    let mut system = String::new();
    system.push_str("You are an AI Parfum Consultant who specializes in comparing parfums.\n");
    system.push_str("Compare the following two parfums objectively:\n\n");
    append_comparison_entry(&mut system, first);
    system.push('\n');
    append_comparison_entry(&mut system, second);
    system.push_str("\nPresent the comparison in a clear, easy-to-follow format.\n");
    system.push_str(&language_line(language));

    let user = format!(
        "Compare {} vs {}. Explain the main differences and who each one suits best.",
        first.name, second.name
    );

    Prompt { system, user }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consult::curate::{comparison_pair, recommendation_context, summary_lines};
    use crate::core::parfum::fixtures::document;

    #[test]
    fn test_recommendation_embeds_json_block() {
        let doc = document();
        let prompt =
            recommendation(&recommendation_context(&doc), "fresh, citrus", "English").unwrap();

        assert!(prompt.system.contains("\"parfums\": ["));
        assert!(prompt.system.contains("\"name\": \"Sauvage\""));
        assert!(prompt.system.contains("2-3 parfums"));
        assert!(!prompt.system.contains("\"year_released\""));
        assert!(prompt.user.starts_with("My preferences: fresh, citrus"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let doc = document();
        let a = recommendation(&recommendation_context(&doc), "woody", "English").unwrap();
        let b = recommendation(&recommendation_context(&doc), "woody", "English").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_question_uses_summary_lines() {
        let doc = document();
        let prompt = question(&summary_lines(&doc), "  What is sillage?  ", "Indonesian");

        assert!(prompt
            .system
            .contains("Santal 33 (Le Labo) - Floral Oriental, Unisex\n"));
        assert!(!prompt.system.contains("long-lasting signature scent"));
        assert!(prompt.system.contains("not in the catalog"));
        assert!(prompt.system.contains("friendly Indonesian"));
        assert_eq!(prompt.user, "What is sillage?");
    }

    #[test]
    fn test_comparison_lists_notes_inline() {
        let doc = document();
        let (a, b) = comparison_pair(&doc, "Coco Mademoiselle", "Sauvage").unwrap();
        let prompt = comparison(&a, &b, "English");

        assert!(prompt.system.contains("Coco Mademoiselle (Chanel):\n"));
        assert!(prompt.system.contains("- Top Notes: Bergamot, Pink Pepper\n"));
        assert!(prompt.system.contains("- Base Notes: Vanilla, Musk\n"));
        assert!(prompt.system.contains("- Sillage: moderate\n"));
        assert!(!prompt.system.contains('{'));
        assert_eq!(
            prompt.user,
            "Compare Coco Mademoiselle vs Sauvage. Explain the main differences and who each one suits best."
        );
    }

    #[test]
    fn test_preference_profile_render() {
        let profile = PreferenceProfile {
            gender: Gender::Women,
            occasions: vec!["Office".to_string(), "Night".to_string()],
            seasons: vec![],
            budget: "Medium".to_string(),
            details: " vanilla and amber ".to_string(),
        };

        assert_eq!(
            profile.render(),
            "Gender: Women\nOccasion: Office, Night\nSeason: any\nBudget: Medium\nAdditional preferences: vanilla and amber"
        );
    }
}
