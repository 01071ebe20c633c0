mod document;
mod error;
pub mod locale;

use regex::RegexBuilder;
use serde::Serialize;

pub use document::{Document, Section};
pub use error::{Error, Result};
pub use locale::Language;

use locale::Role;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub title: String,
    pub message: String,
    pub passed: bool,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDensity {
    pub keyword: String,
    pub occurrences: usize,
    /// Occurrences per hundred words of combined body text.
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub score: u32,
    pub checks: Vec<RuleOutcome>,
    pub suggestions: Vec<String>,
    pub word_count: usize,
    pub reading_minutes: usize,
    pub keyword_densities: Vec<KeywordDensity>,
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

struct Thresholds {
    min_words: usize,
    ideal_words: usize,
    meta_min_chars: usize,
    meta_max_chars: usize,
    min_keywords: usize,
    density_min_pct: f64,
    density_max_pct: f64,
    min_tags: usize,
    words_per_minute: usize,
    reading_min_minutes: usize,
    reading_max_minutes: usize,
}

static LIMITS: Thresholds = Thresholds {
    min_words: 300,
    ideal_words: 1000,
    meta_min_chars: 120,
    meta_max_chars: 160,
    min_keywords: 3,
    density_min_pct: 0.5,
    density_max_pct: 2.5,
    min_tags: 3,
    words_per_minute: 200,
    reading_min_minutes: 3,
    reading_max_minutes: 15,
};

// ---------------------------------------------------------------------------
// Shared analysis context
// ---------------------------------------------------------------------------

struct Context<'a> {
    document: &'a Document,
    language: Language,
    word_count: usize,
    reading_minutes: usize,
    densities: Vec<KeywordDensity>,
}

impl<'a> Context<'a> {
    fn new(document: &'a Document, language: Language) -> Self {
        let combined = document.combined_text();
        let word_count = locale::count_words(&combined);
        let reading_minutes = word_count.div_ceil(LIMITS.words_per_minute);

        // An empty body has no meaningful density.
        let densities = if word_count == 0 {
            Vec::new()
        } else {
            document
                .keywords
                .iter()
                .map(|keyword| {
                    let occurrences = count_occurrences(&combined, keyword);
                    KeywordDensity {
                        keyword: keyword.clone(),
                        occurrences,
                        density: occurrences as f64 * 100.0 / word_count as f64,
                    }
                })
                .collect()
        };

        Self {
            document,
            language,
            word_count,
            reading_minutes,
            densities,
        }
    }

    fn meta_chars(&self) -> usize {
        self.document.meta_description.chars().count()
    }

    fn offending_densities(&self) -> impl Iterator<Item = &KeywordDensity> {
        self.densities
            .iter()
            .filter(|d| !within(d.density, LIMITS.density_min_pct, LIMITS.density_max_pct))
    }

    fn missing_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|&role| {
                !self
                    .document
                    .sections
                    .iter()
                    .any(|s| locale::title_has_role(&s.title, role, self.language))
            })
            .collect()
    }
}

fn count_occurrences(haystack: &str, keyword: &str) -> usize {
    if keyword.trim().is_empty() {
        return 0;
    }
    match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(haystack).count(),
        // Only reachable when the keyword exceeds the regex size limit.
        Err(_) => haystack
            .to_lowercase()
            .matches(&keyword.to_lowercase())
            .count(),
    }
}

fn within<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

// ---------------------------------------------------------------------------
// Rule registry
// ---------------------------------------------------------------------------

struct Evaluation {
    passed: bool,
    message: String,
}

struct Rule {
    title: &'static str,
    weight: u32,
    evaluate: fn(&Context) -> Evaluation,
    suggest: fn(&Context) -> Vec<String>,
}

static RULES: [Rule; 7] = [
    Rule {
        title: "Content Length",
        weight: 20,
        evaluate: check_content_length,
        suggest: suggest_content_length,
    },
    Rule {
        title: "Meta Description",
        weight: 15,
        evaluate: check_meta_description,
        suggest: suggest_meta_description,
    },
    Rule {
        title: "Keywords",
        weight: 15,
        evaluate: check_keyword_presence,
        suggest: suggest_keyword_presence,
    },
    Rule {
        title: "Keyword Density",
        weight: 15,
        evaluate: check_keyword_density,
        suggest: suggest_keyword_density,
    },
    Rule {
        title: "Article Structure",
        weight: 15,
        evaluate: check_structure,
        suggest: suggest_structure,
    },
    Rule {
        title: "SEO Tags",
        weight: 10,
        evaluate: check_tags,
        suggest: suggest_tags,
    },
    Rule {
        title: "Reading Time",
        weight: 10,
        evaluate: check_reading_time,
        suggest: suggest_reading_time,
    },
];

// ---------------------------------------------------------------------------
// Rule implementations
// ---------------------------------------------------------------------------

fn check_content_length(ctx: &Context) -> Evaluation {
    Evaluation {
        passed: ctx.word_count >= LIMITS.min_words,
        message: format!(
            "{} words (minimum: {}, ideal: {})",
            ctx.word_count, LIMITS.min_words, LIMITS.ideal_words
        ),
    }
}

fn suggest_content_length(ctx: &Context) -> Vec<String> {
    let shortfall = LIMITS.min_words.saturating_sub(ctx.word_count);
    if shortfall == 0 {
        return vec![];
    }
    vec![format!(
        "Add at least {shortfall} more words to meet minimum length."
    )]
}

fn check_meta_description(ctx: &Context) -> Evaluation {
    let chars = ctx.meta_chars();
    Evaluation {
        passed: within(chars, LIMITS.meta_min_chars, LIMITS.meta_max_chars),
        message: format!(
            "{chars} characters (ideal: {}-{})",
            LIMITS.meta_min_chars, LIMITS.meta_max_chars
        ),
    }
}

fn suggest_meta_description(ctx: &Context) -> Vec<String> {
    if ctx.meta_chars() < LIMITS.meta_min_chars {
        vec![format!(
            "Meta description is too short. Aim for {}-{} characters.",
            LIMITS.meta_min_chars, LIMITS.meta_max_chars
        )]
    } else {
        vec![format!(
            "Meta description is too long. Keep it under {} characters.",
            LIMITS.meta_max_chars
        )]
    }
}

fn check_keyword_presence(ctx: &Context) -> Evaluation {
    let count = ctx.document.keywords.len();
    Evaluation {
        passed: count >= LIMITS.min_keywords,
        message: format!("{count} keywords (minimum: {})", LIMITS.min_keywords),
    }
}

fn suggest_keyword_presence(_ctx: &Context) -> Vec<String> {
    vec![format!(
        "Add at least {} relevant keywords.",
        LIMITS.min_keywords
    )]
}

fn check_keyword_density(ctx: &Context) -> Evaluation {
    let passed = ctx.offending_densities().next().is_none();
    let message = if passed {
        "Keywords are well distributed"
    } else {
        "Some keywords need adjustment"
    };
    Evaluation {
        passed,
        message: message.to_string(),
    }
}

fn suggest_keyword_density(ctx: &Context) -> Vec<String> {
    ctx.offending_densities()
        .map(|d| {
            format!(
                "Keyword \"{}\" density is {:.2}%. Aim for {}-{}%.",
                d.keyword, d.density, LIMITS.density_min_pct, LIMITS.density_max_pct
            )
        })
        .collect()
}

fn check_structure(ctx: &Context) -> Evaluation {
    let missing = ctx.missing_roles();
    if missing.is_empty() {
        return Evaluation {
            passed: true,
            message: "Has intro, body, and conclusion".to_string(),
        };
    }
    let labels: Vec<&str> = missing.iter().map(|r| r.label()).collect();
    Evaluation {
        passed: false,
        message: format!("Missing key sections: {}", labels.join(", ")),
    }
}

fn suggest_structure(_ctx: &Context) -> Vec<String> {
    vec!["Ensure your article has introduction, body, and conclusion sections.".to_string()]
}

fn check_tags(ctx: &Context) -> Evaluation {
    let count = ctx.document.seo_tags.len();
    Evaluation {
        passed: count >= LIMITS.min_tags,
        message: format!("{count} tags (minimum: {})", LIMITS.min_tags),
    }
}

fn suggest_tags(_ctx: &Context) -> Vec<String> {
    vec![format!("Add at least {} SEO tags.", LIMITS.min_tags)]
}

fn check_reading_time(ctx: &Context) -> Evaluation {
    Evaluation {
        passed: within(
            ctx.reading_minutes,
            LIMITS.reading_min_minutes,
            LIMITS.reading_max_minutes,
        ),
        message: format!(
            "~{} minutes (ideal: {}-{} minutes)",
            ctx.reading_minutes, LIMITS.reading_min_minutes, LIMITS.reading_max_minutes
        ),
    }
}

fn suggest_reading_time(ctx: &Context) -> Vec<String> {
    if ctx.reading_minutes < LIMITS.reading_min_minutes {
        vec!["Content is too short. Add more valuable information.".to_string()]
    } else {
        vec!["Content is very long. Consider breaking it into multiple articles.".to_string()]
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

// Weighted pass ratio scaled to 0-100, rounded half up.
fn compute_score(checks: &[RuleOutcome]) -> u32 {
    let total: u32 = checks.iter().map(|c| c.weight).sum();
    assert!(total > 0, "rule set carries no weight");
    let earned: u32 = checks.iter().filter(|c| c.passed).map(|c| c.weight).sum();
    (200 * earned + total) / (2 * total)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// `language` only selects which structural vocabularies the Article
/// Structure rule recognizes.
#[tracing::instrument(skip_all, fields(sections = document.sections.len(), language = %language))]
pub fn analyze(document: &Document, language: Language) -> AnalysisReport {
    let ctx = Context::new(document, language);

    let mut checks = Vec::with_capacity(RULES.len());
    let mut suggestions = Vec::new();

    for rule in &RULES {
        let eval = (rule.evaluate)(&ctx);
        tracing::debug!(
            rule = rule.title,
            passed = eval.passed,
            weight = rule.weight,
            "rule evaluated"
        );
        if !eval.passed {
            suggestions.extend((rule.suggest)(&ctx));
        }
        checks.push(RuleOutcome {
            title: rule.title.to_string(),
            message: eval.message,
            passed: eval.passed,
            weight: rule.weight,
        });
    }

    let score = compute_score(&checks);
    tracing::debug!(score, word_count = ctx.word_count, "analysis complete");

    AnalysisReport {
        score,
        checks,
        suggestions,
        word_count: ctx.word_count,
        reading_minutes: ctx.reading_minutes,
        keyword_densities: ctx.densities,
    }
}

pub fn analyze_json(input: &str, language: Language) -> Result<AnalysisReport> {
    let document = Document::from_json(input)?;
    Ok(analyze(&document, language))
}
