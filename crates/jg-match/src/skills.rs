use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Skill/category alias to canonical-token mapping (O(1) lookup). Canonical
/// tokens are single alphanumeric words so they survive text tokenization
/// unchanged.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // JavaScript ecosystem
        (
            "javascript",
            &["js", "javascript", "java script", "ecmascript", "es6", "es2015"],
        ),
        ("typescript", &["ts", "typescript", "type script"]),
        ("nodejs", &["node.js", "node js", "nodejs", "node"]),
        // Frontend frameworks
        (
            "react",
            &["reactjs", "react.js", "react js", "react", "react17", "react18"],
        ),
        ("vue", &["vue.js", "vuejs", "vue js", "vue", "vue3"]),
        ("angular", &["angularjs", "angular.js", "angular", "angular2"]),
        ("nextjs", &["next.js", "nextjs", "next js"]),
        // Styling
        ("css", &["css", "css3", "cascading style sheets"]),
        ("sass", &["scss", "sass"]),
        ("tailwind", &["tailwindcss", "tailwind css", "tailwind"]),
        ("html", &["html", "html5"]),
        // Backend frameworks
        (
            "django",
            &["django rest framework", "drf", "django framework", "django"],
        ),
        ("flask", &["flask framework", "python flask", "flask"]),
        ("rails", &["ruby on rails", "ror", "rails"]),
        ("spring", &["spring boot", "springboot", "spring framework", "spring"]),
        (
            "express",
            &["express.js", "expressjs", "express js", "express"],
        ),
        ("laravel", &["laravel framework", "php laravel", "laravel"]),
        ("dotnet", &[".net", "dotnet", "dot net", "asp.net", "aspnet"]),
        // Databases
        ("postgresql", &["postgres", "pg", "postgresql", "postgre sql"]),
        ("mysql", &["my sql", "mysql", "mariadb"]),
        ("mongodb", &["mongo", "mongo db", "mongodb"]),
        ("redis", &["redis cache", "redis"]),
        ("sqlite", &["sqlite3", "sql lite", "sqlite"]),
        ("elasticsearch", &["elastic search", "elasticsearch"]),
        // Cloud platforms
        ("aws", &["amazon web services", "amazon aws", "aws"]),
        ("gcp", &["google cloud platform", "google cloud", "gcp"]),
        ("azure", &["microsoft azure", "ms azure", "azure"]),
        // Programming languages
        ("python", &["python3", "python 3", "py", "python"]),
        ("java", &["java8", "java11", "java17", "openjdk", "java"]),
        ("csharp", &["c#", "c sharp", "csharp"]),
        ("golang", &["go", "golang", "go lang"]),
        ("rust", &["rust lang", "rust language", "rust"]),
        ("php", &["php7", "php8", "php"]),
        ("ruby", &["ruby lang", "ruby"]),
        ("kotlin", &["kotlin jvm", "kotlin"]),
        ("swift", &["ios swift", "swift"]),
        // DevOps and tooling
        ("docker", &["docker container", "docker"]),
        ("kubernetes", &["k8s", "kube", "kubernetes"]),
        ("git", &["git scm", "github", "gitlab", "git"]),
        ("terraform", &["infrastructure as code", "iac", "terraform"]),
        // APIs and data
        ("graphql", &["graph ql", "graphql"]),
        ("rest", &["rest api", "restful", "rest"]),
        ("machinelearning", &["machine learning", "ml", "machinelearning"]),
        ("datascience", &["data science", "datascience"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Separator-free keys for the same table, covering minor punctuation and
/// spacing differences.
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        let compact = compact_key(alias);
        map.entry(compact).or_insert(*canonical);
    }

    map
});

fn nfkc_lower_trim(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

fn compact_key(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/' | ','))
        .collect()
}

fn match_canonical_token(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(token) {
        return Some((*canonical).to_string());
    }

    let compact = compact_key(token);
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact) {
        return Some((*canonical).to_string());
    }

    fuzzy_match_canonical(&compact)
}

fn split_segments(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split(|c: char| matches!(c, ' ' | '/' | ',' | ';' | '|' | '+'))
        .map(nfkc_lower_trim)
        .filter(|s| !s.is_empty())
}

fn fuzzy_match_canonical(compact: &str) -> Option<String> {
    if compact.len() < 4 {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    for (alias, canonical) in COMPACT_ALIAS_TO_CANONICAL.iter() {
        // Short canonical tokens (go, php, java, rust) never fuzzy-match:
        // exact and alias lookups above are the only way in for those.
        if alias.len() < 5 || compact.len() < 5 || canonical.len() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(compact, alias);
        if distance == 0 {
            return Some((*canonical).to_string());
        }

        let len = compact.len().max(alias.len());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        match best {
            None => best = Some((*canonical, distance)),
            Some((_, best_dist)) if distance < best_dist => best = Some((*canonical, distance)),
            _ => {}
        }
    }

    best.map(|(canonical, _)| canonical.to_string())
}

/// Map one skill or category entry to its canonical token. Unknown entries
/// come back NFKC-folded, trimmed and lowercased.
pub fn canonicalize(entry: &str) -> String {
    let normalized = nfkc_lower_trim(entry);
    if let Some(canonical) = match_canonical_token(&normalized) {
        return canonical;
    }

    for segment in split_segments(entry) {
        if let Some(canonical) = match_canonical_token(&segment) {
            return canonical;
        }
    }

    normalized
}

/// Canonical set of a skill/category list, for intersection checks.
pub fn canonical_set(entries: &[String]) -> HashSet<String> {
    entries
        .iter()
        .filter(|e| !e.trim().is_empty())
        .map(|e| canonicalize(e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_aliases_and_case_to_canonical() {
        assert_eq!(canonicalize("JavaScript"), "javascript");
        assert_eq!(canonicalize("js"), "javascript");
        assert_eq!(canonicalize("K8s"), "kubernetes");
        assert_eq!(canonicalize("C#"), "csharp");
        assert_eq!(canonicalize("Postgres"), "postgresql");
    }

    #[test]
    fn strips_separators_before_lookup() {
        assert_eq!(canonicalize("React JS"), "react");
        assert_eq!(canonicalize("node-js"), "nodejs");
        assert_eq!(canonicalize("Ruby on Rails"), "rails");
    }

    #[test]
    fn falls_back_to_first_recognized_segment() {
        assert_eq!(canonicalize("python/django"), "python");
        assert_eq!(canonicalize("design, react"), "react");
    }

    #[test]
    fn tolerates_small_typos_for_known_aliases() {
        assert_eq!(canonicalize("javascirpt"), "javascript");
        assert_eq!(canonicalize("kuberntes"), "kubernetes");
        assert_eq!(canonicalize("postgersql"), "postgresql");
    }

    #[test]
    fn does_not_fuzz_short_tokens() {
        assert_eq!(canonicalize("javaa"), "javaa");
        assert_eq!(canonicalize("rustt"), "rustt");
        assert_eq!(canonicalize("ab"), "ab");
    }

    #[test]
    fn unknown_entries_lowercase_and_trim() {
        assert_eq!(canonicalize("  Customer Support "), "customer support");
        assert_eq!(canonicalize("MyInHouseTool"), "myinhousetool");
    }

    #[test]
    fn canonical_set_unifies_spellings() {
        let posting = canonical_set(&["React.js".to_string(), "K8s".to_string()]);
        let profile = canonical_set(&["react".to_string(), "kubernetes".to_string()]);
        assert_eq!(posting, profile);
    }

    #[test]
    fn canonical_set_skips_blank_entries() {
        let set = canonical_set(&["   ".to_string(), "python".to_string()]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("python"));
    }
}
