//! Lint: every `data-i18n="..."` key in the host document must exist in the
//! translation table, and both languages must carry the same key set.
//!
//! A key missing from the table is not an error at runtime (the element
//! simply keeps its markup text), which makes typos easy to ship. This test
//! scans `index.html` and `assets/translations.json` and flags them.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

fn read(rel: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(rel);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

/// Extract the values of every `data-i18n="..."` attribute, with line numbers.
fn find_i18n_keys(html: &str) -> Vec<(usize, String)> {
    const ATTR: &str = "data-i18n=\"";
    let mut keys = Vec::new();

    for (line_num_0, line) in html.lines().enumerate() {
        let mut rest = line;
        while let Some(start) = rest.find(ATTR) {
            let after = &rest[start + ATTR.len()..];
            let Some(end) = after.find('"') else {
                break;
            };
            keys.push((line_num_0 + 1, after[..end].to_string()));
            rest = &after[end..];
        }
    }

    keys
}

fn table() -> HashMap<String, HashMap<String, String>> {
    serde_json::from_str(&read("assets/translations.json")).expect("translations.json parses")
}

#[test]
fn host_document_keys_exist_in_table() {
    let html = read("index.html");
    let table = table();
    let keys = find_i18n_keys(&html);
    assert!(!keys.is_empty(), "index.html carries no data-i18n keys");

    let mut violations = Vec::new();
    for lang in ["en", "km"] {
        let entries = table
            .get(lang)
            .unwrap_or_else(|| panic!("table has no {lang} entries"));
        for (line_num, key) in &keys {
            if !entries.contains_key(key) {
                violations.push(format!("  index.html:{line_num}: {key} (missing in {lang})"));
            }
        }
    }

    if !violations.is_empty() {
        panic!(
            "Found data-i18n keys with no translation:\n{}",
            violations.join("\n")
        );
    }
}

#[test]
fn languages_share_one_key_set() {
    let table = table();
    let en: BTreeSet<&String> = table["en"].keys().collect();
    let km: BTreeSet<&String> = table["km"].keys().collect();

    let only_en: Vec<_> = en.difference(&km).collect();
    let only_km: Vec<_> = km.difference(&en).collect();
    assert!(
        only_en.is_empty() && only_km.is_empty(),
        "key sets differ\n  only en: {only_en:?}\n  only km: {only_km:?}"
    );
}

#[test]
fn data_document_has_every_section() {
    let data: serde_json::Value = serde_json::from_str(&read("data.json")).expect("data.json parses");
    for key in [
        "personal",
        "experience",
        "skills",
        "languages",
        "education",
        "contact",
    ] {
        assert!(data.get(key).is_some(), "data.json is missing `{key}`");
    }
}

#[test]
fn skill_icons_exist_on_disk() {
    let data: serde_json::Value = serde_json::from_str(&read("data.json")).expect("data.json parses");
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut missing = Vec::new();
    let mut checked = 0;

    for group in ["frontend", "backend", "cloud"] {
        let skills = data["skills"][group].as_array().cloned().unwrap_or_default();
        for skill in skills {
            let Some(icon) = skill.get("icon").and_then(|v| v.as_str()) else {
                continue;
            };
            checked += 1;
            if !root.join(icon).is_file() {
                missing.push(format!("  {group}: {icon}"));
            }
        }
    }

    assert!(checked > 0, "data.json references no skill icons");
    if !missing.is_empty() {
        panic!("Skill icons missing from the repository:\n{}", missing.join("\n"));
    }
}

#[test]
fn host_document_has_render_containers() {
    let html = read("index.html");
    for id in [
        "experience-list",
        "skills-grid",
        "languages-list",
        "education-list",
        "email-link",
        "telegram-link",
    ] {
        assert!(
            html.contains(&format!("id=\"{id}\"")),
            "index.html has no #{id}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_multiple_keys_per_line() {
        let keys = find_i18n_keys(r#"<a data-i18n="a.b">x</a><b data-i18n="c">y</b>"#);
        assert_eq!(keys, vec![(1, "a.b".to_string()), (1, "c".to_string())]);
    }

    #[test]
    fn reports_line_numbers() {
        let keys = find_i18n_keys("<p>\n<span data-i18n=\"k\"></span>");
        assert_eq!(keys, vec![(2, "k".to_string())]);
    }

    #[test]
    fn ignores_unterminated_attribute() {
        assert!(find_i18n_keys(r#"<p data-i18n="broken>"#).is_empty());
    }
}
