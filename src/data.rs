/// Resume document model, deserialized from `data.json`.
///
/// The document is loaded once per page session and never mutated. Field
/// names follow the JSON keys (`techStack` is the only camelCase one).
use serde::Deserialize;

use crate::error::LoadError;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResumeData {
    pub personal: Personal,
    pub experience: Vec<Job>,
    pub skills: Skills,
    pub languages: Vec<LanguageSkill>,
    pub education: Education,
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Personal {
    pub name: String,
    pub description: String,
    pub age: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub date: String,
    pub duties: Vec<String>,
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skills {
    pub frontend: Vec<Skill>,
    pub backend: Vec<Skill>,
    pub cloud: Vec<Skill>,
}

/// A skill is shown either with an emoji glyph or an icon image.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
}

/// How a skill is decorated when rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph<'a> {
    Emoji(&'a str),
    Icon(&'a str),
}

impl Skill {
    /// Emoji wins when present, otherwise the icon path. A skill with
    /// neither yields an empty icon source.
    pub fn glyph(&self) -> Glyph<'_> {
        match (&self.emoji, &self.icon) {
            (Some(e), _) if !e.is_empty() => Glyph::Emoji(e),
            (_, icon) => Glyph::Icon(icon.as_deref().unwrap_or_default()),
        }
    }

    /// Icon path regardless of any emoji (backend/cloud categories).
    pub fn icon_src(&self) -> &str {
        self.icon.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LanguageSkill {
    pub name: String,
    pub level: String,
    /// Proficiency 0–100. Not clamped; the document is trusted.
    pub percentage: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub date: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Contact {
    pub email: String,
    pub telegram: String,
}

impl ResumeData {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    fn job(title: &str, company: &str, date: &str, duties: &[&str]) -> Job {
        Job {
            title: title.to_string(),
            company: company.to_string(),
            date: date.to_string(),
            duties: duties.iter().map(|d| d.to_string()).collect(),
            tech_stack: vec!["React".to_string(), "TypeScript".to_string()],
        }
    }

    fn skill(name: &str, icon: Option<&str>, emoji: Option<&str>) -> Skill {
        Skill {
            name: name.to_string(),
            icon: icon.map(str::to_string),
            emoji: emoji.map(str::to_string),
        }
    }

    /// Three jobs in chronological order: A (oldest), B, C (newest).
    pub fn sample() -> ResumeData {
        ResumeData {
            personal: Personal {
                name: "Sok Dara".to_string(),
                description: "I am a Frontend Developer who loves clean UI.".to_string(),
                age: 24,
            },
            experience: vec![
                job("Intern", "A Corp", "2021", &["Fixed bugs"]),
                job("Junior Dev", "B Corp", "2022", &["Built pages", "Wrote tests"]),
                job("Frontend Dev", "C Corp", "2023 - Present", &["Led UI work"]),
            ],
            skills: Skills {
                frontend: vec![
                    skill("React", Some("icons/react.svg"), None),
                    skill("CSS", None, Some("🎨")),
                ],
                backend: vec![skill("Node.js", Some("icons/node.svg"), None)],
                cloud: vec![
                    skill("Docker", Some("icons/docker.svg"), None),
                    skill("Vercel", Some("icons/vercel.svg"), None),
                ],
            },
            languages: vec![
                LanguageSkill {
                    name: "Khmer".to_string(),
                    level: "Native".to_string(),
                    percentage: 100,
                },
                LanguageSkill {
                    name: "English".to_string(),
                    level: "Intermediate".to_string(),
                    percentage: 70,
                },
            ],
            education: Education {
                degree: "BSc Computer Science".to_string(),
                institution: "Royal University of Phnom Penh".to_string(),
                date: "2019 - 2023".to_string(),
            },
            contact: Contact {
                email: "dara@example.com".to_string(),
                telegram: "sokdara".to_string(),
            },
        }
    }
}
