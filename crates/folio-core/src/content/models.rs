use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::link::Link;
use crate::{Error, Result};

/// Proficiency shown on an expanded skill card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skill card. `name` is the disclosure key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub description: String,
    pub level: SkillLevel,
}

/// A project card with screenshot, tech tags and two outbound links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub tech_tags: Vec<String>,
    pub demo: Link,
    pub repo: Link,
}

/// Course grade. "IP" marks a course still in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grade {
    Letter(String),
    InProgress,
}

impl Grade {
    pub const IN_PROGRESS_MARKER: &'static str = "IP";

    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(Self::IN_PROGRESS_MARKER) {
            Grade::InProgress
        } else {
            Grade::Letter(raw.to_string())
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Grade::InProgress)
    }
}

impl From<String> for Grade {
    fn from(raw: String) -> Self {
        Grade::parse(&raw)
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Letter(letter) => f.write_str(letter),
            Grade::InProgress => f.write_str(Self::IN_PROGRESS_MARKER),
        }
    }
}

/// A course card. `title` is the disclosure key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEntry {
    pub title: String,
    pub description: String,
    pub grade: Grade,
}

/// An image served by the static asset host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub path: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub expected_graduation: String,
    pub photos: Vec<Photo>,
    pub courses: Vec<CourseEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    pub copyright: String,
    pub links: Vec<Link>,
}

/// All static page content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub brand: String,
    pub owner: String,
    pub greeting: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub nav_links: Vec<Link>,
    pub hero_links: Vec<Link>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Education,
    pub footer: Footer,
}

impl Portfolio {
    pub fn skill(&self, name: &str) -> Option<&SkillEntry> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn course(&self, title: &str) -> Option<&CourseEntry> {
        self.education.courses.iter().find(|c| c.title == title)
    }

    pub fn project(&self, title: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.title == title)
    }

    /// Check that skill names, project titles and course titles are unique
    pub fn validate(&self) -> Result<()> {
        ensure_unique("skill", self.skills.iter().map(|s| s.name.as_str()))?;
        ensure_unique("project", self.projects.iter().map(|p| p.title.as_str()))?;
        ensure_unique(
            "course",
            self.education.courses.iter().map(|c| c.title.as_str()),
        )?;
        Ok(())
    }
}

fn ensure_unique<'a>(kind: &'static str, keys: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(Error::DuplicateKey {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_parse() {
        assert_eq!(Grade::parse("IP"), Grade::InProgress);
        assert_eq!(Grade::parse(" ip "), Grade::InProgress);
        assert_eq!(Grade::parse("B+"), Grade::Letter("B+".to_string()));
        assert_eq!(Grade::parse("A").to_string(), "A");
        assert_eq!(Grade::InProgress.to_string(), "IP");
    }

    #[test]
    fn test_grade_serde_as_string() {
        let json = serde_json::to_string(&Grade::InProgress).unwrap();
        assert_eq!(json, "\"IP\"");
        let grade: Grade = serde_json::from_str("\"C+\"").unwrap();
        assert_eq!(grade, Grade::Letter("C+".to_string()));
    }

    #[test]
    fn test_validate_rejects_duplicate_skill() {
        let mut portfolio = Portfolio::builtin();
        let dup = portfolio.skills[0].clone();
        portfolio.skills.push(dup);
        match portfolio.validate() {
            Err(Error::DuplicateKey { kind, key }) => {
                assert_eq!(kind, "skill");
                assert_eq!(key, "React");
            }
            other => panic!("expected duplicate key error, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_by_key() {
        let portfolio = Portfolio::builtin();
        assert_eq!(
            portfolio.skill("React").map(|s| s.level),
            Some(SkillLevel::Advanced)
        );
        assert!(portfolio.course("Theory of Computation").is_some());
        assert!(portfolio.project("Portfolio Website").is_some());
        assert!(portfolio.skill("Haskell").is_none());
    }
}
