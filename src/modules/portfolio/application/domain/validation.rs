use std::collections::HashSet;
use std::fmt;

use super::entities::{Identified, PortfolioDocument, Section, SkillCategory};

pub const MAX_SKILL_LEVEL: u8 = 100;
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// A piece of the document that is checked, and edited, on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentPart {
    Hero,
    Skills(SkillCategory),
    Section(Section),
}

impl DocumentPart {
    pub const IN_ORDER: [DocumentPart; 9] = [
        DocumentPart::Hero,
        DocumentPart::Section(Section::Projects),
        DocumentPart::Skills(SkillCategory::Frontend),
        DocumentPart::Skills(SkillCategory::Backend),
        DocumentPart::Skills(SkillCategory::Database),
        DocumentPart::Skills(SkillCategory::Tools),
        DocumentPart::Section(Section::Services),
        DocumentPart::Section(Section::Experience),
        DocumentPart::Section(Section::Testimonials),
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

impl SchemaViolation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Default)]
struct Checker {
    violations: Vec<SchemaViolation>,
}

impl Checker {
    fn required(&mut self, path: impl fmt::Display, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.violations
                .push(SchemaViolation::new(format!("{path}.{field}"), "is required"));
        }
    }

    fn ids<T: Identified>(&mut self, section: Section, items: &[T]) {
        let mut seen = HashSet::new();
        for (i, item) in items.iter().enumerate() {
            let path = format!("{section}[{i}].id");
            if item.id().trim().is_empty() {
                self.violations.push(SchemaViolation::new(path, "is required"));
            } else if !seen.insert(item.id()) {
                self.violations.push(SchemaViolation::new(
                    path,
                    format!("duplicates id '{}'", item.id()),
                ));
            }
        }
    }

    fn finish(self) -> Result<(), Vec<SchemaViolation>> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.violations)
        }
    }
}

impl PortfolioDocument {
    /// Checks the rules the admin forms enforce, plus id uniqueness.
    /// Returns every violation found, in document order.
    pub fn validate(&self) -> Result<(), Vec<SchemaViolation>> {
        let mut c = Checker::default();
        for part in DocumentPart::IN_ORDER {
            self.check_part(&mut c, part);
        }
        c.finish()
    }

    /// Same rules as [`validate`](Self::validate), restricted to one part.
    pub fn validate_part(&self, part: DocumentPart) -> Result<(), Vec<SchemaViolation>> {
        let mut c = Checker::default();
        self.check_part(&mut c, part);
        c.finish()
    }

    fn check_part(&self, c: &mut Checker, part: DocumentPart) {
        match part {
            DocumentPart::Hero => {
                let hero = &self.hero;
                c.required("hero", "name", &hero.name);
                c.required("hero", "title", &hero.title);
                c.required("hero", "description", &hero.description);
                c.required("hero", "image", &hero.image);
            }

            DocumentPart::Skills(category) => {
                for (i, s) in self.skills.category(category).iter().enumerate() {
                    let path = format!("skills.{category}[{i}]");
                    c.required(&path, "name", &s.name);
                    if s.level > MAX_SKILL_LEVEL {
                        c.violations.push(SchemaViolation::new(
                            format!("{path}.level"),
                            format!("must be between 0 and {MAX_SKILL_LEVEL}"),
                        ));
                    }
                }
            }

            DocumentPart::Section(Section::Projects) => {
                c.ids(Section::Projects, &self.projects);
                for (i, p) in self.projects.iter().enumerate() {
                    let path = format!("projects[{i}]");
                    c.required(&path, "title", &p.title);
                    c.required(&path, "description", &p.description);
                    c.required(&path, "image", &p.image);
                    c.required(&path, "category", &p.category);
                    if p.technologies.iter().all(|t| t.trim().is_empty()) {
                        c.violations.push(SchemaViolation::new(
                            format!("{path}.technologies"),
                            "needs at least one entry",
                        ));
                    }
                }
            }

            DocumentPart::Section(Section::Services) => {
                c.ids(Section::Services, &self.services);
                for (i, s) in self.services.iter().enumerate() {
                    let path = format!("services[{i}]");
                    c.required(&path, "title", &s.title);
                    c.required(&path, "description", &s.description);
                }
            }

            DocumentPart::Section(Section::Experience) => {
                c.ids(Section::Experience, &self.experience);
                for (i, e) in self.experience.iter().enumerate() {
                    let path = format!("experience[{i}]");
                    c.required(&path, "title", &e.title);
                    c.required(&path, "company", &e.company);
                    c.required(&path, "period", &e.period);
                    c.required(&path, "location", &e.location);
                    c.required(&path, "description", &e.description);
                }
            }

            DocumentPart::Section(Section::Testimonials) => {
                c.ids(Section::Testimonials, &self.testimonials);
                for (i, t) in self.testimonials.iter().enumerate() {
                    let path = format!("testimonials[{i}]");
                    c.required(&path, "name", &t.name);
                    c.required(&path, "role", &t.role);
                    c.required(&path, "company", &t.company);
                    c.required(&path, "content", &t.content);
                    c.required(&path, "image", &t.image);
                    if !RATING_RANGE.contains(&t.rating) {
                        c.violations.push(SchemaViolation::new(
                            format!("{path}.rating"),
                            "must be between 1 and 5",
                        ));
                    }
                }
            }
        }
    }
}
