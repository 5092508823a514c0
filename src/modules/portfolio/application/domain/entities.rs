use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Unrecognised members of a document object.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

// ──────────────────────────────────────────────────────────
// Document root
// ──────────────────────────────────────────────────────────

/// The whole publishable portfolio. Stored and replaced as one unit.
///
/// All six members are required; a stored file missing any of them does not
/// deserialize and is reported as corrupt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub hero: Hero,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub services: Vec<Service>,
    pub experience: Vec<Experience>,
    pub testimonials: Vec<Testimonial>,
    /// Keys outside the known schema, written back exactly as received.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub social_links: SocialLinks,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

// ──────────────────────────────────────────────────────────
// Id-keyed collections
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub github: String,
    pub category: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

/// Icon keys the admin panel can render for a service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ServiceIcon {
    Code,
    Palette,
    ShoppingCart,
    Users,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
    pub image: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

/// Entities addressed by a string id inside their section.
pub trait Identified {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! impl_identified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )+
    };
}

impl_identified!(Project, Service, Experience, Testimonial);

// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skills {
    pub frontend: Vec<Skill>,
    pub backend: Vec<Skill>,
    pub database: Vec<Skill>,
    pub tools: Vec<Skill>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

impl Skills {
    pub fn category(&self, category: SkillCategory) -> &Vec<Skill> {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Database => &self.database,
            SkillCategory::Tools => &self.tools,
        }
    }

    pub fn category_mut(&mut self, category: SkillCategory) -> &mut Vec<Skill> {
        match category {
            SkillCategory::Frontend => &mut self.frontend,
            SkillCategory::Backend => &mut self.backend,
            SkillCategory::Database => &mut self.database,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    pub fn total(&self) -> usize {
        SkillCategory::ALL
            .iter()
            .map(|c| self.category(*c).len())
            .sum()
    }
}

/// A skill is identified by its position inside its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────

/// The id-keyed collections of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Projects,
    Services,
    Experience,
    Testimonials,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Projects,
        Section::Services,
        Section::Experience,
        Section::Testimonials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Experience => "experience",
            Section::Testimonials => "testimonials",
        }
    }

    /// New projects, experience and testimonials show up first; services are
    /// appended after the existing cards.
    pub fn inserts_at_head(&self) -> bool {
        !matches!(self, Section::Services)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key '{0}'")]
pub struct UnknownKey(pub String);

/// One entity of an id-keyed section, typed by the section it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Project(Project),
    Service(Service),
    Experience(Experience),
    Testimonial(Testimonial),
}

impl Entry {
    /// Decodes a request body as an entity of `section`.
    pub fn from_json(section: Section, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match section {
            Section::Projects => Entry::Project(serde_json::from_value(value)?),
            Section::Services => Entry::Service(serde_json::from_value(value)?),
            Section::Experience => Entry::Experience(serde_json::from_value(value)?),
            Section::Testimonials => Entry::Testimonial(serde_json::from_value(value)?),
        })
    }

    pub fn section(&self) -> Section {
        match self {
            Entry::Project(_) => Section::Projects,
            Entry::Service(_) => Section::Services,
            Entry::Experience(_) => Section::Experience,
            Entry::Testimonial(_) => Section::Testimonials,
        }
    }
}

impl PortfolioDocument {
    pub fn section_ids(&self, section: Section) -> Vec<&str> {
        fn ids<T: Identified>(items: &[T]) -> Vec<&str> {
            items.iter().map(Identified::id).collect()
        }

        match section {
            Section::Projects => ids(&self.projects),
            Section::Services => ids(&self.services),
            Section::Experience => ids(&self.experience),
            Section::Testimonials => ids(&self.testimonials),
        }
    }
}
