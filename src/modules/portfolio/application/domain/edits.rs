use super::entities::{Entry, Hero, Identified, PortfolioDocument, Section, Skill, SkillCategory};
use super::validation::DocumentPart;

/// A single change to one member of the document. Everything outside the
/// targeted member is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioEdit {
    ReplaceHero(Hero),
    AddEntry(Entry),
    UpdateEntry { id: String, entry: Entry },
    RemoveEntry { section: Section, id: String },
    AddSkill { category: SkillCategory, skill: Skill },
    UpdateSkill { category: SkillCategory, index: usize, skill: Skill },
    RemoveSkill { category: SkillCategory, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioEditError {
    #[error("no {section} entry with id '{id}'")]
    EntryNotFound { section: Section, id: String },

    #[error("no {category} skill at index {index}")]
    SkillNotFound { category: SkillCategory, index: usize },
}

impl PortfolioEdit {
    pub fn describe(&self) -> String {
        match self {
            PortfolioEdit::ReplaceHero(_) => "replace hero".to_string(),
            PortfolioEdit::AddEntry(entry) => format!("add {} entry", entry.section()),
            PortfolioEdit::UpdateEntry { id, entry } => {
                format!("update {} entry {id}", entry.section())
            }
            PortfolioEdit::RemoveEntry { section, id } => format!("remove {section} entry {id}"),
            PortfolioEdit::AddSkill { category, .. } => format!("add {category} skill"),
            PortfolioEdit::UpdateSkill { category, index, .. } => {
                format!("update {category} skill {index}")
            }
            PortfolioEdit::RemoveSkill { category, index } => {
                format!("remove {category} skill {index}")
            }
        }
    }

    /// The only part of the document this edit can change.
    pub fn part(&self) -> DocumentPart {
        match self {
            PortfolioEdit::ReplaceHero(_) => DocumentPart::Hero,
            PortfolioEdit::AddEntry(entry) | PortfolioEdit::UpdateEntry { entry, .. } => {
                DocumentPart::Section(entry.section())
            }
            PortfolioEdit::RemoveEntry { section, .. } => DocumentPart::Section(*section),
            PortfolioEdit::AddSkill { category, .. }
            | PortfolioEdit::UpdateSkill { category, .. }
            | PortfolioEdit::RemoveSkill { category, .. } => DocumentPart::Skills(*category),
        }
    }

    /// Applies the edit in place. `new_id` is only called when an entry is added.
    pub fn apply(
        self,
        doc: &mut PortfolioDocument,
        new_id: impl FnOnce() -> String,
    ) -> Result<(), PortfolioEditError> {
        match self {
            PortfolioEdit::ReplaceHero(hero) => {
                doc.hero = hero;
                Ok(())
            }

            PortfolioEdit::AddEntry(entry) => {
                let at_head = entry.section().inserts_at_head();
                let id = new_id();
                match entry {
                    Entry::Project(item) => insert(&mut doc.projects, item, id, at_head),
                    Entry::Service(item) => insert(&mut doc.services, item, id, at_head),
                    Entry::Experience(item) => insert(&mut doc.experience, item, id, at_head),
                    Entry::Testimonial(item) => insert(&mut doc.testimonials, item, id, at_head),
                }
                Ok(())
            }

            PortfolioEdit::UpdateEntry { id, entry } => {
                let section = entry.section();
                let replaced = match entry {
                    Entry::Project(item) => replace(&mut doc.projects, &id, item),
                    Entry::Service(item) => replace(&mut doc.services, &id, item),
                    Entry::Experience(item) => replace(&mut doc.experience, &id, item),
                    Entry::Testimonial(item) => replace(&mut doc.testimonials, &id, item),
                };
                if replaced {
                    Ok(())
                } else {
                    Err(PortfolioEditError::EntryNotFound { section, id })
                }
            }

            PortfolioEdit::RemoveEntry { section, id } => {
                let removed = match section {
                    Section::Projects => remove(&mut doc.projects, &id),
                    Section::Services => remove(&mut doc.services, &id),
                    Section::Experience => remove(&mut doc.experience, &id),
                    Section::Testimonials => remove(&mut doc.testimonials, &id),
                };
                if removed {
                    Ok(())
                } else {
                    Err(PortfolioEditError::EntryNotFound { section, id })
                }
            }

            PortfolioEdit::AddSkill { category, skill } => {
                doc.skills.category_mut(category).push(skill);
                Ok(())
            }

            PortfolioEdit::UpdateSkill {
                category,
                index,
                skill,
            } => match doc.skills.category_mut(category).get_mut(index) {
                Some(slot) => {
                    *slot = skill;
                    Ok(())
                }
                None => Err(PortfolioEditError::SkillNotFound { category, index }),
            },

            PortfolioEdit::RemoveSkill { category, index } => {
                let skills = doc.skills.category_mut(category);
                if index < skills.len() {
                    skills.remove(index);
                    Ok(())
                } else {
                    Err(PortfolioEditError::SkillNotFound { category, index })
                }
            }
        }
    }
}

fn insert<T: Identified>(items: &mut Vec<T>, mut item: T, id: String, at_head: bool) {
    item.set_id(id);
    if at_head {
        items.insert(0, item);
    } else {
        items.push(item);
    }
}

fn replace<T: Identified>(items: &mut [T], id: &str, mut item: T) -> bool {
    match items.iter_mut().find(|existing| existing.id() == id) {
        Some(slot) => {
            item.set_id(id.to_string());
            *slot = item;
            true
        }
        None => false,
    }
}

/// Drops the first entry carrying `id`; later duplicates stay.
fn remove<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    match items.iter().position(|existing| existing.id() == id) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
