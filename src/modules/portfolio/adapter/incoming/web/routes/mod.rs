mod edit_outcome;
mod get_portfolio;
mod replace_hero;
mod replace_portfolio;
mod section_entries;
mod skills;

pub use get_portfolio::{__path_get_portfolio_handler, get_portfolio_handler};
pub use replace_hero::{__path_replace_hero_handler, replace_hero_handler};
pub use replace_portfolio::{__path_replace_portfolio_handler, replace_portfolio_handler};
pub use section_entries::{
    __path_add_entry_handler, __path_remove_entry_handler, __path_update_entry_handler,
    add_entry_handler, remove_entry_handler, update_entry_handler,
};
pub use skills::{
    __path_add_skill_handler, __path_remove_skill_handler, __path_update_skill_handler,
    add_skill_handler, remove_skill_handler, update_skill_handler,
};
