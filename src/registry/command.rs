pub mod add_author_cmd;
pub mod get_author_cmd;
pub mod list_authors_cmd;
pub mod remove_author_cmd;
pub mod update_author_cmd;
