pub mod user;

pub use user::{load_user_config, load_user_config_from, AuthorConfig, UserConfig};
