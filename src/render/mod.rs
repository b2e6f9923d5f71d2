pub mod context;
pub mod engine;

pub use context::{build_marketplace_context, class_name, MarketplaceEntry, TemplateContext};
pub use engine::{BuiltinRenderer, Renderer, BUILTIN_TEMPLATES};
