pub mod analytics_service;
pub mod preference_service;
pub mod prompt_composer;
pub mod prompt_templates;
