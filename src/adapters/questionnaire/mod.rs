//! Questionnaire sources.
//!
//! The standard questionnaire is built in; deployments can replace it with
//! a YAML file of the form
//!
//! ```yaml
//! questions:
//!   - { id: v1, dimension: V, prompt: "..." }
//! ```

mod yaml_file;

pub use yaml_file::{load_questionnaire, YamlQuestionnaireFile};
