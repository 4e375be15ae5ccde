use crate::script::Script;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A script-specific transform was invoked for a script it does not
    /// support. Programmer error: the built-in pipelines never produce this.
    #[error("unsupported transform {transform} for script {script}")]
    UnsupportedTransform {
        transform: &'static str,
        script: Script,
    },

    /// The static mapping tables failed the startup integrity check.
    #[error("mapping table integrity check failed: {}", violations.join("; "))]
    MappingIntegrity { violations: Vec<String> },

    #[error("unknown script code: {0}")]
    UnknownScript(String),
}
