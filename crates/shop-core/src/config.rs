/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field `foo_bar` is read from
/// `FOO_BAR`. Use `#[serde(default = "...")]` for optional settings.
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// Load from the process environment.
    fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Load from an explicit set of `(KEY, value)` pairs.
    fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
