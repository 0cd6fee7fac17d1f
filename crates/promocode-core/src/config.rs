/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; each field maps to the upper-cased
/// env var of the same name (`promocode_port` reads `PROMOCODE_PORT`).
///
/// # Panics
///
/// `from_env` panics if a required env var is missing or cannot be
/// deserialized. Use `try_from_env` to handle the error instead.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn try_from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    fn from_env() -> Self {
        Self::try_from_env().expect("failed to load config from environment")
    }

    /// Load from explicit key/value pairs instead of the process environment.
    fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(pairs)
    }
}
