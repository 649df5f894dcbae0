/// Port trait for credential lookup.
///
/// URL-backed sources query this at the moment they are opened, never at
/// construction. The process environment is one implementation; tests inject
/// fixed values instead of mutating the real environment.
///
/// # Examples
///
/// ```
/// use casc_source::domain::ports::CredentialProvider;
///
/// struct Fixed;
///
/// impl CredentialProvider for Fixed {
///     fn lookup(&self, key: &str) -> Option<String> {
///         (key == "TOKEN").then(|| "tok123".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.lookup("TOKEN").as_deref(), Some("tok123"));
/// assert!(Fixed.lookup("USER").is_none());
/// ```
pub trait CredentialProvider: Send + Sync {
    /// Look up a credential value by key. `None` when the key is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}
