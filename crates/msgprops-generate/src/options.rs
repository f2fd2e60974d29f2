/// Options shared by [`generate`](crate::generate) and [`parse`](crate::parse).
///
/// Locale tags are free-form; they are written to and read from the file
/// header but never validated.
#[derive(Clone, Debug, PartialEq, Eq, bon::Builder)]
pub struct CodecOptions {
    /// Locale of the extracted source messages (e.g. "en").
    #[builder(into, default)]
    pub source_locale: String,

    /// Locale the file is meant to be translated into (e.g. "nl").
    #[builder(into, default)]
    pub target_locale: String,

    /// Write a `# <source-locale>: <message>` comment above every entry.
    /// Defaults to `true`.
    #[builder(default = true)]
    pub source_comments: bool,
}

impl CodecOptions {
    pub fn new(source_locale: impl Into<String>, target_locale: impl Into<String>) -> Self {
        Self::builder()
            .source_locale(source_locale)
            .target_locale(target_locale)
            .build()
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CodecOptions::default();
        assert_eq!(options.source_locale, "");
        assert_eq!(options.target_locale, "");
        assert!(options.source_comments);
    }

    #[test]
    fn test_builder() {
        let options = CodecOptions::builder()
            .source_locale("en")
            .target_locale("nl")
            .source_comments(false)
            .build();

        assert_eq!(options, CodecOptions {
            source_locale: "en".to_string(),
            target_locale: "nl".to_string(),
            source_comments: false,
        });
        assert!(CodecOptions::new("en", "nl").source_comments);
    }
}
