use crate::error::CodecError;
use crate::options::CodecOptions;
use msgprops_core::{Bundle, MessageBundle};

/// The codec contract a rendering engine drives: it hands over extracted
/// source messages and receives editable text, and later hands back the
/// translated text to get a bundle.
pub trait MessagePlugin: Send + Sync {
    fn generate_extracted_messages_file(
        &self,
        bundle: &dyn Bundle,
        options: &CodecOptions,
    ) -> Result<String, CodecError>;

    fn parse_translated_messages_file(&self, text: &str) -> Result<MessageBundle, CodecError>;
}

/// [`MessagePlugin`] for the `key=value` ICU bundle format.
///
/// Parsing uses default options, so the locale of the returned bundle comes
/// from the `# locale:` header of the file.
#[derive(Clone, Copy, Debug, Default)]
pub struct PropertiesIcuPlugin;

impl MessagePlugin for PropertiesIcuPlugin {
    fn generate_extracted_messages_file(
        &self,
        bundle: &dyn Bundle,
        options: &CodecOptions,
    ) -> Result<String, CodecError> {
        crate::generate(bundle, options)
    }

    fn parse_translated_messages_file(&self, text: &str) -> Result<MessageBundle, CodecError> {
        crate::parse(text, &CodecOptions::default())
    }
}
