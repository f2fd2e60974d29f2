use msgprops_core::{Bundle, MessageBundle};
use msgprops_generate::{CodecError, CodecOptions};
use msgprops_manager_core::{MissObserver, TracingObserver, TrackingBundle};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading or writing the bundle file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file contents could not be parsed, or the bundle could not be written.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Reads and parses a translated bundle file.
///
/// The locale comes from the file's `# locale:` header. Lookup misses are
/// reported as `tracing` events tagged with `path: <path>`.
pub fn load_bundle<P: AsRef<Path>>(path: P) -> Result<TrackingBundle<MessageBundle>, LoadError> {
    load_bundle_with(path, &CodecOptions::default(), TracingObserver)
}

/// Like [`load_bundle`], with explicit codec options and miss observer.
///
/// `options.target_locale` is used when the file has no locale header.
pub fn load_bundle_with<P: AsRef<Path>>(
    path: P,
    options: &CodecOptions,
    observer: impl MissObserver + 'static,
) -> Result<TrackingBundle<MessageBundle>, LoadError> {
    let path = path.as_ref();
    let text = fs_err::read_to_string(path)?;
    let bundle = msgprops_generate::parse(&text, options)?;

    tracing::debug!(
        "Loaded {} messages for locale '{}' from {}",
        bundle.len(),
        bundle.locale(),
        path.display()
    );

    Ok(TrackingBundle::with_observer(
        format!("path: {}", path.display()),
        bundle,
        observer,
    ))
}

/// Generates the editable file for `bundle` and writes it to `path`,
/// creating missing parent directories.
///
/// Nothing is written if generation fails.
pub fn write_extracted<P, B>(path: P, bundle: &B, options: &CodecOptions) -> Result<(), LoadError>
where
    P: AsRef<Path>,
    B: Bundle + ?Sized,
{
    let path = path.as_ref();
    let text = msgprops_generate::generate(bundle, options)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(path, text)?;

    tracing::debug!("Wrote {} messages to {}", bundle.len(), path.display());
    Ok(())
}
