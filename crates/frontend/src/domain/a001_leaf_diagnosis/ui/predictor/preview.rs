//! Leaf Predictor - local image preview

use std::fmt;

/// Owns a locally resolvable preview URL.
///
/// The release callback runs exactly once, when the handle is dropped.
pub struct PreviewHandle {
    url: String,
    release: Option<Box<dyn FnOnce(&str)>>,
}

impl PreviewHandle {
    pub fn new(url: impl Into<String>, release: impl FnOnce(&str) + 'static) -> Self {
        Self {
            url: url.into(),
            release: Some(Box::new(release)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(&self.url);
        }
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle").field("url", &self.url).finish()
    }
}

/// Создать object URL для выбранного файла
pub fn object_url_for(file: &web_sys::File) -> Result<PreviewHandle, String> {
    let url = web_sys::Url::create_object_url_with_blob(file).map_err(|e| format!("{e:?}"))?;
    log::debug!("Created preview {}", url);
    Ok(PreviewHandle::new(url, |url| {
        match web_sys::Url::revoke_object_url(url) {
            Ok(()) => log::debug!("Revoked preview {}", url),
            Err(e) => log::warn!("Failed to revoke preview {}: {:?}", url, e),
        }
    }))
}
