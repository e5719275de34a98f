///
/// resource.rs  Oct 16th, 2026
///
/// Binary Resource Converter and the ChartResource display handle.
///
/// LIFECYCLE CONTRACT: every ChartResource handed out is owned by the
/// caller and MUST be released with `revoke()` (or held in a ScopedChart)
/// once it is no longer displayed. The client never releases handles on
/// the caller's behalf and never reuses one: each fetch creates a new
/// handle, even for identical bytes.
///

use std::fmt;
use std::ops::{Deref, DerefMut};

use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;
use image::ImageFormat;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::error::FetchError;
use crate::core::http::RawResponse;

// Formats a dashboard can render directly
const DISPLAYABLE: [ImageFormat; 5] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
    ImageFormat::Bmp,
];

/************ ChartResource *******************************/
pub struct ChartResource {
    id: Uuid,
    object_url: String,
    format: ImageFormat,
    payload: Option<Bytes>,
}

impl ChartResource {
    pub fn id(&self) -> Uuid {
        self.id
    }

    // `blob:<origin>/<uuid>`, unique per handle
    pub fn object_url(&self) -> &str {
        &self.object_url
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }

    // None once revoked
    pub fn bytes(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    pub fn data_uri(&self) -> Option<String> {
        self.payload.as_ref().map(|bytes| {
            format!("data:{};base64,{}", self.mime_type(), general_purpose::STANDARD.encode(bytes))
        })
    }

    pub fn is_revoked(&self) -> bool {
        self.payload.is_none()
    }

    /******** ChartResource::revoke ***********************/
    /* Releases the payload. Idempotent: later calls are no-ops.
     *
     * We return:
     *   true if this call released the payload, false if it was
     *   already released
     */
    pub fn revoke(&mut self) -> bool {
        match self.payload.take() {
            Some(_) => {
                debug!(id = %self.id, "chart resource revoked");
                true
            }
            None => false,
        }
    }

    pub fn scoped(self) -> ScopedChart {
        ScopedChart { inner: self }
    }
}

impl fmt::Debug for ChartResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartResource")
            .field("id", &self.id)
            .field("object_url", &self.object_url)
            .field("format", &self.format)
            .field("len", &self.payload.as_ref().map(Bytes::len))
            .finish()
    }
}

impl Drop for ChartResource {
    fn drop(&mut self) {
        if self.payload.is_some() {
            warn!(id = %self.id, url = %self.object_url, "chart resource dropped without revoke()");
        }
    }
}

/************ ScopedChart *********************************/
/* Scoped acquisition: revokes the wrapped handle on every exit path */
#[derive(Debug)]
pub struct ScopedChart {
    inner: ChartResource,
}

impl Deref for ScopedChart {
    type Target = ChartResource;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ScopedChart {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl Drop for ScopedChart {
    fn drop(&mut self) {
        self.inner.revoke();
    }
}

/************ to_resource() *******************************/
/* Wraps a successful binary response in a fresh handle.
 *
 * Caller Provides:
 *   raw response read in binary mode
 *   origin of the service, used to build the object url
 */
pub fn to_resource(raw: RawResponse, origin: &str) -> Result<ChartResource, FetchError> {
    if raw.body.is_empty() {
        return Err(FetchError::Conversion { url: raw.url, reason: "empty body".into() });
    }

    let format = match image::guess_format(&raw.body) {
        Ok(format) if DISPLAYABLE.contains(&format) => format,
        Ok(format) => {
            return Err(FetchError::Conversion {
                url: raw.url,
                reason: format!("unsupported image format {format:?}"),
            });
        }
        Err(_) => {
            let declared = raw.content_type.as_deref().unwrap_or("no content type");
            return Err(FetchError::Conversion {
                url: raw.url,
                reason: format!("not a recognized image payload ({declared})"),
            });
        }
    };

    let id = Uuid::new_v4();
    let object_url = format!("blob:{}/{}", origin.trim_end_matches('/'), id);
    debug!(%id, ?format, len = raw.body.len(), "chart resource created");

    Ok(ChartResource { id, object_url, format, payload: Some(raw.body) })
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    // 1x1 transparent png
    const PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    fn raw(body: &'static [u8], content_type: Option<&str>) -> RawResponse {
        RawResponse {
            url: Url::parse("http://stats.local/api/team_performance_chart").unwrap(),
            status: 200,
            content_type: content_type.map(str::to_owned),
            body: Bytes::from_static(body),
        }
    }

    #[test]
    fn png_body_becomes_a_handle() {
        let mut chart = to_resource(raw(PNG, Some("image/png")), "http://stats.local").unwrap();

        assert_eq!(chart.format(), ImageFormat::Png);
        assert_eq!(chart.mime_type(), "image/png");
        assert_eq!(chart.bytes(), Some(PNG));
        assert!(chart.object_url().starts_with("blob:http://stats.local/"));
        assert!(chart.data_uri().unwrap().starts_with("data:image/png;base64,iVBORw0KGgo"));
        chart.revoke();
    }

    #[test]
    fn identical_payloads_get_distinct_handles() {
        let mut a = to_resource(raw(PNG, None), "http://stats.local").unwrap();
        let mut b = to_resource(raw(PNG, None), "http://stats.local").unwrap();

        assert_ne!(a.id(), b.id());
        assert_ne!(a.object_url(), b.object_url());
        a.revoke();
        b.revoke();
    }

    #[test]
    fn revoke_is_idempotent() {
        let mut chart = to_resource(raw(PNG, None), "http://stats.local").unwrap();

        assert!(chart.revoke());
        assert!(!chart.revoke());
        assert!(chart.is_revoked());
        assert_eq!(chart.bytes(), None);
        assert_eq!(chart.data_uri(), None);
    }

    #[test]
    fn scoped_chart_revokes_on_drop() {
        let chart = to_resource(raw(PNG, None), "http://stats.local").unwrap();
        let scoped = chart.scoped();
        assert!(!scoped.is_revoked());
        assert_eq!(scoped.format(), ImageFormat::Png);
        drop(scoped);
    }

    #[test]
    fn scoped_chart_tolerates_manual_revoke() {
        let mut scoped = to_resource(raw(PNG, None), "http://stats.local").unwrap().scoped();
        assert!(scoped.revoke());
        assert!(scoped.is_revoked());
    }

    #[test]
    fn empty_body_is_a_conversion_error() {
        let err = to_resource(raw(b"", Some("image/png")), "http://stats.local").unwrap_err();
        assert!(matches!(err, FetchError::Conversion { .. }));
    }

    #[test]
    fn json_body_is_a_conversion_error() {
        let err = to_resource(raw(br#"{"error":"No performance data found"}"#, Some("application/json")),
            "http://stats.local").unwrap_err();
        match err {
            FetchError::Conversion { reason, .. } => assert!(reason.contains("application/json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
