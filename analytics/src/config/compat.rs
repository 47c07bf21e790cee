//! Maps deprecated options onto their replacements.
//!
//! Runs once at the start of [`Config::with_defaults`](crate::Config::with_defaults). When the
//! deprecated fields are removed, this module goes with them.

use crate::config::Config;

/// Fold deprecated fields into the fields that replace them.
///
/// - `endpoint` is used as `data_plane_url` when the latter is empty.
/// - A non-zero `gzip` forces `disable_gzip`. The reverse mapping does not exist: `disable_gzip`
///   never changes `gzip`.
pub(crate) fn apply_deprecated_fields(mut c: Config) -> Config {
    if !c.endpoint.is_empty() {
        if c.data_plane_url.is_empty() {
            tracing::warn!(endpoint = %c.endpoint.as_str(), "Config.endpoint is deprecated, use Config.data_plane_url");
            c.data_plane_url = c.endpoint.clone();
        } else {
            tracing::debug!(
                endpoint = %c.endpoint.as_str(),
                data_plane_url = %c.data_plane_url.as_str(),
                "Config.endpoint ignored, Config.data_plane_url takes precedence"
            );
        }
    }

    if c.gzip != 0 {
        tracing::warn!(gzip = c.gzip, "Config.gzip is deprecated, use Config.disable_gzip");
        c.disable_gzip = true;
    }

    c
}
