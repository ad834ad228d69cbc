//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# pdfhost configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[editor]
# url = "http://localhost:5000"   # http:// or https:// only
# bridge_name = "Android"         # global the editor calls onEditorReady/onPDFSaved on
# locale = "en"                   # en, vi, de, fr, fr-CA, es, pt

[webview]
# devtools = false                # always on in debug builds
# user_agent = "pdfhost/0.1"
# clipboard = true
# autoplay = false

[window]
# title = "PDF Editor"
# width = 1200                    # 320-7680
# height = 860                    # 240-4320

[share]
# output_dir = ""                 # empty: platform data dir
# file_stem = "edited"
# reveal = true                   # open saved PDFs with the default viewer

[logging]
# level = "info"                  # trace, debug, info, warn, error
"##
    .to_string()
}
