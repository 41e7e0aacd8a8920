//! ODF constants: MIME types, standard part paths and template names.
//!
//! The MIME type table is the closed set of document types a container
//! accepts. Anything outside it is rejected when the package is opened.
//!
//! # References
//!
//! - OpenDocument v1.2, Part 3: Packages, §3.3 (MIME type stream)

use phf::{Map, phf_map};

// ============================================================================
// MIME TYPES
// ============================================================================

/// MIME type for OpenDocument Text (.odt)
pub const ODF_TEXT: &str = "application/vnd.oasis.opendocument.text";

/// MIME type for OpenDocument Text Template (.ott)
pub const ODF_TEXT_TEMPLATE: &str = "application/vnd.oasis.opendocument.text-template";

/// MIME type for OpenDocument Spreadsheet (.ods)
pub const ODF_SPREADSHEET: &str = "application/vnd.oasis.opendocument.spreadsheet";

/// MIME type for OpenDocument Spreadsheet Template (.ots)
pub const ODF_SPREADSHEET_TEMPLATE: &str =
    "application/vnd.oasis.opendocument.spreadsheet-template";

/// MIME type for OpenDocument Presentation (.odp)
pub const ODF_PRESENTATION: &str = "application/vnd.oasis.opendocument.presentation";

/// MIME type for OpenDocument Presentation Template (.otp)
pub const ODF_PRESENTATION_TEMPLATE: &str =
    "application/vnd.oasis.opendocument.presentation-template";

/// MIME type for OpenDocument Drawing (.odg)
pub const ODF_DRAWING: &str = "application/vnd.oasis.opendocument.graphics";

/// MIME type for OpenDocument Drawing Template (.otg)
pub const ODF_DRAWING_TEMPLATE: &str = "application/vnd.oasis.opendocument.graphics-template";

/// MIME type for OpenDocument Chart (.odc)
pub const ODF_CHART: &str = "application/vnd.oasis.opendocument.chart";

/// MIME type for OpenDocument Chart Template (.otc)
pub const ODF_CHART_TEMPLATE: &str = "application/vnd.oasis.opendocument.chart-template";

/// MIME type for OpenDocument Image (.odi)
pub const ODF_IMAGE: &str = "application/vnd.oasis.opendocument.image";

/// MIME type for OpenDocument Image Template (.oti)
pub const ODF_IMAGE_TEMPLATE: &str = "application/vnd.oasis.opendocument.image-template";

/// MIME type for OpenDocument Formula (.odf)
pub const ODF_FORMULA: &str = "application/vnd.oasis.opendocument.formula";

/// MIME type for OpenDocument Formula Template (.otf)
pub const ODF_FORMULA_TEMPLATE: &str = "application/vnd.oasis.opendocument.formula-template";

/// MIME type for OpenDocument Master (.odm)
pub const ODF_MASTER: &str = "application/vnd.oasis.opendocument.text-master";

/// MIME type for OpenDocument Web (.oth)
pub const ODF_WEB: &str = "application/vnd.oasis.opendocument.text-web";

/// Suffix distinguishing a template MIME type from the regular document type
pub const TEMPLATE_MARKER: &str = "-template";

// ============================================================================
// FILE EXTENSIONS TO MIME TYPE MAPPING
// ============================================================================

/// File extension to MIME type mapping (compile-time perfect hash map)
pub static ODF_EXTENSIONS: Map<&'static str, &'static str> = phf_map! {
    "odt" => ODF_TEXT,
    "ott" => ODF_TEXT_TEMPLATE,
    "ods" => ODF_SPREADSHEET,
    "ots" => ODF_SPREADSHEET_TEMPLATE,
    "odp" => ODF_PRESENTATION,
    "otp" => ODF_PRESENTATION_TEMPLATE,
    "odg" => ODF_DRAWING,
    "otg" => ODF_DRAWING_TEMPLATE,
    "odc" => ODF_CHART,
    "otc" => ODF_CHART_TEMPLATE,
    "odi" => ODF_IMAGE,
    "oti" => ODF_IMAGE_TEMPLATE,
    "odf" => ODF_FORMULA,
    "otf" => ODF_FORMULA_TEMPLATE,
    "odm" => ODF_MASTER,
    "oth" => ODF_WEB,
};

/// MIME type to file extension mapping (compile-time perfect hash map)
///
/// The key set is the closed list of MIME types a container accepts.
pub static ODF_MIMETYPES: Map<&'static str, &'static str> = phf_map! {
    "application/vnd.oasis.opendocument.text" => "odt",
    "application/vnd.oasis.opendocument.text-template" => "ott",
    "application/vnd.oasis.opendocument.spreadsheet" => "ods",
    "application/vnd.oasis.opendocument.spreadsheet-template" => "ots",
    "application/vnd.oasis.opendocument.presentation" => "odp",
    "application/vnd.oasis.opendocument.presentation-template" => "otp",
    "application/vnd.oasis.opendocument.graphics" => "odg",
    "application/vnd.oasis.opendocument.graphics-template" => "otg",
    "application/vnd.oasis.opendocument.chart" => "odc",
    "application/vnd.oasis.opendocument.chart-template" => "otc",
    "application/vnd.oasis.opendocument.image" => "odi",
    "application/vnd.oasis.opendocument.image-template" => "oti",
    "application/vnd.oasis.opendocument.formula" => "odf",
    "application/vnd.oasis.opendocument.formula-template" => "otf",
    "application/vnd.oasis.opendocument.text-master" => "odm",
    "application/vnd.oasis.opendocument.text-web" => "oth",
};

/// Built-in template type names to template MIME type
pub static ODF_TYPES: Map<&'static str, &'static str> = phf_map! {
    "text" => ODF_TEXT_TEMPLATE,
    "spreadsheet" => ODF_SPREADSHEET_TEMPLATE,
    "presentation" => ODF_PRESENTATION_TEMPLATE,
    "drawing" => ODF_DRAWING_TEMPLATE,
};

// ============================================================================
// STANDARD ODF PARTS PATHS
// ============================================================================

/// Path to the mimetype member
pub const ODF_MIMETYPE: &str = "mimetype";

/// Path to content.xml (main document content)
pub const ODF_CONTENT: &str = "content.xml";

/// Path to meta.xml (document metadata)
pub const ODF_META: &str = "meta.xml";

/// Path to settings.xml (application settings)
pub const ODF_SETTINGS: &str = "settings.xml";

/// Path to styles.xml (document styles)
pub const ODF_STYLES: &str = "styles.xml";

/// Path to manifest.xml (package manifest)
pub const ODF_MANIFEST: &str = "META-INF/manifest.xml";

/// Media type recorded in the manifest for XML parts
pub const ODF_XML_MEDIA_TYPE: &str = "text/xml";

/// The four mandatory XML parts, in the order they are written to a package.
pub const ODF_XML_PARTS: [XmlPart; 4] =
    [XmlPart::Content, XmlPart::Meta, XmlPart::Settings, XmlPart::Styles];

/// One of the four XML parts every OpenDocument carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlPart {
    Content,
    Meta,
    Settings,
    Styles,
}

impl XmlPart {
    /// Short name, as used by the `office:document-*` root elements.
    pub const fn name(self) -> &'static str {
        match self {
            XmlPart::Content => "content",
            XmlPart::Meta => "meta",
            XmlPart::Settings => "settings",
            XmlPart::Styles => "styles",
        }
    }

    /// Member path inside a ZIP package.
    pub const fn path(self) -> &'static str {
        match self {
            XmlPart::Content => ODF_CONTENT,
            XmlPart::Meta => ODF_META,
            XmlPart::Settings => ODF_SETTINGS,
            XmlPart::Styles => ODF_STYLES,
        }
    }

    /// Resolve a part name, accepting either the short name or the member path.
    pub fn from_name(name: &str) -> Option<Self> {
        ODF_XML_PARTS
            .into_iter()
            .find(|part| part.name() == name || part.path() == name)
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Get MIME type from file extension
///
/// # Examples
///
/// ```
/// use litchi_odf::odf::constants::get_mime_type_from_extension;
///
/// let mime = get_mime_type_from_extension("odt");
/// assert_eq!(mime, Some("application/vnd.oasis.opendocument.text"));
/// ```
#[inline]
pub fn get_mime_type_from_extension(extension: &str) -> Option<&'static str> {
    ODF_EXTENSIONS.get(extension).copied()
}

/// Get file extension from MIME type
///
/// # Examples
///
/// ```
/// use litchi_odf::odf::constants::get_extension_from_mime_type;
///
/// let ext = get_extension_from_mime_type("application/vnd.oasis.opendocument.text");
/// assert_eq!(ext, Some("odt"));
/// ```
#[inline]
pub fn get_extension_from_mime_type(mime_type: &str) -> Option<&'static str> {
    ODF_MIMETYPES.get(mime_type).copied()
}

/// Check if a given MIME type is one of the accepted ODF MIME types
///
/// # Examples
///
/// ```
/// use litchi_odf::odf::constants::is_odf_mime_type;
///
/// assert!(is_odf_mime_type("application/vnd.oasis.opendocument.text"));
/// assert!(!is_odf_mime_type("text/plain"));
/// ```
#[inline]
pub fn is_odf_mime_type(mime_type: &str) -> bool {
    ODF_MIMETYPES.contains_key(mime_type)
}

/// Check if a MIME type names a template
#[inline]
pub fn is_template_mime_type(mime_type: &str) -> bool {
    mime_type.ends_with(TEMPLATE_MARKER)
}

/// Regular document MIME type for a template MIME type.
///
/// Non-template MIME types are returned unchanged.
pub fn strip_template_marker(mime_type: &str) -> &str {
    mime_type.strip_suffix(TEMPLATE_MARKER).unwrap_or(mime_type)
}
