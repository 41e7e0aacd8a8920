//! New documents from templates.
//!
//! A new document is a detached copy of a template package whose MIME type
//! has lost its `-template` suffix, with the manifest root entry updated to
//! match. Templates can be any ODF package, or one of the built-in
//! templates generated in memory (`text`, `spreadsheet`, `presentation`,
//! `drawing`).

use crate::common::{Error, Result};
use crate::odf::constants::{
    ODF_DRAWING_TEMPLATE, ODF_MANIFEST, ODF_MIMETYPE, ODF_PRESENTATION_TEMPLATE,
    ODF_SPREADSHEET_TEMPLATE, ODF_TEXT_TEMPLATE, ODF_TYPES, ODF_XML_MEDIA_TYPE, ODF_XML_PARTS,
    XmlPart, strip_template_marker,
};
use crate::odf::core::{Compression, Container, Manifest, PackageWriter, ROOT_PATH};
use std::io::Read;
use std::path::Path;

/// New document based on the template stored at `path`.
pub fn new_container<P: AsRef<Path>>(path: P) -> Result<Container> {
    from_template(&Container::open(path)?)
}

/// New document based on the template read from `reader`.
pub fn new_container_from_reader<R: Read>(reader: R) -> Result<Container> {
    from_template(&Container::from_reader(reader)?)
}

/// New document based on a built-in template.
///
/// # Examples
///
/// ```
/// use litchi_odf::odf::new_container_from_type;
///
/// let container = new_container_from_type("text")?;
/// assert_eq!(container.mimetype()?, "application/vnd.oasis.opendocument.text");
/// assert!(container.path().is_none());
/// # Ok::<(), litchi_odf::Error>(())
/// ```
pub fn new_container_from_type(type_name: &str) -> Result<Container> {
    let mimetype = ODF_TYPES
        .get(type_name)
        .ok_or_else(|| Error::UnknownTemplate(type_name.to_string()))?;
    let template = Container::from_bytes(build_template(mimetype)?)?;
    from_template(&template)
}

/// Turn a template container into a new, unsaved document.
pub fn from_template(template: &Container) -> Result<Container> {
    let mut clone = template.clone();
    let mimetype = strip_template_marker(clone.mimetype()?).to_string();
    clone.set_part(ODF_MIMETYPE, mimetype.clone().into_bytes());

    let mut manifest = Manifest::from_container(&mut clone)?;
    manifest.set_media_type(ROOT_PATH, &mimetype);
    clone.set_part(ODF_MANIFEST, manifest.serialize());

    tracing::debug!(%mimetype, "created document from template");
    Ok(clone)
}

/// ZIP package for one of the built-in template MIME types.
pub fn build_template(mimetype: &str) -> Result<Vec<u8>> {
    let body = match mimetype {
        ODF_TEXT_TEMPLATE => "office:text",
        ODF_SPREADSHEET_TEMPLATE => "office:spreadsheet",
        ODF_PRESENTATION_TEMPLATE => "office:presentation",
        ODF_DRAWING_TEMPLATE => "office:drawing",
        other => return Err(Error::UnknownTemplate(other.to_string())),
    };

    let mut writer = PackageWriter::new(Compression::default());
    writer.add_stored(ODF_MIMETYPE, mimetype.as_bytes())?;

    let mut manifest = Manifest::new(mimetype);
    for part in ODF_XML_PARTS {
        let xml = match part {
            XmlPart::Content => default_content_xml(body),
            XmlPart::Meta => default_meta_xml(),
            XmlPart::Settings => default_settings_xml(),
            XmlPart::Styles => default_styles_xml(),
        };
        writer.add_file(part.path(), xml.as_bytes())?;
        manifest.set_media_type(part.path(), ODF_XML_MEDIA_TYPE);
    }
    writer.add_file(ODF_MANIFEST, &manifest.serialize())?;
    writer.finish_to_bytes()
}

const OFFICE_NS: &str = r#"xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0""#;

fn default_content_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content {OFFICE_NS}
                          xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0"
                          xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"
                          xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0"
                          xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0"
                          xmlns:presentation="urn:oasis:names:tc:opendocument:xmlns:presentation:1.0"
                          office:version="1.2">
  <office:automatic-styles/>
  <office:body>
    <{body}/>
  </office:body>
</office:document-content>
"#
    )
}

fn default_styles_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-styles {OFFICE_NS}
                         xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0"
                         office:version="1.2">
  <office:font-face-decls/>
  <office:styles/>
  <office:automatic-styles/>
  <office:master-styles/>
</office:document-styles>
"#
    )
}

fn default_meta_xml() -> String {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-meta {OFFICE_NS}
                       xmlns:dc="http://purl.org/dc/elements/1.1/"
                       xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0"
                       office:version="1.2">
  <office:meta>
    <meta:generator>Litchi/{version}</meta:generator>
    <meta:creation-date>{now}</meta:creation-date>
    <dc:date>{now}</dc:date>
  </office:meta>
</office:document-meta>
"#,
        version = env!("CARGO_PKG_VERSION"),
    )
}

fn default_settings_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-settings {OFFICE_NS}
                           xmlns:config="urn:oasis:names:tc:opendocument:xmlns:config:1.0"
                           office:version="1.2">
  <office:settings/>
</office:document-settings>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::OdfFormat;
    use crate::odf::constants::{
        ODF_CONTENT, ODF_DRAWING, ODF_PRESENTATION, ODF_SPREADSHEET, ODF_TEXT, ODF_TEXT_TEMPLATE,
    };
    use crate::odf::core::SaveOptions;

    #[test]
    fn test_builtin_types() {
        for (name, expected) in [
            ("text", ODF_TEXT),
            ("spreadsheet", ODF_SPREADSHEET),
            ("presentation", ODF_PRESENTATION),
            ("drawing", ODF_DRAWING),
        ] {
            let mut container = new_container_from_type(name).unwrap();
            assert_eq!(container.mimetype().unwrap(), expected);
            assert!(!container.is_template());
            assert_eq!(container.path(), None);

            let manifest = Manifest::from_container(&mut container).unwrap();
            assert_eq!(manifest.get_media_type(ROOT_PATH), Some(expected));
        }
    }

    #[test]
    fn test_bad_type() {
        assert!(matches!(new_container_from_type("foobar"), Err(Error::UnknownTemplate(_))));
    }

    #[test]
    fn test_bad_template_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            new_container(dir.path().join("notexisting")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.ott");
        std::fs::write(&path, build_template(ODF_TEXT_TEMPLATE).unwrap()).unwrap();

        let template = Container::open(&path).unwrap();
        assert!(template.is_template());

        let mut container = new_container(&path).unwrap();
        assert_eq!(container.format(), Some(OdfFormat::Text));
        assert!(container.path().is_none());

        // The template on disk is untouched
        let mut reopened = Container::open(&path).unwrap();
        assert_eq!(reopened.mimetype().unwrap(), ODF_TEXT_TEMPLATE);
        assert_eq!(
            reopened.get_part(ODF_CONTENT).unwrap(),
            container.get_part(ODF_CONTENT).unwrap()
        );
    }

    #[test]
    fn test_new_document_saves_as_regular_type() {
        let mut container = new_container_from_type("spreadsheet").unwrap();
        let bytes = container.to_bytes(SaveOptions::default()).unwrap();

        let mut saved = Container::from_bytes(bytes).unwrap();
        assert_eq!(saved.mimetype().unwrap(), ODF_SPREADSHEET);
        let manifest = Manifest::from_container(&mut saved).unwrap();
        assert_eq!(manifest.get_media_type(ROOT_PATH), Some(ODF_SPREADSHEET));
        assert_eq!(manifest.get_media_type(ODF_CONTENT), Some(ODF_XML_MEDIA_TYPE));
    }

    #[test]
    fn test_build_template_rejects_regular_types() {
        assert!(matches!(build_template(ODF_TEXT), Err(Error::UnknownTemplate(_))));
    }
}
