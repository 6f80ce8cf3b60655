//! Salesforce metadata output for field records.
//!
//! - **CustomField XML**: one `<fullname>.field-meta.xml` document per field,
//!   laid out under `main/default/objects/<objectName>/`.

mod common;
mod custom_field_xml;

pub use common::{FIELD_FILE_SUFFIX, OBJECTS_SUBDIR, ensure_parent_dir};
pub use custom_field_xml::{
    ROOT_ELEMENT, XmlNode, XmlValue, field_file_path, to_xml_string, visible_nodes,
    write_custom_field, write_field_file,
};
