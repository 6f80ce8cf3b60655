//! CustomField metadata XML output.
//!
//! Each record kind has an explicit list of visible attributes. Unset and
//! empty text values are dropped; booleans and numbers are always written.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use tracing::debug;

use sfield_model::{
    CommonAttributes, FieldRecord, FieldShape, IntValue, METADATA_NAMESPACE,
    PicklistAttributes, ValueSet,
};

use crate::common::{FIELD_FILE_SUFFIX, OBJECTS_SUBDIR, ensure_parent_dir, write_text_element};

/// Root element of a field metadata document.
pub const ROOT_ELEMENT: &str = "CustomField";

/// Value of one visible attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlValue {
    Text(String),
    Bool(bool),
    Number(IntValue),
    Nested(Vec<XmlNode>),
}

/// A named element of the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    pub name: &'static str,
    pub value: XmlValue,
}

impl XmlNode {
    fn new(name: &'static str, value: XmlValue) -> Self {
        Self { name, value }
    }
}

#[derive(Default)]
struct NodeList(Vec<XmlNode>);

impl NodeList {
    fn text(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(text) = value.filter(|text| !text.is_empty()) {
            self.0.push(XmlNode::new(name, XmlValue::Text(text.to_string())));
        }
    }

    fn boolean(&mut self, name: &'static str, value: bool) {
        self.0.push(XmlNode::new(name, XmlValue::Bool(value)));
    }

    fn number(&mut self, name: &'static str, value: Option<IntValue>) {
        if let Some(number) = value {
            self.0.push(XmlNode::new(name, XmlValue::Number(number)));
        }
    }

    fn nested(&mut self, name: &'static str, children: NodeList) {
        self.0.push(XmlNode::new(name, XmlValue::Nested(children.0)));
    }
}

/// Elements written under `<CustomField>` for `record`, in document order.
pub fn visible_nodes(record: &FieldRecord) -> Vec<XmlNode> {
    let mut nodes = NodeList::default();
    nodes.text("type", Some(record.kind().as_str()));
    push_common(&mut nodes, record.common());
    push_shape(&mut nodes, record.shape());
    nodes.0
}

fn push_common(nodes: &mut NodeList, common: &CommonAttributes) {
    nodes.text("label", common.label.as_deref());
    nodes.text("fullname", common.fullname.as_deref());
    nodes.text("description", common.description.as_deref());
    nodes.text("inlineHelpText", common.inline_help_text.as_deref());
    nodes.text("defaultValue", common.default_value.as_deref());
    nodes.boolean("required", common.required);
    nodes.boolean("trackHistory", common.track_history);
    nodes.boolean("externalId", common.external_id);
    nodes.boolean("unique", common.unique);
}

fn push_shape(nodes: &mut NodeList, shape: &FieldShape) {
    match shape {
        FieldShape::Plain => {}
        FieldShape::Lookup(lookup) => {
            nodes.text("referenceTo", lookup.reference_to.as_deref());
            nodes.text("relationshipLabel", lookup.relationship_label.as_deref());
            nodes.text("relationshipName", lookup.relationship_name.as_deref());
            nodes.text("deleteConstraint", lookup.delete_constraint.as_deref());
        }
        FieldShape::AutoNumber(auto_number) => {
            nodes.text("displayFormat", auto_number.display_format.as_deref());
        }
        FieldShape::Numeric(numeric) => {
            nodes.number("precision", numeric.precision);
            nodes.number("scale", numeric.scale);
        }
        FieldShape::Number(number) => {
            nodes.number("precision", number.numeric.precision);
            nodes.number("scale", number.numeric.scale);
            nodes.boolean("isAIPredictionField", number.is_ai_prediction_field);
        }
        FieldShape::Location(location) => {
            nodes.boolean(
                "displayLocationInDecimal",
                location.display_location_in_decimal,
            );
            nodes.number("scale", location.scale);
        }
        FieldShape::Text(text) => {
            nodes.number("length", text.length);
            nodes.boolean("caseSensitive", text.case_sensitive);
        }
        FieldShape::ExtendedText(text) => {
            nodes.number("length", text.length);
            nodes.number("visibleLines", text.visible_lines);
        }
        FieldShape::Email(email) => {
            nodes.boolean("caseSensitive", email.case_sensitive);
        }
        FieldShape::Picklist(picklist) => push_picklist(nodes, picklist),
        FieldShape::MultiselectPicklist(multi) => {
            push_picklist(nodes, &multi.picklist);
            nodes.number("visibleLines", multi.visible_lines);
        }
        FieldShape::EncryptedText(encrypted) => {
            nodes.text("maskType", encrypted.mask_type.as_deref());
            nodes.text("maskChar", encrypted.mask_char.as_deref());
        }
        FieldShape::Summary(summary) => {
            nodes.text("summarizedField", summary.summarized_field.as_deref());
            nodes.text("summaryForeignKey", summary.summary_foreign_key.as_deref());
            nodes.text("summaryOperation", summary.summary_operation.as_deref());
        }
    }
}

// `isGlobal` only selects the value set shape and is not written.
fn push_picklist(nodes: &mut NodeList, picklist: &PicklistAttributes) {
    nodes.boolean("restricted", picklist.restricted);
    let mut value_set = NodeList::default();
    match &picklist.value_set {
        ValueSet::Global {
            restricted,
            value_set_name,
        } => {
            value_set.boolean("restricted", *restricted);
            value_set.text("valueSetname", value_set_name.as_deref());
        }
        ValueSet::Local {
            restricted,
            definition,
        } => {
            value_set.boolean("restricted", *restricted);
            let mut inline = NodeList::default();
            inline.boolean("sorted", definition.sorted);
            for value in &definition.values {
                let mut entry = NodeList::default();
                entry.text("fullName", Some(&value.full_name));
                entry.boolean("default", value.default);
                entry.text("label", Some(&value.label));
                inline.nested("value", entry);
            }
            value_set.nested("valueSetDefinition", inline);
        }
    }
    nodes.nested("valueSet", value_set);
}

fn write_node<W: Write>(xml: &mut Writer<W>, node: &XmlNode) -> Result<()> {
    match &node.value {
        XmlValue::Text(text) => write_text_element(xml, node.name, text),
        XmlValue::Bool(flag) => write_text_element(xml, node.name, if *flag { "true" } else { "false" }),
        XmlValue::Number(number) => write_text_element(xml, node.name, &number.to_string()),
        XmlValue::Nested(children) => {
            xml.write_event(Event::Start(BytesStart::new(node.name)))?;
            for child in children {
                write_node(xml, child)?;
            }
            xml.write_event(Event::End(BytesEnd::new(node.name)))?;
            Ok(())
        }
    }
}

/// Write the document for `record` to `writer`.
pub fn write_custom_field<W: Write>(writer: W, record: &FieldRecord) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 4);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new(ROOT_ELEMENT);
    root.push_attribute(("xmlns", METADATA_NAMESPACE));
    xml.write_event(Event::Start(root))?;
    for node in visible_nodes(record) {
        write_node(&mut xml, &node)?;
    }
    xml.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
    Ok(())
}

/// Render `record` as a UTF-8 document string.
///
/// Writing to memory does not fail in practice; the `Result` carries the
/// writer's error type through.
pub fn to_xml_string(record: &FieldRecord) -> Result<String> {
    let mut buffer = Vec::new();
    write_custom_field(&mut buffer, record)?;
    String::from_utf8(buffer).context("generated xml is not utf-8")
}

/// `<base>/main/default/objects/<objectName>/<fullname>.field-meta.xml`.
///
/// The object directory comes from the raw row's `objectName` cell.
pub fn field_file_path(base_dir: &Path, record: &FieldRecord) -> PathBuf {
    let object_name = record.raw_row().object_name().unwrap_or_default();
    let fullname = record.fullname().unwrap_or_default();
    base_dir
        .join(OBJECTS_SUBDIR)
        .join(object_name)
        .join(format!("{fullname}.{FIELD_FILE_SUFFIX}"))
}

/// Write the metadata file for `record` under `base_dir`, returning its path.
pub fn write_field_file(base_dir: &Path, record: &FieldRecord) -> Result<PathBuf> {
    let path = field_file_path(base_dir, record);
    ensure_parent_dir(&path)?;
    let contents = to_xml_string(record)?;
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), "field file written");
    Ok(path)
}
