//! Event-driven scan of a map extract document.
//!
//! First of two passes. Collects nodes and ways exactly as declared,
//! way node references are resolved later against the full node set.

use std::io::Read;
use std::str::FromStr;

use hashbrown::HashMap;
use xml::attribute::OwnedAttribute;
use xml::reader::{EventReader, XmlEvent};

use crate::error::Error;
use crate::model::{Node, NodeId, WayId};

/// A way as declared in the document, before reference resolution
#[derive(Debug)]
pub(super) struct RawWay {
    pub(super) id: WayId,
    pub(super) node_refs: Vec<NodeId>,
    pub(super) tags: HashMap<String, String>,
}

/// Everything one scan collects, in document order
#[derive(Debug, Default)]
pub(super) struct RawExtract {
    pub(super) nodes: Vec<Node>,
    pub(super) ways: Vec<RawWay>,
}

/// Reads the whole document and collects every node and way element.
///
/// `nd` and `tag` elements count only inside an open `way`, anywhere
/// else they are skipped. Unknown elements are skipped wholesale.
pub(super) fn scan<R: Read>(document: R) -> Result<RawExtract, Error> {
    let parser = EventReader::new(document);
    let mut extract = RawExtract::default();
    let mut current_way: Option<RawWay> = None;

    for event in parser {
        match event {
            Ok(XmlEvent::StartElement {
                name, attributes, ..
            }) => match name.local_name.as_str() {
                "node" => {
                    let id = parse_attribute::<NodeId>(&attributes, "id", "node")?;
                    let lat = parse_coordinate(&attributes, "lat", "node")?;
                    let lon = parse_coordinate(&attributes, "lon", "node")?;
                    extract.nodes.push(Node { id, lat, lon });
                }
                "way" => {
                    let id = parse_attribute::<WayId>(&attributes, "id", "way")?;
                    current_way = Some(RawWay {
                        id,
                        node_refs: Vec::new(),
                        tags: HashMap::new(),
                    });
                }
                "nd" => {
                    if let Some(way) = &mut current_way {
                        let node_ref = parse_attribute::<NodeId>(&attributes, "ref", "nd")?;
                        way.node_refs.push(node_ref);
                    }
                }
                "tag" => {
                    if let Some(way) = &mut current_way {
                        let key = find_attribute(&attributes, "k").unwrap_or_default();
                        let value = find_attribute(&attributes, "v").unwrap_or_default();
                        way.tags.insert(key.to_owned(), value.to_owned());
                    }
                }
                _ => {}
            },
            Ok(XmlEvent::EndElement { name }) => {
                if name.local_name.as_str() == "way" {
                    if let Some(way) = current_way.take() {
                        extract.ways.push(way);
                    }
                }
            }
            Err(e) => return Err(Error::MalformedDocument(e)),
            _ => {}
        }
    }

    Ok(extract)
}

fn parse_attribute<T: FromStr>(
    attributes: &[OwnedAttribute],
    name: &str,
    element: &str,
) -> Result<T, Error> {
    find_attribute(attributes, name)
        .and_then(|value| value.parse::<T>().ok())
        .ok_or_else(|| attribute_error(name, element))
}

/// Coordinate values tolerate surrounding whitespace, ids and
/// references are parsed exactly as written.
fn parse_coordinate(
    attributes: &[OwnedAttribute],
    name: &str,
    element: &str,
) -> Result<f64, Error> {
    find_attribute(attributes, name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .ok_or_else(|| attribute_error(name, element))
}

fn attribute_error(name: &str, element: &str) -> Error {
    Error::AttributeFormat(format!("'{name}' missing or invalid on <{element}>"))
}

fn find_attribute<'a>(attributes: &'a [OwnedAttribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attr| attr.name.local_name == name)
        .map(|attr| attr.value.as_str())
}
