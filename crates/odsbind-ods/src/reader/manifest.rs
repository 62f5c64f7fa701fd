//! `META-INF/manifest.xml` encryption check

use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::error::OdsResult;

const MANIFEST_NS: &[u8] = b"urn:oasis:names:tc:opendocument:xmlns:manifest:1.0";

/// Check whether the manifest declares any encrypted entry
///
/// Stops at the first `encryption-data` element of the manifest namespace.
pub(crate) fn has_encryption<R: BufRead>(source: R) -> OdsResult<bool> {
    let mut xml = NsReader::from_reader(source);
    let mut buf = Vec::new();

    loop {
        match xml.read_resolved_event_into(&mut buf)? {
            (ResolveResult::Bound(Namespace(MANIFEST_NS)), Event::Start(e) | Event::Empty(e))
                if e.local_name().as_ref() == b"encryption-data" =>
            {
                return Ok(true);
            }
            (_, Event::Eof) => return Ok(false),
            _ => {}
        }
        buf.clear();
    }
}
