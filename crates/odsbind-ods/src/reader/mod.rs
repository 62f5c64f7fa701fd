//! ODS reader

mod content;
mod manifest;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use log::debug;
use odsbind_core::Document;
use zip::result::ZipError;

use crate::error::{OdsError, OdsResult};
use crate::options::ReaderOptions;

use self::content::ContentParser;

const MANIFEST_PART: &str = "META-INF/manifest.xml";
const CONTENT_PART: &str = "content.xml";

/// ODS file reader
pub struct OdsReader;

impl OdsReader {
    /// Read a document from a file path
    pub fn read_file<P: AsRef<Path>>(path: P, options: &ReaderOptions) -> OdsResult<Document> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file), options)
    }

    /// Read a document from a seekable reader
    ///
    /// Only `META-INF/manifest.xml` (optional) and `content.xml` (required)
    /// are opened; styles, settings and embedded objects are never touched.
    pub fn read<R: Read + Seek>(reader: R, options: &ReaderOptions) -> OdsResult<Document> {
        let mut archive = zip::ZipArchive::new(reader)?;

        if Self::is_encrypted(&mut archive)? {
            if options.throw_on_encrypted {
                return Err(OdsError::Unsupported(
                    "encrypted ODS documents".to_string(),
                ));
            }
            debug!("manifest declares encryption, reading content anyway");
        }

        let content = match archive.by_name(CONTENT_PART) {
            Ok(f) => f,
            Err(ZipError::FileNotFound) => {
                return Err(OdsError::MissingPart(CONTENT_PART.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let sheets = ContentParser::new(BufReader::new(content), options).parse()?;
        Ok(Document::new(sheets))
    }

    fn is_encrypted<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> OdsResult<bool> {
        match archive.by_name(MANIFEST_PART) {
            Ok(file) => manifest::has_encryption(BufReader::new(file)),
            // A missing manifest is tolerated
            Err(ZipError::FileNotFound) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
