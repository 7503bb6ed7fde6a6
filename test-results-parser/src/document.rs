// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoding report text into the raw, format-specific document structures.
//!
//! Raw documents mirror each source schema: XML attributes become `@`-prefixed serde fields and
//! repeated elements become `Vec`s. Numeric attributes are kept as strings, so transformers can
//! tell an absent counter from an invalid one.

use crate::{
    ReportFormat, cucumber::CucumberDocument, errors::FormatError, junit::JunitDocument,
    nunit::NunitDocument,
};
use quick_xml::{Reader, events::Event};
use serde::de::DeserializeOwned;

/// An already-decoded document of any supported format.
#[derive(Clone, Debug, PartialEq)]
pub enum RawDocument {
    /// A JUnit document.
    JUnit(JunitDocument),

    /// A Cucumber document.
    Cucumber(CucumberDocument),

    /// An NUnit document.
    NUnit(NunitDocument),
}

impl RawDocument {
    /// Decodes `content` as a document of the given format.
    pub fn decode(format: ReportFormat, content: &str) -> Result<Self, FormatError> {
        match format {
            ReportFormat::JUnit => JunitDocument::from_xml(content).map(Self::JUnit),
            ReportFormat::Cucumber => CucumberDocument::from_json(content).map(Self::Cucumber),
            ReportFormat::NUnit => NunitDocument::from_xml(content).map(Self::NUnit),
        }
    }

    /// Returns the format of this document.
    pub fn format(&self) -> ReportFormat {
        match self {
            Self::JUnit(_) => ReportFormat::JUnit,
            Self::Cucumber(_) => ReportFormat::Cucumber,
            Self::NUnit(_) => ReportFormat::NUnit,
        }
    }
}

/// Returns the local name of the root element of `content`.
pub(crate) fn xml_root_name(format: ReportFormat, content: &str) -> Result<String, FormatError> {
    let mut reader = Reader::from_str(content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                return Ok(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(FormatError::EmptyDocument { format }),
            Ok(_) => {}
            Err(err) => return Err(FormatError::Xml { format, err }),
        }
    }
}

/// Deserializes an XML document whose root has already been checked.
pub(crate) fn from_xml<T: DeserializeOwned>(
    format: ReportFormat,
    content: &str,
) -> Result<T, FormatError> {
    quick_xml::de::from_str(content).map_err(|err| FormatError::XmlDecode { format, err })
}
