use quick_xml::se;
use quick_xml::SeError;

use super::domain::EstimateReport;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Rendering requested through the optional trailing path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Xml,
}

impl ResponseFormat {
    /// Matches the wire value exactly; anything else renders JSON.
    pub fn parse(value: &str) -> Self {
        match value {
            "xml" => Self::Xml,
            _ => Self::Json,
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Xml => "application/xml",
        }
    }
}

/// Renders a report as an XML document with an `estimate` root element.
pub fn render_xml(report: &EstimateReport) -> Result<String, SeError> {
    let body = se::to_string_with_root("estimate", report)?;
    Ok(format!("{XML_DECLARATION}\n{body}"))
}
