use serde::{Deserialize, Serialize};

// ///////// //
// Directory //
// ///////// //

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrinterDirectory {
    pub printers: Vec<Printer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Printer {
    pub name: String,
    pub status: PrinterStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrinterStatus {
    pub icon: StatusIcon,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusIcon {
    Unknown,
    Degraded,
    Ready,
    Offline,
}

impl StatusIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusIcon::Unknown => "unknown",
            StatusIcon::Degraded => "degraded",
            StatusIcon::Ready => "ready",
            StatusIcon::Offline => "offline",
        }
    }
}

impl<'de> Deserialize<'de> for StatusIcon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        // The directory is trusted verbatim; anything unrecognized renders as unknown.
        Ok(match value.as_str() {
            "degraded" => StatusIcon::Degraded,
            "ready" => StatusIcon::Ready,
            "offline" => StatusIcon::Offline,
            _ => StatusIcon::Unknown,
        })
    }
}

// ////////// //
// Submission //
// ////////// //

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintRequest {
    #[serde(rename = "pdfData")]
    pub pdf_data: String,
    pub printer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
