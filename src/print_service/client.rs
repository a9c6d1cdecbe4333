use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::debug;
use snafu::{ResultExt, Snafu};
use url::Url;

use crate::config::models::Service;

use super::models::{PrintOutcome, PrintRequest, Printer, PrinterDirectory};

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
pub enum ServiceError {
    #[snafu(display("Invalid print service base URL '{url}'"))]
    InvalidBaseUrl { url: String, source: url::ParseError },

    #[snafu(display("Could not reach the print service"))]
    Transport { source: reqwest::Error },

    #[snafu(display("The print service returned a malformed response"))]
    MalformedResponse { source: reqwest::Error },
}

/// HTTP client for the external print service.
///
/// The service's contract is two endpoints: `GET /printers` for the
/// directory and `POST /print-receipt` for job submission. Response bodies
/// are trusted as-is beyond the JSON parse; HTTP status codes are not
/// inspected and no timeout or retry is applied.
pub struct PrintServiceClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PrintServiceClient {
    pub fn new(service: &Service) -> Result<Self, ServiceError> {
        let base_url = Url::parse(&service.base_url)
            .context(InvalidBaseUrlSnafu { url: service.base_url.clone() })?;
        Ok(Self { http: reqwest::Client::new(), base_url })
    }

    /// Fetch the printer directory. The list is a wholesale snapshot; there
    /// are no incremental updates.
    pub async fn fetch_printers(&self) -> Result<Vec<Printer>, ServiceError> {
        let url = self.endpoint("printers");
        debug!("GET {}", url);
        let response = self.http.get(url).send().await.context(TransportSnafu)?;
        let directory: PrinterDirectory = response.json().await.context(MalformedResponseSnafu)?;
        Ok(directory.printers)
    }

    /// Submit `document` for printing on the printer named `printer`. The
    /// document bytes travel base64-encoded inside a JSON envelope.
    pub async fn print_receipt(&self, document: &[u8], printer: &str) -> Result<PrintOutcome, ServiceError> {
        let url = self.endpoint("print-receipt");
        debug!("POST {} ({} document bytes)", url, document.len());
        let body = PrintRequest {
            pdf_data: BASE64.encode(document),
            printer: printer.to_owned(),
        };
        let response = self.http.post(url).json(&body).send().await.context(TransportSnafu)?;
        let outcome: PrintOutcome = response.json().await.context(MalformedResponseSnafu)?;
        Ok(outcome)
    }

    fn endpoint(&self, path: &str) -> Url {
        self.base_url.join(path).unwrap()
    }
}
