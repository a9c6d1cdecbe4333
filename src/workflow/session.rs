use log::{debug, error, warn};

use crate::print_service::client::{PrintServiceClient, ServiceError};
use crate::print_service::models::{PrintOutcome, Printer};
use crate::receipt::composer;

use super::models::{PendingJob, StatusLine};

const MSG_FETCH_FAILED: &str = "Unable to fetch printer list. Please try again later.";
const MSG_COMPOSING: &str = "Generating receipt and preparing for printing...";
const MSG_REJECTED_DEFAULT: &str = "Failed to print the receipt. Please try again.";
const MSG_TRANSPORT_FAILED: &str = "An error occurred while printing the receipt. Please try again.";

/// State record for the print submission workflow.
///
/// One session models one screen lifetime: the printer directory, the
/// current selection, the last feedback message and the printing flag live
/// here and nowhere else. Nothing is persisted; a new session starts blank.
#[derive(Debug, Default)]
pub struct PrintSession {
    printers: Vec<Printer>,
    selection: Option<String>,
    status: Option<StatusLine>,
    printing: bool,
}

impl PrintSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn printers(&self) -> &[Printer] {
        &self.printers
    }

    pub fn selected_printer(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// True strictly between submit entry and request issuance.
    pub fn is_printing(&self) -> bool {
        self.printing
    }

    /// Replace the printer list with a fresh directory snapshot. A non-empty
    /// result selects the first entry by default; a failed fetch leaves the
    /// list empty and posts a persistent error status.
    pub async fn load_printers(&mut self, client: &PrintServiceClient) {
        match client.fetch_printers().await {
            Ok(printers) => {
                debug!("Fetched {} printer(s) from the print service.", printers.len());
                self.printers = printers;
                if let Some(first) = self.printers.first() {
                    self.selection = Some(first.name.clone());
                }
            }
            Err(e) => {
                error!("Error fetching printers: {:?}", e);
                self.status = Some(StatusLine::error(MSG_FETCH_FAILED));
            }
        }
    }

    /// Local selection change. Names outside the fetched directory are
    /// ignored, which keeps the selection invariant intact.
    pub fn select_printer(&mut self, name: &str) {
        if self.printers.iter().any(|p| p.name == name) {
            self.selection = Some(name.to_owned());
        } else {
            warn!("Ignoring selection of unknown printer '{}'.", name);
        }
    }

    /// Enter the composing phase: raises the printing flag, posts the info
    /// status and composes the document. Returns `None` when no printer is
    /// selected; in that case nothing changes and no request may be sent.
    pub fn begin_submit(&mut self) -> Option<PendingJob> {
        let printer = self.selection.clone()?;
        self.printing = true;
        self.status = Some(StatusLine::info(MSG_COMPOSING));
        let document = composer::compose();
        Some(PendingJob { printer, document })
    }

    /// The printing flag drops once the request is handed to the transport,
    /// not when the response settles. This preserves the workflow's observed
    /// behavior: a rapid re-submit can overlap an in-flight job, and the
    /// service treats the overlap as two independent jobs.
    pub fn mark_request_issued(&mut self) {
        self.printing = false;
    }

    /// Fold the settled submission into the feedback status.
    pub fn record_outcome(&mut self, printer: &str, outcome: Result<PrintOutcome, ServiceError>) {
        self.status = Some(match outcome {
            Ok(outcome) if outcome.success => {
                StatusLine::success(format!("Receipt successfully printed on {}!", printer))
            }
            Ok(outcome) => {
                StatusLine::error(outcome.message.unwrap_or_else(|| MSG_REJECTED_DEFAULT.to_owned()))
            }
            Err(e) => {
                error!("Error printing receipt: {:?}", e);
                StatusLine::error(MSG_TRANSPORT_FAILED)
            }
        });
    }

    /// Full submission workflow: compose, transmit, record the outcome.
    /// A missing selection is a silent no-op, not an error.
    pub async fn submit_receipt(&mut self, client: &PrintServiceClient) {
        let Some(job) = self.begin_submit() else {
            return;
        };
        let request = client.print_receipt(&job.document, &job.printer);
        self.mark_request_issued();
        let outcome = request.await;
        self.record_outcome(&job.printer, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print_service::models::{PrinterStatus, StatusIcon};
    use crate::workflow::models::StatusKind;

    fn printer(name: &str) -> Printer {
        Printer {
            name: name.to_owned(),
            status: PrinterStatus {
                icon: StatusIcon::Ready,
                message: "Ready to print".to_owned(),
            },
        }
    }

    fn session_with(printers: Vec<Printer>) -> PrintSession {
        let selection = printers.first().map(|p| p.name.clone());
        PrintSession { printers, selection, status: None, printing: false }
    }

    #[test]
    fn fresh_session_is_idle_and_unselected() {
        let session = PrintSession::new();
        assert!(session.printers().is_empty());
        assert!(session.selected_printer().is_none());
        assert!(session.status().is_none());
        assert!(!session.is_printing());
    }

    #[test]
    fn selecting_a_known_printer_changes_the_selection() {
        let mut session = session_with(vec![printer("HP-1"), printer("HP-2")]);
        session.select_printer("HP-2");
        assert_eq!(session.selected_printer(), Some("HP-2"));
    }

    #[test]
    fn selecting_an_unknown_printer_is_ignored() {
        let mut session = session_with(vec![printer("HP-1")]);
        session.select_printer("Basement-Laser");
        assert_eq!(session.selected_printer(), Some("HP-1"));
    }

    #[test]
    fn begin_submit_without_selection_changes_nothing() {
        let mut session = PrintSession::new();
        assert!(session.begin_submit().is_none());
        assert!(session.status().is_none());
        assert!(!session.is_printing());
    }

    #[test]
    fn begin_submit_raises_flag_and_posts_info_status() {
        let mut session = session_with(vec![printer("HP-1")]);
        let job = session.begin_submit().unwrap();
        assert_eq!(job.printer, "HP-1");
        assert_eq!(job.document, composer::compose());
        assert!(session.is_printing());
        assert_eq!(session.status(), Some(&StatusLine::info(MSG_COMPOSING)));
    }

    #[test]
    fn printing_flag_drops_at_request_issuance() {
        let mut session = session_with(vec![printer("HP-1")]);
        session.begin_submit().unwrap();
        assert!(session.is_printing());
        session.mark_request_issued();
        assert!(!session.is_printing());
    }

    #[test]
    fn accepted_outcome_reports_the_printer_name() {
        let mut session = session_with(vec![printer("HP-1")]);
        session.record_outcome("HP-1", Ok(PrintOutcome { success: true, message: None }));
        assert_eq!(
            session.status(),
            Some(&StatusLine::success("Receipt successfully printed on HP-1!"))
        );
        assert!(!session.is_printing());
    }

    #[test]
    fn rejected_outcome_prefers_the_service_message() {
        let mut session = session_with(vec![printer("HP-1")]);
        session.record_outcome(
            "HP-1",
            Ok(PrintOutcome { success: false, message: Some("out of paper".to_owned()) }),
        );
        assert_eq!(session.status(), Some(&StatusLine::error("out of paper")));
    }

    #[test]
    fn rejected_outcome_without_message_uses_the_default() {
        let mut session = session_with(vec![printer("HP-1")]);
        session.record_outcome("HP-1", Ok(PrintOutcome { success: false, message: None }));
        assert_eq!(session.status(), Some(&StatusLine::error(MSG_REJECTED_DEFAULT)));
    }

    #[test]
    fn transport_failure_uses_the_generic_message() {
        let mut session = session_with(vec![printer("HP-1")]);
        let failure = ServiceError::InvalidBaseUrl {
            url: "not a url".to_owned(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        session.record_outcome("HP-1", Err(failure));
        let status = session.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, MSG_TRANSPORT_FAILED);
    }
}
