use std::sync::{Arc, Mutex};

/// Asks the user to affirm a destructive action
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Somewhere a print report can be opened, such as a new browser window
pub trait PrintTarget {
    type Window: PrintWindow;

    /// Open a fresh document context; `None` when the platform refuses
    fn open(&self) -> Option<Self::Window>;
}

pub trait PrintWindow {
    fn write(&mut self, html: &str);
    fn close(&mut self);
    fn focus(&mut self);
    fn print(&mut self);
}

/// Document captured by a [`CapturePrintTarget`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintedDocument {
    pub html: String,
    pub closed: bool,
    pub focused: bool,
    pub printed: bool,
}

/// Print target that keeps every opened document in memory
#[derive(Debug, Clone, Default)]
pub struct CapturePrintTarget {
    documents: Arc<Mutex<Vec<PrintedDocument>>>,
    blocked: bool,
}

impl CapturePrintTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// A target that refuses to open, like a blocked popup
    pub fn blocked() -> Self {
        Self { blocked: true, ..Self::default() }
    }

    pub fn documents(&self) -> Vec<PrintedDocument> {
        self.documents
            .lock()
            .map(|docs| docs.clone())
            .unwrap_or_default()
    }

    /// Take the most recently printed document
    pub fn take_last(&self) -> Option<PrintedDocument> {
        self.documents.lock().ok().and_then(|mut docs| docs.pop())
    }
}

impl PrintTarget for CapturePrintTarget {
    type Window = CaptureWindow;

    fn open(&self) -> Option<CaptureWindow> {
        if self.blocked {
            return None;
        }
        let mut docs = self.documents.lock().ok()?;
        docs.push(PrintedDocument::default());
        Some(CaptureWindow {
            documents: self.documents.clone(),
            index: docs.len() - 1,
        })
    }
}

pub struct CaptureWindow {
    documents: Arc<Mutex<Vec<PrintedDocument>>>,
    index: usize,
}

impl CaptureWindow {
    fn with_document(&self, f: impl FnOnce(&mut PrintedDocument)) {
        if let Ok(mut docs) = self.documents.lock() {
            if let Some(doc) = docs.get_mut(self.index) {
                f(doc);
            }
        }
    }
}

impl PrintWindow for CaptureWindow {
    fn write(&mut self, html: &str) {
        self.with_document(|doc| doc.html.push_str(html));
    }

    fn close(&mut self) {
        self.with_document(|doc| doc.closed = true);
    }

    fn focus(&mut self) {
        self.with_document(|doc| doc.focused = true);
    }

    fn print(&mut self) {
        self.with_document(|doc| doc.printed = true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_window_calls() {
        let target = CapturePrintTarget::new();
        let mut window = target.open().unwrap();
        window.write("<p>a</p>");
        window.write("<p>b</p>");
        window.close();
        window.print();

        let docs = target.documents();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].html, "<p>a</p><p>b</p>");
        assert!(docs[0].closed && docs[0].printed);
        assert!(!docs[0].focused);
    }

    #[test]
    fn test_blocked_target_does_not_open() {
        let target = CapturePrintTarget::blocked();
        assert!(target.open().is_none());
        assert!(target.documents().is_empty());
    }

    #[test]
    fn test_confirm_closure() {
        let refuse = |_: &str| false;
        assert!(!refuse.confirm("delete?"));
        let asked = |message: &str| message.ends_with('?');
        assert!(asked.confirm("delete?"));
    }
}
