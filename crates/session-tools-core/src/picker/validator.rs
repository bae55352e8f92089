//! Validation of external file picker selections

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{PickerConfig, Settings, DEFAULT_MAX_PICKER_FILES};
use crate::logging::Logger;
use crate::notify::Notifier;
use crate::types::PickerResult;

/// Notice shown when the picker cannot be opened
pub const UNAVAILABLE_MESSAGE: &str =
    "The file picker is not configured. Set a picker client id and access key to use it.";

/// Why a non-empty selection was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerRejection {
    /// Folders and files were picked together
    MixedSelection,
    /// More files than the configured maximum
    TooManyFiles { max: usize },
}

impl std::fmt::Display for PickerRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerRejection::MixedSelection => {
                write!(f, "Please select either files or folders, not both.")
            }
            PickerRejection::TooManyFiles { max } => {
                write!(f, "You can select at most {} files at a time.", max)
            }
        }
    }
}

/// Verdict of `PickerValidator::validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerDecision {
    /// Nothing picked; the user closed the picker
    Cancelled,
    Rejected(PickerRejection),
    Accepted,
}

/// What happened to one picker-open request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Configuration missing; the picker was never opened
    Unavailable,
    Cancelled,
    Rejected(PickerRejection),
    /// The selection was forwarded to the continuation
    Accepted,
}

/// The third-party picker widget
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// Show the picker; `None` when it was closed without a result
    async fn pick(&self, config: &PickerConfig) -> Option<PickerResult>;
}

/// Gatekeeper between the picker and whoever consumes its selection
pub struct PickerValidator {
    config: PickerConfig,
    max_files: usize,
    logger: Arc<dyn Logger>,
}

impl PickerValidator {
    pub fn new(config: PickerConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            config,
            max_files: DEFAULT_MAX_PICKER_FILES,
            logger,
        }
    }

    pub fn from_settings(settings: &Settings, logger: Arc<dyn Logger>) -> Self {
        Self::new(settings.picker.clone(), logger).with_max_files(settings.max_picker_files)
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Whether the picker may be opened at all
    pub fn is_available(&self) -> bool {
        self.config.is_configured()
    }

    /// Judge a raw selection; pure
    ///
    /// Rules in order: empty selection is a cancel, folders mixed with
    /// files are rejected, more than `max_files` files are rejected,
    /// anything else is accepted.
    pub fn validate(&self, result: &PickerResult) -> PickerDecision {
        if result.docs.is_empty() {
            return PickerDecision::Cancelled;
        }

        let (folders, files) = result.partition();
        if !folders.is_empty() && !files.is_empty() {
            return PickerDecision::Rejected(PickerRejection::MixedSelection);
        }
        if files.len() > self.max_files {
            return PickerDecision::Rejected(PickerRejection::TooManyFiles { max: self.max_files });
        }
        PickerDecision::Accepted
    }

    /// Validate `result` and dispatch it
    ///
    /// Accepted selections go to `on_pick` unchanged. Rejections are
    /// reported through `notifier` and never reach `on_pick`. A cancel is
    /// silent.
    pub fn dispatch<F>(&self, result: PickerResult, notifier: &dyn Notifier, on_pick: F) -> PickerOutcome
    where
        F: FnOnce(PickerResult),
    {
        match self.validate(&result) {
            PickerDecision::Cancelled => {
                self.logger.debug("[PickerValidator] Picker closed without a selection");
                PickerOutcome::Cancelled
            }
            PickerDecision::Rejected(reason) => {
                self.logger.info(&format!(
                    "[PickerValidator] Rejected selection of {} doc(s): {:?}",
                    result.docs.len(),
                    reason
                ));
                notifier.info(&reason.to_string());
                PickerOutcome::Rejected(reason)
            }
            PickerDecision::Accepted => {
                self.logger.debug(&format!(
                    "[PickerValidator] Accepted selection of {} doc(s)",
                    result.docs.len()
                ));
                on_pick(result);
                PickerOutcome::Accepted
            }
        }
    }

    /// Open `picker` and dispatch whatever it returns
    ///
    /// Without a client id and access key this is a no-op that reports
    /// `Unavailable`; the picker is not touched.
    pub async fn open<F>(&self, picker: &dyn FilePicker, notifier: &dyn Notifier, on_pick: F) -> PickerOutcome
    where
        F: FnOnce(PickerResult),
    {
        if !self.is_available() {
            self.logger.warn(&format!(
                "[PickerValidator] Picker unavailable ({})",
                self.config
            ));
            notifier.info(UNAVAILABLE_MESSAGE);
            return PickerOutcome::Unavailable;
        }

        match picker.pick(&self.config).await {
            Some(result) => self.dispatch(result, notifier, on_pick),
            None => {
                self.logger.debug("[PickerValidator] Picker returned no result");
                PickerOutcome::Cancelled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, MemoryLogger, NoOpLogger};
    use crate::notify::RecordingNotifier;
    use crate::types::PickerDoc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubPicker {
        result: Option<PickerResult>,
        opened: AtomicUsize,
    }

    impl StubPicker {
        fn returning(result: Option<PickerResult>) -> Self {
            Self {
                result,
                opened: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FilePicker for StubPicker {
        async fn pick(&self, _config: &PickerConfig) -> Option<PickerResult> {
            self.opened.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn validator() -> PickerValidator {
        PickerValidator::new(PickerConfig::new("client", "key"), Arc::new(NoOpLogger))
    }

    fn files(n: usize) -> PickerResult {
        PickerResult::new((0..n).map(|i| PickerDoc::file().with_id(format!("f{}", i))).collect())
    }

    #[test]
    fn test_empty_is_cancelled() {
        assert_eq!(validator().validate(&PickerResult::default()), PickerDecision::Cancelled);
    }

    #[test]
    fn test_mixed_is_rejected_before_count() {
        let mut result = files(9);
        result.docs.push(PickerDoc::folder());
        assert_eq!(
            validator().validate(&result),
            PickerDecision::Rejected(PickerRejection::MixedSelection)
        );
    }

    #[test]
    fn test_file_limit_boundary() {
        let v = validator();
        assert_eq!(v.validate(&files(5)), PickerDecision::Accepted);
        assert_eq!(
            v.validate(&files(6)),
            PickerDecision::Rejected(PickerRejection::TooManyFiles { max: 5 })
        );
    }

    #[test]
    fn test_folders_are_not_counted() {
        let folders = PickerResult::new(vec![PickerDoc::folder(); 12]);
        assert_eq!(validator().validate(&folders), PickerDecision::Accepted);
    }

    #[test]
    fn test_custom_limit() {
        let v = validator().with_max_files(2);
        assert_eq!(v.max_files(), 2);
        assert_eq!(
            v.validate(&files(3)),
            PickerDecision::Rejected(PickerRejection::TooManyFiles { max: 2 })
        );
    }

    #[test]
    fn test_dispatch_accept_forwards_original() {
        let notifier = RecordingNotifier::new();
        let original = files(2);
        let mut received = None;

        let outcome = validator().dispatch(original.clone(), &notifier, |r| received = Some(r));

        assert_eq!(outcome, PickerOutcome::Accepted);
        assert_eq!(received, Some(original));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_dispatch_reject_notifies_without_callback() {
        let notifier = RecordingNotifier::new();
        let mut called = false;

        let outcome = validator().dispatch(files(6), &notifier, |_| called = true);

        assert_eq!(outcome, PickerOutcome::Rejected(PickerRejection::TooManyFiles { max: 5 }));
        assert!(!called);
        assert_eq!(notifier.messages(), vec!["You can select at most 5 files at a time."]);
    }

    #[test]
    fn test_dispatch_cancel_is_silent() {
        let notifier = RecordingNotifier::new();
        let mut called = false;

        let outcome = validator().dispatch(PickerResult::default(), &notifier, |_| called = true);

        assert_eq!(outcome, PickerOutcome::Cancelled);
        assert!(!called);
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_open_unavailable_never_touches_picker() {
        let logger = Arc::new(MemoryLogger::new());
        let validator = PickerValidator::new(PickerConfig::new("client", ""), logger.clone());
        let picker = StubPicker::returning(Some(files(1)));
        let notifier = RecordingNotifier::new();
        let mut called = false;

        let outcome = validator.open(&picker, &notifier, |_| called = true).await;

        assert_eq!(outcome, PickerOutcome::Unavailable);
        assert_eq!(picker.opened.load(Ordering::SeqCst), 0);
        assert!(!called);
        assert_eq!(notifier.messages(), vec![UNAVAILABLE_MESSAGE]);
        assert!(logger.contains(LogLevel::Warn, "client_id=client"));
    }

    #[tokio::test]
    async fn test_open_accepts_and_forwards() {
        let picker = StubPicker::returning(Some(PickerResult::new(vec![PickerDoc::folder()])));
        let notifier = RecordingNotifier::new();
        let mut received = Vec::new();

        let outcome = validator().open(&picker, &notifier, |r| received = r.docs).await;

        assert_eq!(outcome, PickerOutcome::Accepted);
        assert_eq!(picker.opened.load(Ordering::SeqCst), 1);
        assert!(received[0].is_folder());
    }

    #[tokio::test]
    async fn test_open_closed_picker_is_cancelled() {
        let picker = StubPicker::returning(None);
        let notifier = RecordingNotifier::new();

        let outcome = validator().open(&picker, &notifier, |_| {}).await;
        assert_eq!(outcome, PickerOutcome::Cancelled);
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.max_picker_files = 3;
        let v = PickerValidator::from_settings(&settings, Arc::new(NoOpLogger));
        assert_eq!(v.max_files(), 3);
        assert!(!v.is_available());
    }
}
