// File intake validation

use crate::models::{Diagnostic, FileMeta};

/// Maximum number of files staged for one analysis
pub const MAX_FILES: usize = 5;

/// Maximum size of a single file (10MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Accepted extensions (compared lowercase)
pub const ALLOWED_EXTENSIONS: [&str; 3] = [".txt", ".docx", ".pdf"];

const INVALID_FILE_TITLE: &str = "Invalid file";
const LIMIT_REACHED_TITLE: &str = "File limit reached";

/// Per-file validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("File \"{name}\" is too large. Maximum size is 10MB.")]
    FileTooLarge { name: String, size: u64 },

    #[error("File \"{name}\" has an unsupported format. Only .txt, .docx, and .pdf files are allowed.")]
    UnsupportedFormat { name: String },
}

impl ValidationError {
    /// Name of the offending file
    pub fn file_name(&self) -> &str {
        match self {
            ValidationError::FileTooLarge { name, .. } => name,
            ValidationError::UnsupportedFormat { name } => name,
        }
    }

    /// Convert to a user-facing diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(INVALID_FILE_TITLE, self.to_string())
    }
}

/// Result of offering a batch of files to the accepted set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeOutcome<F> {
    /// Next accepted set
    pub accepted: Vec<F>,

    /// Files rejected by per-file validation, in offered order
    pub rejected: Vec<ValidationError>,

    /// Messages to show, rejections first then at most one capacity warning
    pub diagnostics: Vec<Diagnostic>,
}

/// Lowercase final dot-segment of a file name, including the dot
///
/// A name without any dot yields the whole lowercased name behind a dot,
/// which never matches an allowed extension.
pub fn file_extension(name: &str) -> String {
    let last = name.rsplit('.').next().unwrap_or_default();
    format!(".{}", last.to_lowercase())
}

/// Validate a single file
///
/// # Rules
/// - Size must not exceed 10MB
/// - Extension must be one of .txt, .docx, .pdf (case-insensitive)
///
/// The declared MIME type is not consulted.
pub fn validate_file<F: FileMeta + ?Sized>(file: &F) -> Result<(), ValidationError> {
    if file.size() > MAX_FILE_SIZE {
        return Err(ValidationError::FileTooLarge {
            name: file.name().to_string(),
            size: file.size(),
        });
    }

    let extension = file_extension(file.name());
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::UnsupportedFormat {
            name: file.name().to_string(),
        });
    }

    Ok(())
}

/// Offer a newly selected batch to the current accepted set
///
/// Invalid files are dropped with an error diagnostic each. Valid files are
/// appended in offered order until the set holds `MAX_FILES`; any surplus is
/// reported with a single warning.
///
/// A batch with no valid file clears a non-empty accepted set: the newest
/// selection defines what the user wants analyzed.
pub fn accept_files<F: FileMeta + Clone>(existing: &[F], offered: &[F]) -> IntakeOutcome<F> {
    let mut rejected = Vec::new();
    let mut valid = Vec::new();

    for file in offered {
        match validate_file(file) {
            Ok(()) => valid.push(file.clone()),
            Err(e) => rejected.push(e),
        }
    }

    let mut diagnostics: Vec<Diagnostic> = rejected.iter().map(|e| e.to_diagnostic()).collect();

    if valid.is_empty() {
        return IntakeOutcome {
            accepted: Vec::new(),
            rejected,
            diagnostics,
        };
    }

    let incoming = valid.len();
    let room = MAX_FILES.saturating_sub(existing.len());

    if incoming > room {
        diagnostics.push(Diagnostic::warning(
            LIMIT_REACHED_TITLE,
            format!(
                "Only {} of {} files were added. Maximum {} files allowed.",
                room, incoming, MAX_FILES
            ),
        ));
    }

    let mut accepted = existing.to_vec();
    accepted.extend(valid.into_iter().take(room));

    IntakeOutcome {
        accepted,
        rejected,
        diagnostics,
    }
}

/// Remove the file at `index`; out-of-range indices leave the set unchanged
pub fn remove_file<F: Clone>(accepted: &[F], index: usize) -> Vec<F> {
    accepted
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, f)| f.clone())
        .collect()
}

/// The set is full and the file input should be disabled
pub fn is_at_capacity(count: usize) -> bool {
    count >= MAX_FILES
}

/// The set holds more than `MAX_FILES` (only possible if a caller bypassed `accept_files`)
pub fn has_exceeded_limit(count: usize) -> bool {
    count > MAX_FILES
}

/// Notice shown while the accepted set is over the limit
pub fn exceeded_limit_notice() -> String {
    format!(
        "Maximum {} files allowed. Please remove some files before adding more.",
        MAX_FILES
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Severity, UploadedFile};

    fn file(name: &str, size: u64) -> UploadedFile {
        UploadedFile::new(name, size)
    }

    #[test]
    fn test_valid_file() {
        assert!(validate_file(&file("essay.txt", 1024)).is_ok());
        assert!(validate_file(&file("Report.PDF", 1024)).is_ok());
        assert!(validate_file(&file("draft.v2.Docx", 1024)).is_ok());
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_file(&file("exact.txt", MAX_FILE_SIZE)).is_ok());
        assert!(matches!(
            validate_file(&file("big.txt", MAX_FILE_SIZE + 1)),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_size_checked_before_format() {
        let err = validate_file(&file("huge.exe", MAX_FILE_SIZE + 1)).unwrap_err();
        assert!(matches!(err, ValidationError::FileTooLarge { .. }));
    }

    #[test]
    fn test_unsupported_formats() {
        for name in ["b.exe", "README", "notes.md", "archive.txt.zip", "trailing."] {
            assert!(
                matches!(
                    validate_file(&file(name, 10)),
                    Err(ValidationError::UnsupportedFormat { .. })
                ),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("a.TXT"), ".txt");
        assert_eq!(file_extension("a.b.pdf"), ".pdf");
        assert_eq!(file_extension("README"), ".readme");
        assert_eq!(file_extension("trailing."), ".");
    }

    #[test]
    fn test_error_descriptions() {
        let too_large = validate_file(&file("big.pdf", MAX_FILE_SIZE + 1)).unwrap_err();
        assert_eq!(
            too_large.to_string(),
            "File \"big.pdf\" is too large. Maximum size is 10MB."
        );

        let format = validate_file(&file("b.exe", 1)).unwrap_err();
        let diagnostic = format.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.title, "Invalid file");
        assert_eq!(
            diagnostic.description,
            "File \"b.exe\" has an unsupported format. Only .txt, .docx, and .pdf files are allowed."
        );
    }

    #[test]
    fn test_mixed_batch_into_empty_set() {
        let offered = vec![file("a.txt", 1024), file("b.exe", 1024)];
        let outcome = accept_files(&[], &offered);

        assert_eq!(outcome.accepted, vec![file("a.txt", 1024)]);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].severity, Severity::Error);
        assert!(outcome.diagnostics[0].description.contains("b.exe"));
    }

    #[test]
    fn test_overflow_into_empty_set() {
        let offered: Vec<_> = (0..7).map(|i| file(&format!("f{}.txt", i), 10)).collect();
        let outcome = accept_files(&[], &offered);

        assert_eq!(outcome.accepted, offered[..5].to_vec());
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].severity, Severity::Warning);
        assert_eq!(outcome.diagnostics[0].title, "File limit reached");
        assert_eq!(
            outcome.diagnostics[0].description,
            "Only 5 of 7 files were added. Maximum 5 files allowed."
        );
    }

    #[test]
    fn test_partial_room_appends_in_order() {
        let existing: Vec<_> = (0..3).map(|i| file(&format!("old{}.pdf", i), 10)).collect();
        let offered: Vec<_> = (0..4).map(|i| file(&format!("new{}.docx", i), 10)).collect();
        let outcome = accept_files(&existing, &offered);

        assert_eq!(outcome.accepted.len(), 5);
        assert_eq!(outcome.accepted[..3], existing[..]);
        assert_eq!(outcome.accepted[3].name, "new0.docx");
        assert_eq!(outcome.accepted[4].name, "new1.docx");
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(
            outcome.diagnostics[0].description,
            "Only 2 of 4 files were added. Maximum 5 files allowed."
        );
    }

    #[test]
    fn test_fits_without_warning() {
        let existing = vec![file("a.txt", 1)];
        let offered = vec![file("b.txt", 1), file("c.txt", 1)];
        let outcome = accept_files(&existing, &offered);

        assert_eq!(outcome.accepted.len(), 3);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_all_invalid_batch_clears_existing() {
        let existing = vec![file("a.txt", 1), file("b.txt", 1)];
        let offered = vec![file("c.exe", 1)];
        let outcome = accept_files(&existing, &offered);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.diagnostics.len(), 1);
    }

    #[test]
    fn test_empty_batch_into_empty_set() {
        let outcome = accept_files::<UploadedFile>(&[], &[]);
        assert!(outcome.accepted.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_full_set_admits_nothing() {
        let existing: Vec<_> = (0..5).map(|i| file(&format!("f{}.txt", i), 1)).collect();
        let outcome = accept_files(&existing, &[file("extra.txt", 1)]);

        assert_eq!(outcome.accepted, existing);
        assert_eq!(
            outcome.diagnostics[0].description,
            "Only 0 of 1 files were added. Maximum 5 files allowed."
        );
    }

    #[test]
    fn test_oversized_existing_set_is_not_truncated() {
        let existing: Vec<_> = (0..6).map(|i| file(&format!("f{}.txt", i), 1)).collect();
        let outcome = accept_files(&existing, &[file("extra.txt", 1)]);

        assert_eq!(outcome.accepted.len(), 6);
        assert!(has_exceeded_limit(outcome.accepted.len()));
    }

    #[test]
    fn test_accepted_set_never_exceeds_limit() {
        let mut accepted: Vec<UploadedFile> = Vec::new();
        for round in 0..10 {
            let offered: Vec<_> = (0..round)
                .map(|i| file(&format!("r{}_{}.txt", round, i), 1))
                .collect();
            accepted = accept_files(&accepted, &offered).accepted;
            assert!(accepted.len() <= MAX_FILES);
        }
    }

    #[test]
    fn test_remove_file() {
        let set = vec![file("a.txt", 1), file("b.txt", 1), file("c.txt", 1)];
        let after = remove_file(&set, 1);
        assert_eq!(after, vec![file("a.txt", 1), file("c.txt", 1)]);
        assert_eq!(remove_file(&set, 9), set);
    }

    #[test]
    fn test_capacity_flags() {
        assert!(!is_at_capacity(4));
        assert!(is_at_capacity(5));
        assert!(!has_exceeded_limit(5));
        assert!(has_exceeded_limit(6));
        assert_eq!(
            exceeded_limit_notice(),
            "Maximum 5 files allowed. Please remove some files before adding more."
        );
    }
}
