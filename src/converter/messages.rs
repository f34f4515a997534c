//! User-facing string catalogues.
//!
//! Every piece of text the converter panel shows comes from a [`Messages`] value handed
//! in at construction time. The strings are treated as opaque content; the only thing
//! computed here is substituting the saved filename into the download notices.

use crate::config::Language;

/// Placeholder replaced by the resolved filename in download notices.
pub const FILENAME_PLACEHOLDER: &str = "{filename}";

/// Localized strings for the panel chrome and its notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub heading: String,
    pub text_placeholder: String,
    pub filename_label: String,
    pub paste_label: String,
    pub clear_label: String,
    pub download_label: String,
    pub quit_label: String,

    pub paste_success_title: String,
    pub paste_success_description: String,
    pub paste_failed_title: String,
    pub paste_failed_description: String,
    pub clear_title: String,
    pub clear_description: String,
    pub empty_text_title: String,
    pub empty_text_description: String,
    pub download_success_title: String,
    /// Must contain [`FILENAME_PLACEHOLDER`]
    pub download_success_description: String,
    pub download_failed_title: String,
    /// Must contain [`FILENAME_PLACEHOLDER`]
    pub download_failed_description: String,
}

impl Messages {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Khmer => Self::khmer(),
            Language::English => Self::english(),
        }
    }

    /// Khmer catalogue
    pub fn khmer() -> Self {
        Self {
            heading: "កម្មវិធីបម្លែងអត្ថបទទៅឯកសារ".to_string(),
            text_placeholder: "បញ្ចូលអត្ថបទរបស់អ្នកនៅទីនេះ...".to_string(),
            filename_label: "ឈ្មោះឯកសារ".to_string(),
            paste_label: "បិទភ្ជាប់".to_string(),
            clear_label: "ជម្រះ".to_string(),
            download_label: "ទាញយក".to_string(),
            quit_label: "ចាកចេញ".to_string(),

            paste_success_title: "បិទភ្ជាប់បានជោគជ័យ".to_string(),
            paste_success_description: "អត្ថបទត្រូវបានបិទភ្ជាប់ពីក្តារតម្បៀតខ្ទាស់".to_string(),
            paste_failed_title: "មិនអាចបិទភ្ជាប់បានទេ".to_string(),
            paste_failed_description:
                "មិនអាចចូលប្រើក្តារតម្បៀតខ្ទាស់បានទេ។ សូមបិទភ្ជាប់ដោយដៃ។".to_string(),
            clear_title: "ជម្រះបានជោគជ័យ".to_string(),
            clear_description: "ប្រអប់អត្ថបទត្រូវបានជម្រះ".to_string(),
            empty_text_title: "គ្មានអត្ថបទ".to_string(),
            empty_text_description: "សូមបញ្ចូលអត្ថបទដើម្បីទាញយក។".to_string(),
            download_success_title: "ទាញយកបានជោគជ័យ".to_string(),
            download_success_description: "ឯកសារ \"{filename}\" ត្រូវបានទាញយក".to_string(),
            download_failed_title: "មិនអាចទាញយកបានទេ".to_string(),
            download_failed_description: "មិនអាចរក្សាទុកឯកសារ \"{filename}\" បានទេ។".to_string(),
        }
    }

    /// English catalogue
    pub fn english() -> Self {
        Self {
            heading: "Text to File Converter".to_string(),
            text_placeholder: "Type or paste your text here...".to_string(),
            filename_label: "File name".to_string(),
            paste_label: "Paste".to_string(),
            clear_label: "Clear".to_string(),
            download_label: "Download".to_string(),
            quit_label: "Quit".to_string(),

            paste_success_title: "Pasted".to_string(),
            paste_success_description: "Text was pasted from the clipboard".to_string(),
            paste_failed_title: "Paste failed".to_string(),
            paste_failed_description:
                "The clipboard could not be read. Please paste the text manually.".to_string(),
            clear_title: "Cleared".to_string(),
            clear_description: "The text box was cleared".to_string(),
            empty_text_title: "No text".to_string(),
            empty_text_description: "Please enter some text to download.".to_string(),
            download_success_title: "Downloaded".to_string(),
            download_success_description: "File \"{filename}\" was downloaded".to_string(),
            download_failed_title: "Download failed".to_string(),
            download_failed_description: "File \"{filename}\" could not be saved.".to_string(),
        }
    }

    pub fn download_success(&self, filename: &str) -> String {
        self.download_success_description
            .replace(FILENAME_PLACEHOLDER, filename)
    }

    pub fn download_failed(&self, filename: &str) -> String {
        self.download_failed_description
            .replace(FILENAME_PLACEHOLDER, filename)
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::khmer()
    }
}
