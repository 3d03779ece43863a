//! Terminal rendering of a lookup result

use crate::record::ProductRecord;

/// Blocking message when camera access is denied
pub const NO_ACCESS_MESSAGE: &str = "No access to the camera";

/// Prompt shown whenever scanning is (re-)armed
pub const SCAN_PROMPT: &str = "Scan your barcode";

/// Hint rendered under every result
pub const SCAN_AGAIN_HINT: &str = "Press Enter to scan again";

/// Render a product record as labeled rows.
///
/// The image slot is always rendered, whether or not the URL resolves;
/// textual rows appear only for non-empty fields.
#[must_use]
pub fn render_record(record: &ProductRecord) -> String {
    let mut output = String::new();

    if record.image_url.is_empty() {
        output.push_str("Image: (none)\n");
    } else {
        output.push_str(&format!("Image: {}\n", record.image_url));
    }

    for (label, value) in record.rows() {
        output.push_str(&format!("{label}: {value}\n"));
    }

    output
}
