//! Cloud drive upload is not implemented; the command only explains how a
//! user would set it up and how to upload exports by hand.

const DRIVE_INSTRUCTIONS: &str = "Google Drive integration requires a Google Cloud project Client ID.

To enable this:
1. Create a project in Google Cloud Console.
2. Enable the Google Drive and Sheets APIs.
3. Create an OAuth 2.0 Client ID.
4. Add your CLIENT_ID to the hourgrid configuration.

For now, use `hourgrid export --format csv` or `--format xlsx` and upload the file to Drive manually.";

/// Instruction text wrapped to `width` columns.
pub fn drive_instructions(width: usize) -> String {
    DRIVE_INSTRUCTIONS
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                textwrap::fill(line, width)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
