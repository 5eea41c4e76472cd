//! Snowflake directives layered on top of strftime

use crate::extractor::Melted;

/// strftime's escaped percent sign
pub const ESCAPED_PERCENT: &str = "%%";
pub const DATA_CENTER_DIRECTIVE: &str = "%^d";
pub const WORKER_DIRECTIVE: &str = "%^w";
pub const SEQUENCE_DIRECTIVE: &str = "%^s";

/// Replace `%^d`, `%^w` and `%^s` with the data center, worker and sequence.
///
/// The template is cut at every `%%` first and each piece is handled on its
/// own, so `%%^d` stays an escaped percent followed by `^d`. The `%%` escapes
/// are kept for strftime.
pub fn substitute_fields(template: &str, melted: &Melted) -> String {
    let data_center = melted.data_center.to_string();
    let worker = melted.worker.to_string();
    let sequence = melted.sequence.to_string();

    template
        .split(ESCAPED_PERCENT)
        .map(|part| {
            part.replace(DATA_CENTER_DIRECTIVE, &data_center)
                .replace(WORKER_DIRECTIVE, &worker)
                .replace(SEQUENCE_DIRECTIVE, &sequence)
        })
        .collect::<Vec<_>>()
        .join(ESCAPED_PERCENT)
}
