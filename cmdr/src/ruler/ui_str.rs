// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Report;
use r3bl_ruler_overlay::{InlineString, inline_string};

/// Generate error message for unrecoverable errors.
#[must_use]
pub fn unrecoverable_error_msg(report: &Report) -> InlineString {
    inline_string!("❌ Could not run ruler due to the following problem:\n{report:?}")
}

/// Shown on stderr when `--enable-logging` is passed but the log can't be set up.
#[must_use]
pub fn logging_unavailable_msg(report: &Report) -> InlineString {
    inline_string!("⚠️ Logging is off, could not set it up: {report}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecoverable_error_msg() {
        let msg = unrecoverable_error_msg(&miette::miette!("boom"));
        assert!(msg.starts_with("❌ Could not run ruler"));
        assert!(msg.contains("boom"));
    }
}
