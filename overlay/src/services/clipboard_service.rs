// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction for the clipboard service for dependency injection. This trait is
/// implemented by both a test clipboard service and a system clipboard service.
pub trait ClipboardService {
    fn try_to_put_content_into_clipboard(&mut self, content: String) -> ClipboardResult<()>;
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String>;
}

#[derive(Debug)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(&mut self, content: String) -> ClipboardResult<()> {
        let mut ctx = ClipboardContext::new()?;
        ctx.set_contents(content.clone())?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "📋 Measurement copied to clipboard", copied = %content);
        Ok(())
    }

    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
        let mut ctx = ClipboardContext::new()?;
        let content = ctx.get_contents()?;
        Ok(content)
    }
}

pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
        /// When set, every put fails, like a clipboard owned by another process.
        pub fail_puts: bool,
    }

    impl ClipboardService for TestClipboard {
        fn try_to_put_content_into_clipboard(&mut self, content: String) -> ClipboardResult<()> {
            if self.fail_puts {
                return Err("clipboard is busy".into());
            }
            self.content = content;
            Ok(())
        }

        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Ok(self.content.clone())
        }
    }
}
pub use clipboard_test_fixtures::TestClipboard;
