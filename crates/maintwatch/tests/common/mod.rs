use maintwatch_source::{AnnouncementSource, SourceError};
use std::sync::Mutex;

pub const MARCH_ANNOUNCEMENT: &str = "Dear Doctor, we will perform maintenance on the server \
    on March 10, 2026, 10:00-16:00 (UTC-7). After the maintenance, Doctors will receive \
    Originite Prime x200. #Arknights";

pub const APRIL_ANNOUNCEMENT: &str = "Dear Doctor, we will perform maintenance on the server \
    on April 7, 2026, 10:00-15:30 (UTC-7). Thank you for your support!";

pub const NOT_AN_ANNOUNCEMENT: &str = "The limited-time event will perform an encore soon!";

/// Replays queued responses, then reports "no result" forever.
pub struct ScriptedSource {
    responses: Mutex<Vec<Result<Option<String>, SourceError>>>,
}

impl ScriptedSource {
    pub fn new(texts: &[Option<&str>]) -> Self {
        let mut responses: Vec<_> = texts
            .iter()
            .map(|t| Ok(t.map(str::to_string)))
            .collect();
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
        }
    }

    pub fn failing_then(texts: &[Option<&str>]) -> Self {
        let source = Self::new(texts);
        source.responses.lock().unwrap().push(Err(SourceError::Server {
            status: 503,
            body: "Service Unavailable".to_string(),
        }));
        source
    }
}

impl AnnouncementSource for ScriptedSource {
    async fn latest(&self) -> Result<Option<String>, SourceError> {
        self.responses.lock().unwrap().pop().unwrap_or(Ok(None))
    }
}
