//! Session controller: the record, the view state, and the gates on the
//! export pipeline.

use crate::export::save::{deliver, DiskSaver, FileSaver};
use crate::export::{self, ExportArtifact, ExportFormat};
use crate::record::{IdentityRecord, Prefix};
use crate::surface::RenderSurface;
use crate::{locale, template, CertConfig, Result};

/// Which of the two views is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// The form is collecting the identity record.
    Collecting,
    /// A certificate is mounted and export operations are reachable.
    Previewing,
}

/// One user's certificate session.
///
/// Owns the view state and the record exclusively; every transition is an
/// explicit method. An export runs start-to-finish under `&mut self`, so
/// two export requests cannot overlap on one session.
pub struct Session {
    state: ViewState,
    record: IdentityRecord,
    issue_date: Option<String>,
    surface: RenderSurface,
    saver: Box<dyn FileSaver>,
}

impl Session {
    /// Create a session in the collecting state.
    pub async fn new(config: CertConfig) -> Result<Self> {
        let surface = RenderSurface::new(&config).await?;
        let saver: Box<dyn FileSaver> = Box::new(DiskSaver::new(config.output_dir));
        Ok(Self {
            state: ViewState::Collecting,
            record: IdentityRecord::default(),
            issue_date: None,
            surface,
            saver,
        })
    }

    /// Replace the file saver. Intended for embedders and tests.
    pub fn with_saver(mut self, saver: Box<dyn FileSaver>) -> Self {
        self.saver = saver;
        self
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn record(&self) -> &IdentityRecord {
        &self.record
    }

    pub fn set_prefix(&mut self, prefix: Option<Prefix>) {
        self.record.prefix = prefix;
    }

    pub fn set_first_name(&mut self, name: impl Into<String>) {
        self.record.first_name = name.into();
    }

    pub fn set_last_name(&mut self, name: impl Into<String>) {
        self.record.last_name = name.into();
    }

    pub fn set_record(&mut self, record: IdentityRecord) {
        self.record = record;
    }

    /// Validate the record and, on success, mount the certificate and move
    /// to previewing. On validation failure the state is untouched and the
    /// error lists every missing field; the caller surfaces it to the user.
    ///
    /// The mounted node is built from the record as it is right now; later
    /// field edits only take effect through another submit.
    pub async fn submit(&mut self) -> Result<()> {
        self.record.validate()?;

        let issue_date = locale::today_long_date();
        let svg = template::certificate_svg(&self.record, &issue_date);
        self.surface.mount(svg).await?;

        self.issue_date = Some(issue_date);
        self.state = ViewState::Previewing;
        Ok(())
    }

    /// Drop the preview and go back to collecting. The record keeps its
    /// contents for further editing.
    pub async fn edit(&mut self) -> Result<()> {
        self.surface.invalidate().await?;
        self.issue_date = None;
        self.state = ViewState::Collecting;
        Ok(())
    }

    /// Run the export pipeline: capture, encode, name, deliver.
    ///
    /// Returns `Ok(None)` when the pipeline may not run — the session is
    /// still collecting, or no node is mounted. Encoding failures
    /// propagate; delivery failures do not.
    pub async fn export(&mut self, format: ExportFormat) -> Result<Option<ExportArtifact>> {
        if self.state != ViewState::Previewing {
            log::warn!("export requested while collecting; ignoring");
            return Ok(None);
        }

        let snapshot = match self.surface.capture().await? {
            Some(snapshot) => snapshot,
            None => return Ok(None),
        };

        let artifact = export::encode(&snapshot, format)?;
        deliver(self.saver.as_ref(), &artifact);
        Ok(Some(artifact))
    }

    /// Text rendition of the certificate face. Meaningful while
    /// previewing; collecting sessions see the record as typed so far.
    pub fn preview_text(&self) -> String {
        let issue_date = self
            .issue_date
            .clone()
            .unwrap_or_else(locale::today_long_date);
        format!(
            "{}\n{}\n{}\n{} {}",
            template::TITLE,
            template::thank_you_line(&self.record),
            template::THANKS_NOTE,
            template::DATE_LABEL,
            issue_date,
        )
    }

    /// Shut the render surface down.
    pub async fn close(self) -> Result<()> {
        self.surface.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn config() -> CertConfig {
        CertConfig {
            font_path: None,
            output_dir: std::env::temp_dir().join(format!("certforge-session-{}", std::process::id())),
        }
    }

    fn fill(session: &mut Session) {
        session.set_prefix(Some(Prefix::Mr));
        session.set_first_name("สมชาย");
        session.set_last_name("ใจดี");
    }

    #[tokio::test]
    async fn starts_collecting() {
        let session = Session::new(config()).await.unwrap();
        assert_eq!(session.state(), ViewState::Collecting);
        session.close().await.unwrap();
    }

    #[tokio::test]
    async fn invalid_submit_keeps_collecting() {
        let mut session = Session::new(config()).await.unwrap();
        session.set_first_name("A");
        session.set_last_name("B");

        let err = session.submit().await.expect_err("prefix missing");
        assert!(matches!(err, Error::IncompleteRecord(_)));
        assert_eq!(session.state(), ViewState::Collecting);
        session.close().await.unwrap();
    }

    #[tokio::test]
    async fn submit_and_edit_cycle() {
        let mut session = Session::new(config()).await.unwrap();
        fill(&mut session);

        session.submit().await.unwrap();
        assert_eq!(session.state(), ViewState::Previewing);

        session.edit().await.unwrap();
        assert_eq!(session.state(), ViewState::Collecting);
        // record survives for further editing
        assert_eq!(session.record().first_name, "สมชาย");
        session.close().await.unwrap();
    }

    #[tokio::test]
    async fn export_while_collecting_is_ignored() {
        let mut session = Session::new(config()).await.unwrap();
        let res = session.export(ExportFormat::Jpeg).await.unwrap();
        assert!(res.is_none());
        session.close().await.unwrap();
    }

    #[tokio::test]
    async fn preview_text_names_the_holder() {
        let mut session = Session::new(config()).await.unwrap();
        fill(&mut session);
        session.submit().await.unwrap();
        let text = session.preview_text();
        assert!(text.contains("นาย สมชาย ใจดี"));
        assert!(text.contains(template::TITLE));
        session.close().await.unwrap();
    }
}
