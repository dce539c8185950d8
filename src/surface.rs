//! Async render-surface facade backed by a dedicated worker thread.
//!
//! The worker owns the font database and the currently mounted node, and
//! performs all compositing and sampling. Async callers send commands over
//! a channel and await oneshot replies, so the capture stage suspends until
//! compositing has finished without the tree ever crossing threads.

use std::sync::mpsc::{self, Sender};
use std::thread;

use tokio::sync::oneshot;

use crate::rendering::{self, compose::Compositor, RasterSnapshot, OVERSAMPLE};
use crate::{CertConfig, Error, Result};

enum Command {
    Mount(String, oneshot::Sender<Result<()>>),
    Invalidate(oneshot::Sender<Result<()>>),
    Capture(oneshot::Sender<Result<Option<RasterSnapshot>>>),
    Close(oneshot::Sender<Result<()>>),
}

/// Handle to the render surface.
///
/// Cloneable; all clones talk to the same worker and therefore to the same
/// mounted node. The node reference is optional and explicitly
/// invalidated: capturing with nothing mounted is a defined no-op that
/// yields `Ok(None)`.
#[derive(Clone)]
pub struct RenderSurface {
    cmd_tx: Sender<Command>,
}

impl RenderSurface {
    /// Spawn the worker and wait for its font database to be ready.
    pub async fn new(config: &CertConfig) -> Result<Self> {
        let font_path = config.font_path.clone();

        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (init_tx, init_rx): (oneshot::Sender<Result<()>>, oneshot::Receiver<Result<()>>) =
            oneshot::channel();

        thread::spawn(move || {
            let compositor = Compositor::new(font_path.as_deref());
            let mut mounted: Option<resvg::usvg::Tree> = None;

            let _ = init_tx.send(Ok(()));

            // Command loop
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Mount(svg, resp) => {
                        let res = match compositor.compose(&svg) {
                            Ok(tree) => {
                                mounted = Some(tree);
                                Ok(())
                            }
                            Err(e) => Err(e),
                        };
                        let _ = resp.send(res);
                    }
                    Command::Invalidate(resp) => {
                        mounted = None;
                        let _ = resp.send(Ok(()));
                    }
                    Command::Capture(resp) => {
                        let res = match mounted.as_ref() {
                            Some(tree) => {
                                rendering::raster::rasterize(tree, OVERSAMPLE).map(Some)
                            }
                            None => {
                                log::warn!("capture requested with no mounted node; ignoring");
                                Ok(None)
                            }
                        };
                        let _ = resp.send(res);
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(Ok(()));
                        break;
                    }
                }
            }
        });

        // Wait for the worker to report readiness
        let init_res = init_rx
            .await
            .map_err(|e| Error::Surface(format!("Worker init canceled: {}", e)))?;
        init_res?;

        Ok(Self { cmd_tx })
    }

    /// Compose and mount certificate markup, replacing any previous node.
    pub async fn mount(&self, svg: String) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Mount(svg, tx));
        rx.await
            .map_err(|e| Error::Surface(format!("Mount canceled: {}", e)))?
    }

    /// Drop the mounted node. Subsequent captures yield `Ok(None)`.
    pub async fn invalidate(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Invalidate(tx));
        rx.await
            .map_err(|e| Error::Surface(format!("Invalidate canceled: {}", e)))?
    }

    /// Sample the mounted node into a fresh snapshot at the fixed
    /// oversampling factor. Suspends until compositing has finished.
    pub async fn capture(&self) -> Result<Option<RasterSnapshot>> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Capture(tx));
        rx.await
            .map_err(|e| Error::Surface(format!("Capture canceled: {}", e)))?
    }

    /// Shut down the worker.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::Surface(format!("Close canceled: {}", e)))?
    }
}
