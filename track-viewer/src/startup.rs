use std::{io::Write, path::Path};

use marine_traffic::MarineTrafficClient;
use snafu::ResultExt;
use track_core::{MapState, TrackQuery, TrackSource};
use tracing::{error, info, instrument};
use tracing_subscriber::FmtSubscriber;

use crate::{
    error::{
        Result,
        error::{ClientSnafu, OutputSnafu, SerializeSnafu},
    },
    render::{MapDocument, render},
    settings::{LogLevel, MapSettings, Settings},
    view::{MapView, Update, load_track},
};

pub struct App {
    source: Box<dyn TrackSource>,
    view: MapView,
    map: MapSettings,
}

impl App {
    pub fn build(settings: Settings) -> Result<App> {
        let source = MarineTrafficClient::new(settings.marine_traffic).context(ClientSnafu)?;
        Ok(Self::with_source(source, settings.map))
    }

    pub fn with_source(source: impl TrackSource + 'static, map: MapSettings) -> App {
        App {
            source: Box::new(source),
            view: MapView::new(),
            map,
        }
    }

    pub fn state(&self) -> &MapState {
        self.view.state()
    }

    /// Loads the track for `query` and shows it. On failure the error is logged and the
    /// previously shown map is kept.
    #[instrument(skip(self))]
    pub async fn submit(&mut self, query: &TrackQuery) -> Result<&MapState> {
        let submission = self.view.begin();
        let outcome = load_track(self.source.as_ref(), query).await;

        match self.view.complete(submission, outcome) {
            Ok(Update::Applied) => {
                if let Some(view) = self.view.state().view() {
                    info!("showing {} positions", view.track.len());
                }
            }
            Ok(Update::Stale) => (),
            Err(e) => {
                error!("failed to load track for mmsi '{}': {e}", query.mmsi);
                return Err(e);
            }
        }

        Ok(self.view.state())
    }

    pub fn render(&self) -> MapDocument {
        render(self.view.state(), &self.map)
    }

    /// Writes the rendered map as pretty printed GeoJSON to `path`, or stdout if `None`.
    pub fn write(&self, path: Option<&Path>) -> Result<()> {
        let document = self.render();
        match path {
            Some(path) => {
                let json = serde_json::to_vec_pretty(&document).context(SerializeSnafu)?;
                std::fs::write(path, json).context(OutputSnafu)
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                serde_json::to_writer_pretty(&mut stdout, &document).context(SerializeSnafu)?;
                writeln!(stdout).context(OutputSnafu)
            }
        }
    }
}

/// Logs go to stderr so the rendered map can be piped from stdout.
pub fn init_tracer(level: LogLevel) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::from(level))
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {e}");
    }
}
