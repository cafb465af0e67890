use std::{future::Future, sync::Once, time::Duration};

use marine_traffic::{MarineTrafficClient, MarineTrafficSettings};
use track_core::{RawPositionRecord, TrackQuery};
use track_viewer::{settings::MapSettings, startup::App};
use tracing_subscriber::FmtSubscriber;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path_regex},
};

static TRACING: Once = Once::new();

pub static MMSI: &str = "241000000";

pub struct TestHelper {
    pub app: App,
    pub mock_server: MockServer,
}

impl TestHelper {
    /// Serves `response` for the next `times` track requests.
    pub async fn respond_with(&self, response: ResponseTemplate, times: u64) {
        Mock::given(method("GET"))
            .and(path_regex(r"^/exportvesseltrack/.+/protocol:jsono$"))
            .respond_with(response)
            .up_to_n_times(times)
            .expect(times)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn respond_with_records(&self, records: &[RawPositionRecord]) {
        self.respond_with(ResponseTemplate::new(200).set_body_json(records), 1)
            .await;
    }
}

pub fn query(days: u32) -> TrackQuery {
    TrackQuery::parse(MMSI, &days.to_string()).unwrap()
}

pub fn record(lat: &str, lon: &str, timestamp: &str) -> RawPositionRecord {
    RawPositionRecord::new(MMSI, lat, lon, timestamp)
}

pub async fn test<T, Fut>(test: T)
where
    T: FnOnce(TestHelper) -> Fut,
    Fut: Future<Output = ()>,
{
    TRACING.call_once(|| {
        tracing::subscriber::set_global_default(
            FmtSubscriber::builder()
                .with_max_level(tracing::Level::INFO)
                .finish(),
        )
        .unwrap();
    });

    let mock_server = MockServer::start().await;

    let mut settings = MarineTrafficSettings::new("test-api-key");
    settings.base_url = mock_server.uri();
    settings.timeout = Duration::from_secs(2);

    let app = App::with_source(
        MarineTrafficClient::new(settings).unwrap(),
        MapSettings::default(),
    );

    test(TestHelper { app, mock_server }).await;
}
