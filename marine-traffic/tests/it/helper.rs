use std::{future::Future, sync::Once, time::Duration};

use marine_traffic::{MarineTrafficClient, MarineTrafficSettings};
use track_core::{RawPositionRecord, TrackQuery};
use tracing_subscriber::FmtSubscriber;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

static TRACING: Once = Once::new();

pub static API_KEY: &str = "test-api-key";
pub static MMSI: &str = "241000000";

pub struct TestHelper {
    pub mock_server: MockServer,
    pub settings: MarineTrafficSettings,
}

impl TestHelper {
    pub fn client(&self) -> MarineTrafficClient {
        MarineTrafficClient::new(self.settings.clone()).unwrap()
    }

    pub fn track_path(&self, days: u32) -> String {
        format!(
            "/exportvesseltrack/{API_KEY}/v:3/period:{}/days:{days}/mmsi:{MMSI}/protocol:jsono",
            self.settings.period.as_ref()
        )
    }

    /// Mounts a track response that must be requested exactly `expected` times.
    pub async fn mock_track(&self, days: u32, response: ResponseTemplate, expected: u64) {
        Mock::given(method("GET"))
            .and(path(self.track_path(days)))
            .and(header("accept", "application/json"))
            .respond_with(response)
            .expect(expected)
            .mount(&self.mock_server)
            .await;
    }
}

pub fn query(days: u32) -> TrackQuery {
    TrackQuery::parse(MMSI, &days.to_string()).unwrap()
}

pub fn records(n: usize) -> Vec<RawPositionRecord> {
    (0..n)
        .map(|i| {
            RawPositionRecord::new(
                MMSI,
                format!("{:.2}", 37.90 + i as f64 * 0.01),
                format!("{:.2}", 23.70 + i as f64 * 0.02),
                format!("2023-01-01T{i:02}:00:00"),
            )
        })
        .collect()
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

    let mut settings = MarineTrafficSettings::new(API_KEY);
    settings.base_url = mock_server.uri();
    settings.timeout = Duration::from_secs(2);

    test(TestHelper {
        mock_server,
        settings,
    })
    .await;
}
