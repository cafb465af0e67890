use track_core::{Coordinate, FetchError, MapState, ProjectionError};
use track_viewer::render::Geometry;
use wiremock::ResponseTemplate;

use crate::helper::*;

#[tokio::test]
async fn test_submit_shows_fetched_track() {
    test(|mut helper| async move {
        helper
            .respond_with_records(&[
                record("37.9", "23.7", "2023-01-01T00:00:00Z"),
                record("38.0", "23.8", "2023-01-02T00:00:00Z"),
            ])
            .await;

        let state = helper.app.submit(&query(2)).await.unwrap();

        let view = state.view().unwrap();
        assert_eq!(Some(view.centerpoint), Coordinate::new(38.0, 23.8));
        assert_eq!(
            view.track.as_slice(),
            &[
                Coordinate::new(37.9, 23.7).unwrap(),
                Coordinate::new(38.0, 23.8).unwrap()
            ]
        );

        let doc = helper.app.render();
        assert_eq!(doc.center, [23.8, 38.0]);
        assert_eq!(doc.features.len(), 3);
    })
    .await;
}

#[tokio::test]
async fn test_transport_failure_keeps_previous_view() {
    test(|mut helper| async move {
        helper
            .respond_with_records(&[record("37.9", "23.7", "2023-01-01T00:00:00Z")])
            .await;
        helper.app.submit(&query(1)).await.unwrap();
        let before = helper.app.state().clone();

        helper
            .respond_with(ResponseTemplate::new(503), 1)
            .await;
        let err = helper.app.submit(&query(1)).await.unwrap_err();

        assert!(matches!(
            err.fetch_error(),
            Some(FetchError::Transport { .. })
        ));
        assert_eq!(helper.app.state(), &before);
    })
    .await;
}

#[tokio::test]
async fn test_failure_before_any_success_stays_uninitialized() {
    test(|mut helper| async move {
        helper
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"), 1)
            .await;

        let err = helper.app.submit(&query(1)).await.unwrap_err();

        assert!(matches!(
            err.fetch_error(),
            Some(FetchError::InvalidResponse { .. })
        ));
        assert_eq!(helper.app.state(), &MapState::Uninitialized);
        assert!(helper.app.render().features.is_empty());
    })
    .await;
}

#[tokio::test]
async fn test_all_invalid_positions_keep_previous_view() {
    test(|mut helper| async move {
        helper
            .respond_with_records(&[record("37.9", "23.7", "2023-01-01T00:00:00Z")])
            .await;
        helper.app.submit(&query(1)).await.unwrap();
        let before = helper.app.state().clone();

        helper
            .respond_with_records(&[
                record("", "23.7", "2023-01-02T00:00:00Z"),
                record("abc", "23.8", "2023-01-03T00:00:00Z"),
            ])
            .await;
        let err = helper.app.submit(&query(1)).await.unwrap_err();

        assert!(matches!(
            err.projection_error(),
            Some(ProjectionError::NoValidPoints { .. })
        ));
        assert_eq!(helper.app.state(), &before);
    })
    .await;
}

#[tokio::test]
async fn test_new_submission_replaces_whole_view() {
    test(|mut helper| async move {
        helper
            .respond_with_records(&[
                record("37.9", "23.7", "2023-01-01T00:00:00Z"),
                record("38.0", "23.8", "2023-01-02T00:00:00Z"),
                record("38.1", "23.9", "2023-01-03T00:00:00Z"),
            ])
            .await;
        helper.app.submit(&query(3)).await.unwrap();

        helper
            .respond_with_records(&[record("10.0", "20.0", "2023-02-01T00:00:00Z")])
            .await;
        let view = helper.app.submit(&query(1)).await.unwrap().view().unwrap();

        assert_eq!(view.track.len(), 1);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(Some(view.centerpoint), Coordinate::new(10.0, 20.0));

        let doc = helper.app.render();
        assert_eq!(doc.features.len(), 1);
        assert_eq!(doc.features[0].geometry, Geometry::Point([20.0, 10.0]));
    })
    .await;
}

#[tokio::test]
async fn test_write_to_file() {
    test(|mut helper| async move {
        helper
            .respond_with_records(&[
                record("37.9", "23.7", "2023-01-01T00:00:00Z"),
                record("38.0", "23.8", "2023-01-02T00:00:00Z"),
            ])
            .await;
        helper.app.submit(&query(2)).await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.geojson");
        helper.app.write(Some(&path)).unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["type"], "FeatureCollection");
        assert_eq!(written["features"].as_array().unwrap().len(), 3);
        assert_eq!(written["features"][2]["geometry"]["type"], "LineString");
    })
    .await;
}
