//! Tests for the music service client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring the real microservice.

use delta_core::{AudioPayload, DeltaError, MusicService, VideoId};
use delta_music_client::{MusicClientError, MusicServiceClient, ServiceConfig};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn song_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Title {id}"),
        "artists": ["Artist One", "Artist Two"],
        "thumbnails": {
            "large": format!("https://img/{id}/large.jpg"),
            "mini": format!("https://img/{id}/mini.jpg")
        },
        "duration": "3:45"
    })
}

async fn client_for(server: &MockServer) -> MusicServiceClient {
    MusicServiceClient::new(ServiceConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_https_url() {
        assert!(MusicServiceClient::new(ServiceConfig::new("https://example.com")).is_ok());
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = MusicServiceClient::new(ServiceConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_empty_url_rejected() {
        match MusicServiceClient::new(ServiceConfig::new("  ")).unwrap_err() {
            MusicClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_ftp_scheme_rejected() {
        match MusicServiceClient::new(ServiceConfig::new("ftp://example.com")).unwrap_err() {
            MusicClientError::InvalidUrl(msg) => assert!(msg.contains("http://")),
            other => panic!("Expected InvalidUrl error, got {other:?}"),
        }
    }
}

// =============================================================================
// Search Tests
// =============================================================================

mod search {
    use super::*;

    #[tokio::test]
    async fn test_search_sends_query_and_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("query", "never gonna"))
            .and(query_param("lim", "15"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([song_json("a"), song_json("b")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let songs = client_for(&server).await.search("never gonna", 15).await.unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].id, VideoId::new("a"));
        assert_eq!(songs[0].artist_line(), "Artist One, Artist Two");
        assert_eq!(songs[1].duration_secs(), Some(225));
    }

    #[tokio::test]
    async fn test_search_with_invalid_song_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "a",
                "title": "No thumbnails",
                "duration": "1:00"
            }])))
            .mount(&server)
            .await;

        let err = client_for(&server).await.search("x", 5).await.unwrap_err();
        assert!(matches!(err, MusicClientError::ParseError(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        match client_for(&server).await.search("x", 5).await.unwrap_err() {
            MusicClientError::ServiceError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("Expected ServiceError, got {other:?}"),
        }
    }
}

// =============================================================================
// Recommendations Tests
// =============================================================================

mod recommendations {
    use super::*;

    #[tokio::test]
    async fn test_recommendations_returns_track_and_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recommendations"))
            .and(query_param("video_id", "a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "track": song_json("a"),
                "recommendations": [song_json("b"), song_json("c")]
            })))
            .mount(&server)
            .await;

        let listing = client_for(&server)
            .await
            .recommendations(&VideoId::new("a"))
            .await
            .unwrap();

        assert_eq!(listing.track.id, VideoId::new("a"));
        let ids: Vec<_> = listing.recommendations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_unknown_track_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recommendations"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.recommendations(&VideoId::new("zzz")).await.unwrap_err();
        assert!(matches!(err, MusicClientError::NotFound(ref id) if id == "zzz"));

        // Through the trait the error becomes a core not-found
        let err = MusicService::recommendations(&client, &VideoId::new("zzz"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

// =============================================================================
// Download Tests
// =============================================================================

mod download {
    use super::*;

    #[tokio::test]
    async fn test_download_binary_audio() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download"))
            .and(query_param("video_id", "a"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(vec![1u8, 2, 3, 4], "audio/webm"))
            .mount(&server)
            .await;

        let audio = client_for(&server).await.download(&VideoId::new("a")).await.unwrap();

        match audio {
            AudioPayload::Blob {
                bytes,
                content_type,
            } => {
                assert_eq!(bytes.as_ref(), &[1, 2, 3, 4]);
                assert_eq!(content_type, "audio/webm");
            }
            other => panic!("Expected blob, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_download_stream_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "url": "https://cdn.example.com/a.webm" })),
            )
            .mount(&server)
            .await;

        let audio = client_for(&server).await.download(&VideoId::new("a")).await.unwrap();
        assert_eq!(
            audio,
            AudioPayload::StreamUrl("https://cdn.example.com/a.webm".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_download_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(Vec::<u8>::new(), "audio/webm"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.download(&VideoId::new("a")).await.unwrap_err();
        assert!(matches!(err, MusicClientError::ParseError(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_trait_maps_service_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = MusicService::download(&client, &VideoId::new("a"))
            .await
            .unwrap_err();
        assert!(matches!(err, DeltaError::MusicService(_)), "got {err:?}");
    }
}

// =============================================================================
// Connectivity Tests
// =============================================================================

mod connectivity {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_service() {
        // Nothing listens on port 9 (discard) on test machines
        let client = MusicServiceClient::new(ServiceConfig::new("http://127.0.0.1:9")).unwrap();

        let err = client.search("x", 1).await.unwrap_err();
        assert!(
            matches!(
                err,
                MusicClientError::ServiceUnreachable(_) | MusicClientError::Request(_)
            ),
            "got {err:?}"
        );
    }
}
