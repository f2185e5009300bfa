mod common;

mod tests {
    use crate::common::{
        initialize_logging,
        mock_blockfrost::{MockBlockfrost, PROJECT_ID},
    };
    use axum::http::StatusCode;
    use blockfrost_client::{
        config::{PROJECT_ID_ENV, USER_AGENT},
        ApiError, BlockfrostClient, BlockfrostError, ClientError, ClientOptions, Order,
        Pagination,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const ADDRESS: &str = "addr1qxqs59lphg8g6qndelq8xwqn60ag3aeyfcp33c2kdp46a09re5df3pzwwmyq946axfcejy5n4x0y99wqpgtp2gd0k09qsgy6pz";
    const STAKE_ADDRESS: &str = "stake1u9ylzsgxaa6xctf4juup682ar3juj85n8tx3hthnljg47zctvm3rc";
    const POOL_ID: &str = "pool1pu5jlj4q9w9jlxeu370a3c9myx47md5j5m2str0naunn2q3lkdy";
    const ASSET: &str = "b0d07d45fe9514f80213f4020e5a61241458be626841cde717cb38a76e7574636f696e";

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_every_request_is_authenticated() {
        initialize_logging();

        let mock = MockBlockfrost::respond(StatusCode::OK, r#"{"is_healthy":true}"#).await;
        let client = mock.client(1);

        let health = client.health().await.unwrap();
        assert!(health.is_healthy);

        let request = mock.last_request();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/api/v0/health");
        assert_eq!(request.header("project_id"), Some(PROJECT_ID));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("user-agent"), Some(USER_AGENT));
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_root_and_clock() {
        let mock = MockBlockfrost::start(std::time::Duration::ZERO, |request| {
            let body = match request.path.as_str() {
                "/api/v0/" => r#"{"url":"https://blockfrost.io/","version":"0.1.0"}"#,
                "/api/v0/health/clock" => r#"{"server_time":1603400958947}"#,
                _ => return (StatusCode::NOT_FOUND, String::new()),
            };

            (StatusCode::OK, body.to_string())
        })
        .await;
        let client = mock.client(1);

        let root = client.root().await.unwrap();
        assert_eq!(root.url, "https://blockfrost.io/");
        assert_eq!(root.version, "0.1.0");

        let clock = client.health_clock().await.unwrap();
        assert_eq!(clock.server_time, 1603400958947);
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_not_found_keeps_error_body() {
        let mock = MockBlockfrost::respond(
            StatusCode::NOT_FOUND,
            r#"{"status_code":404,"error":"Not Found","message":"The requested component has not been found."}"#,
        )
        .await;

        let err = mock.client(1).transaction("abc").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(
            err.api_error(),
            Some(&ApiError::NotFound(BlockfrostError {
                error: "Not Found".to_string(),
                message: "The requested component has not been found.".to_string(),
                status_code: 404,
            }))
        );
        assert_eq!(mock.last_request().path, "/api/v0/txs/abc");
    }

    #[rstest]
    #[case(StatusCode::BAD_REQUEST, "BadRequest")]
    #[case(StatusCode::FORBIDDEN, "Unauthorized")]
    #[case(StatusCode::NOT_FOUND, "NotFound")]
    #[case(StatusCode::IM_A_TEAPOT, "AutoBanned")]
    #[case(StatusCode::TOO_MANY_REQUESTS, "OverusageLimit")]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, "InternalServerError")]
    #[case(StatusCode::BAD_GATEWAY, "Unknown")]
    #[tokio::test]
    async fn test_status_to_error_variant(#[case] status: StatusCode, #[case] expected: &str) {
        let body = format!(
            r#"{{"status_code":{},"error":"Some Error","message":"details"}}"#,
            status.as_u16()
        );
        let mock = MockBlockfrost::respond(status, &body).await;

        let err = mock.client(1).epoch_latest().await.unwrap_err();

        let variant = match err.api_error().unwrap() {
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::Unauthorized(_) => "Unauthorized",
            ApiError::NotFound(_) => "NotFound",
            ApiError::AutoBanned(_) => "AutoBanned",
            ApiError::OverusageLimit(_) => "OverusageLimit",
            ApiError::InternalServerError(_) => "InternalServerError",
            ApiError::Unknown(_) => "Unknown",
        };

        assert_eq!(variant, expected);
        assert_eq!(err.status_code(), Some(status.as_u16()));
        assert_eq!(err.api_error().unwrap().body().message, "details");
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_undecodable_error_body_keeps_status() {
        let mock = MockBlockfrost::respond(StatusCode::TOO_MANY_REQUESTS, "<html>slow down</html>").await;

        let err = mock.client(1).network().await.unwrap_err();

        assert_eq!(
            err.api_error(),
            Some(&ApiError::OverusageLimit(BlockfrostError::from_status(429)))
        );
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_malformed_success_body_is_a_decode_error() {
        let mock = MockBlockfrost::respond(StatusCode::OK, r#"{"is_healthy":"#).await;

        let err = mock.client(1).health().await.unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_pagination_reaches_the_server() {
        let mock = MockBlockfrost::respond(StatusCode::OK, "[]").await;
        let pagination = Pagination::new().count(5).page(10).order(Order::Desc);

        let pools = mock.client(1).pools(&pagination).await.unwrap();

        assert!(pools.is_empty());
        let request = mock.last_request();
        assert_eq!(request.path, "/api/v0/pools");
        assert_eq!(request.raw_query.as_deref(), Some("count=5&order=desc&page=10"));
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_cursor_options_keep_their_own_values() {
        let mock = MockBlockfrost::respond(StatusCode::OK, "[]").await;
        let pagination = Pagination::new().from("8929261").to("9999269:10");

        mock.client(1)
            .address_transactions(ADDRESS, &pagination)
            .await
            .unwrap();

        let request = mock.last_request();
        assert_eq!(request.path, format!("/api/v0/addresses/{ADDRESS}/transactions"));
        assert_eq!(request.query.get("from").map(String::as_str), Some("8929261"));
        assert_eq!(request.query.get("to").map(String::as_str), Some("9999269:10"));
    }

    #[rstest]
    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_sub_resource_follows_its_owner() {
        let mock = MockBlockfrost::respond(StatusCode::OK, "[]").await;
        let client = mock.client(1);

        client
            .account_rewards(STAKE_ADDRESS, &Pagination::default())
            .await
            .unwrap();
        let request = mock.last_request();
        assert_eq!(request.path, format!("/api/v0/accounts/{STAKE_ADDRESS}/rewards"));
        assert_eq!(request.raw_query, None);

        client.epoch_stakes_by_pool(332, POOL_ID, &Pagination::default()).await.unwrap();
        assert_eq!(
            mock.last_request().path,
            format!("/api/v0/epochs/332/stakes/{POOL_ID}")
        );

        client.asset_history(ASSET, &Pagination::new().page(2)).await.unwrap();
        let request = mock.last_request();
        assert_eq!(request.path, format!("/api/v0/assets/{ASSET}/history"));
        assert_eq!(request.raw_query.as_deref(), Some("page=2"));
    }

    #[rstest]
    #[case::query("x?count=1&page=9", "/api/v0/accounts/x%3Fcount=1&page=9/rewards")]
    #[case::fragment("x#rewards", "/api/v0/accounts/x%23rewards/rewards")]
    #[case::slash("x/y", "/api/v0/accounts/x%2Fy/rewards")]
    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_path_parameter_stays_in_its_segment(
        #[case] stake_address: &str,
        #[case] expected_path: &str,
    ) {
        let mock = MockBlockfrost::respond(StatusCode::OK, "[]").await;

        mock.client(1)
            .account_rewards(stake_address, &Pagination::new().page(2))
            .await
            .unwrap();

        let request = mock.last_request();
        assert_eq!(request.path, expected_path);
        assert_eq!(request.raw_query.as_deref(), Some("page=2"));
        assert!(request.count() <= 100);
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_parent_segment_is_sent_encoded() {
        let mock = MockBlockfrost::respond(StatusCode::OK, "[]").await;

        mock.client(1).transaction_stakes("../pools").await.unwrap();

        assert_eq!(mock.last_request().path, "/api/v0/txs/..%2Fpools/stakes");
    }

    #[rstest]
    #[case("..")]
    #[case(".")]
    #[case("")]
    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_dot_segments_never_reach_the_server(#[case] hash: &str) {
        let mock = MockBlockfrost::respond(StatusCode::OK, "[]").await;

        let err = mock.client(1).transaction_stakes(hash).await.unwrap_err();

        assert!(matches!(err, ClientError::InvalidPath(segment) if segment == hash));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_project_id_from_environment() {
        let mock = MockBlockfrost::respond(StatusCode::OK, r#"{"is_healthy":true}"#).await;
        std::env::set_var(PROJECT_ID_ENV, "previewFromEnvironment");

        let client = BlockfrostClient::new(ClientOptions::new().server(&mock.url)).unwrap();
        client.health().await.unwrap();

        assert_eq!(
            mock.last_request().header("project_id"),
            Some("previewFromEnvironment")
        );
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_transaction_submit_sends_cbor() {
        let mock = MockBlockfrost::respond(
            StatusCode::OK,
            r#""d1662b24fa9fe985fc2dce47455df399cb2e31e1e1819339e885801cc3578908""#,
        )
        .await;
        let cbor = hex::decode("84a30081825820").unwrap();

        let hash = mock.client(1).transaction_submit(cbor.clone()).await.unwrap();

        assert_eq!(
            hash,
            "d1662b24fa9fe985fc2dce47455df399cb2e31e1e1819339e885801cc3578908"
        );

        let request = mock.last_request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/api/v0/tx/submit");
        assert_eq!(request.header("content-type"), Some("application/cbor"));
        assert_eq!(request.header("project_id"), Some(PROJECT_ID));
        assert_eq!(request.body.to_vec(), cbor);
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_submit_rejection_is_bad_request() {
        let mock = MockBlockfrost::respond(
            StatusCode::BAD_REQUEST,
            r#"{"status_code":400,"error":"Bad Request","message":"transaction submit error"}"#,
        )
        .await;

        let err = mock.client(1).transaction_submit(vec![0x80]).await.unwrap_err();

        assert!(matches!(err.api_error(), Some(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_derive_address_path() {
        let mock = MockBlockfrost::respond(
            StatusCode::OK,
            r#"{"xpub":"d507c8","role":0,"index":4,"address":"addr1q90sqnljxky88s0jsnps48jd872p7znzwym0jpzqnax6qs5nfrlkaatu28n0qzmqh7f2cpksxhpc9jefx3wrl0a2wu8q5amen7"}"#,
        )
        .await;

        let derived = mock.client(1).derive_address("d507c8", 0, 4).await.unwrap();

        assert_eq!(derived.index, 4);
        assert_eq!(mock.last_request().path, "/api/v0/utils/addresses/xpub/d507c8/0/4");
    }

    #[tokio::test]
    #[ntest::timeout(10_000)]
    async fn test_unreachable_server_is_a_transport_error() {
        let client = BlockfrostClient::new(
            ClientOptions::new()
                .project_id(PROJECT_ID)
                .server("http://127.0.0.1:1/api/v0"),
        )
        .unwrap();

        let err = client.health().await.unwrap_err();

        assert!(matches!(err, ClientError::Http(_)));
        assert_eq!(err.status_code(), None);
    }
}
