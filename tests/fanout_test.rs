mod common;

mod tests {
    use crate::common::{
        initialize_logging,
        mock_blockfrost::{listing_page, MockBlockfrost},
    };
    use axum::http::StatusCode;
    use blockfrost_client::{ApiError, CancellationToken, ClientError, Order, Pagination};
    use futures::StreamExt;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::time::Duration;

    fn items(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
        range.map(|n| format!("item-{n}")).collect()
    }

    #[rstest]
    #[case::short_tail(250, 3)]
    #[case::exact_multiple(200, 2)]
    #[case::single_short_page(7, 1)]
    #[case::empty(0, 0)]
    #[tokio::test]
    async fn test_walks_every_page(#[case] total: u32, #[case] expected_pages: usize) {
        initialize_logging();

        let mock = MockBlockfrost::listing(total, Duration::ZERO).await;
        let client = mock.client(4);

        let pages: Vec<_> = client.pools_all(CancellationToken::new()).collect().await;

        assert_eq!(pages.len(), expected_pages);
        assert!(pages.iter().all(|page| page.result.is_ok()));

        let all = client
            .pools_all(CancellationToken::new())
            .collect_sorted()
            .await
            .unwrap();
        assert_eq!(all, items(1..=total));

        let requests = mock.requests();
        assert!(requests.iter().all(|request| request.path == "/api/v0/pools"));
        assert!(requests.iter().all(|request| request.count() == 100));
    }

    #[tokio::test]
    #[ntest::timeout(20_000)]
    async fn test_bounded_concurrency() {
        let mock = MockBlockfrost::listing(1_000, Duration::from_millis(30)).await;

        let all = mock
            .client(3)
            .pools_all(CancellationToken::new())
            .collect_sorted()
            .await
            .unwrap();

        assert_eq!(all.len(), 1_000);
        assert!(mock.peak_in_flight() <= 3, "peak was {}", mock.peak_in_flight());
        assert!(mock.peak_in_flight() >= 2);
    }

    #[tokio::test]
    #[ntest::timeout(20_000)]
    async fn test_error_page_ends_the_walk() {
        let mock = MockBlockfrost::start(Duration::from_millis(10), |request| match request.page() {
            3 => (
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"status_code":500,"error":"Internal Server Error","message":"boom"}"#
                    .to_string(),
            ),
            page => (StatusCode::OK, listing_page(10_000, page, request.count())),
        })
        .await;
        let routines = 2;

        let pages: Vec<_> = mock
            .client(routines)
            .pools_all(CancellationToken::new())
            .collect()
            .await;

        let failed: Vec<_> = pages.iter().filter(|page| page.result.is_err()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].page, 3);
        assert!(matches!(
            failed[0].result,
            Err(ClientError::Api(ApiError::InternalServerError(_)))
        ));

        // only pages that were already in flight may follow the failure
        let last_page = pages.iter().map(|page| page.page).max().unwrap();
        assert!(last_page <= 3 + routines as u32, "walk went on to page {last_page}");
        assert!(mock.requests().len() <= 3 + routines);
    }

    #[tokio::test]
    #[ntest::timeout(20_000)]
    async fn test_collect_sorted_reports_the_error() {
        let mock = MockBlockfrost::respond(
            StatusCode::FORBIDDEN,
            r#"{"status_code":403,"error":"Forbidden","message":"Invalid project token."}"#,
        )
        .await;

        let err = mock
            .client(5)
            .pools_all(CancellationToken::new())
            .collect_sorted()
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(403));
    }

    #[tokio::test]
    #[ntest::timeout(20_000)]
    async fn test_cancellation_closes_the_stream() {
        let mock = MockBlockfrost::listing(100_000, Duration::from_secs(5)).await;
        let cancel = CancellationToken::new();
        let stream = mock.client(2).pools_all(cancel.clone());

        tokio::time::sleep(Duration::from_millis(200)).await;
        cancel.cancel();

        let pages: Vec<_> = tokio::time::timeout(Duration::from_secs(2), stream.collect())
            .await
            .expect("stream did not close after cancellation");

        assert!(pages.len() <= 2);
        assert!(pages
            .iter()
            .all(|page| matches!(page.result, Err(ClientError::Cancelled))));
    }

    #[tokio::test]
    #[ntest::timeout(20_000)]
    async fn test_cancelled_before_the_walk_is_an_error() {
        let mock = MockBlockfrost::listing(250, Duration::ZERO).await;
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = mock.client(4).pools_all(cancel).collect_sorted().await;

        assert!(matches!(result, Err(ClientError::Cancelled)));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    #[ntest::timeout(20_000)]
    async fn test_cancel_between_pages_is_an_error() {
        initialize_logging();

        let mock = MockBlockfrost::listing(100_000, Duration::ZERO).await;
        let cancel = CancellationToken::new();
        let stream = mock.client(1).pools_all(cancel.clone());

        // nobody reads, the only worker ends up waiting to hand over a page
        tokio::time::sleep(Duration::from_millis(300)).await;
        cancel.cancel();

        let result = tokio::time::timeout(Duration::from_secs(5), stream.collect_sorted())
            .await
            .expect("stream did not close after cancellation");

        assert!(matches!(result, Err(ClientError::Cancelled)));
        assert!(mock.requests().len() < 1_000);
    }

    #[tokio::test]
    #[ntest::timeout(20_000)]
    async fn test_slow_consumer_gets_every_page() {
        let mock = MockBlockfrost::listing(650, Duration::from_millis(10)).await;
        let mut stream = mock.client(2).pools_all(CancellationToken::new());

        let mut pages = Vec::new();
        while let Some(page) = stream.next().await {
            pages.push(page);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        pages.sort_by_key(|page| page.page);

        let numbers: Vec<u32> = pages.iter().map(|page| page.page).collect();
        assert_eq!(numbers, (1..=7).collect::<Vec<_>>());

        let all: Vec<String> = pages
            .into_iter()
            .flat_map(|page| page.result.unwrap())
            .collect();
        assert_eq!(all, items(1..=650));

        assert!(mock.peak_in_flight() <= 2, "peak was {}", mock.peak_in_flight());
        // at most the routines' worth of pages past the tail
        assert!(mock.requests().len() <= 7 + 2);
    }

    #[tokio::test]
    #[ntest::timeout(20_000)]
    async fn test_list_all_keeps_order_and_range() {
        let mock = MockBlockfrost::listing(150, Duration::ZERO).await;
        let base = Pagination::new()
            .count(5)
            .page(7)
            .order(Order::Desc)
            .from("8929261");

        let all: Vec<String> = mock
            .client(1)
            .list_all("blocks/latest/txs", base, CancellationToken::new())
            .collect_sorted()
            .await
            .unwrap();

        assert_eq!(all.len(), 150);

        let mut requests = mock.requests();
        requests.sort_by_key(|request| request.page());
        let queries: Vec<_> = requests
            .iter()
            .map(|request| request.raw_query.clone().unwrap_or_default())
            .collect();
        assert_eq!(
            queries,
            vec![
                "count=100&from=8929261&order=desc&page=1".to_string(),
                "count=100&from=8929261&order=desc&page=2".to_string(),
            ]
        );
    }
}
