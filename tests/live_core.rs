use edgar_tables::{Edgar, EdgarError, TransportError};

#[tokio::test]
#[ignore]
async fn single_get_surfaces_rate_limit() {
    let edgar = Edgar::new("test_agent example@example.com").unwrap();
    let url = "https://www.sec.gov/files/company_tickers.json";

    for _ in 0..15 {
        match edgar.get(url).await {
            Ok(_) => {}
            Err(EdgarError::Transport(TransportError::RateLimited { .. })) => break,
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }
}
